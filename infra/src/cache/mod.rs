//! Cache module for Redis access
//!
//! Provides the retrying Redis client and the pooled token deny-list used
//! by the authorization gate.

pub mod deny_list;
pub mod redis_client;


pub use deny_list::RedisDenyList;
pub use redis_client::RedisClient;

// Re-export commonly used types
pub use setting_shared::CacheConfig;
