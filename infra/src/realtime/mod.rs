//! Realtime push of notifications through the API gateway's Socket.IO server

pub mod gateway;

pub use gateway::SocketIoRealtimePublisher;
