//! Messaging module for the AMQP broker
//!
//! Holds the lazily opened connection, the publishers of email jobs and
//! dead letters, and the relay consumer loops.

pub mod amqp;
pub mod consumer;
pub mod publisher;
pub mod topology;


pub use amqp::AmqpConnection;
pub use consumer::{spawn_relay_consumers, AmqpDelivery, RelayConsumer};
pub use publisher::{AmqpDeadLetterSink, AmqpEmailPublisher};
pub use topology::{relay_binding, Binding, DEAD_LETTER, SEND_MAIL};
