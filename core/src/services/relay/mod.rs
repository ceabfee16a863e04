//! Bridges broker events into notifications
//!
//! Every delivery is acknowledged once handled, whether it was stored or
//! dead-lettered. Redelivered duplicates are stored again.

mod payload;
mod service;

#[cfg(test)]
mod tests;

pub use payload::{CustomizationMessage, OrderMessage};
pub use service::{NotificationRelay, RelayFailure, RelayOutcome, RelayTopic};
