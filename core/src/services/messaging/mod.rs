//! Contracts of the outbound and inbound messaging adapters

mod traits;
#[cfg(any(test, feature = "mocks"))]
pub mod mock;

pub use traits::{
    DeadLetterSink, EmailJobPublisher, EmailTemplate, InboundDelivery, NoopRealtimePublisher,
    RealtimePublisher, TemplateRenderer, NOTIFICATION_EVENT,
};

#[cfg(any(test, feature = "mocks"))]
pub use mock::{
    MockDelivery, RecordingDeadLetterSink, RecordingEmailPublisher, RecordingRealtimePublisher,
    StaticTemplateRenderer,
};
