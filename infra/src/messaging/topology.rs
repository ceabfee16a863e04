//! Broker names used by the service
//!
//! Every binding is a direct exchange, a durable queue and one routing key.

use setting_core::services::RelayTopic;

/// Exchange, queue and routing key of one binding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub exchange: &'static str,
    pub queue: &'static str,
    pub routing_key: &'static str,
}

/// Email jobs consumed by the mail worker
pub const SEND_MAIL: Binding = Binding {
    exchange: "eluxe.email.sendMail",
    queue: "sendMailQueue",
    routing_key: "sendMail",
};

/// Relay messages that could not be handled
pub const DEAD_LETTER: Binding = Binding {
    exchange: "eluxe.setting.deadLetter",
    queue: "settingDeadLetterQueue",
    routing_key: "deadLetter",
};

/// Binding consumed for a relay topic
pub fn relay_binding(topic: RelayTopic) -> Binding {
    match topic {
        RelayTopic::OrderCreated => Binding {
            exchange: "eluxe.order.createOrderNotification",
            queue: "createOrderNotificationQueue",
            routing_key: "createOrderNotification",
        },
        RelayTopic::CustomizationRequested => Binding {
            exchange: "eluxe.product.createCustomizationNotification",
            queue: "createCustomizationNotificationQueue",
            routing_key: "createCustomizationNotification",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relay_routing_keys_match_topics() {
        for topic in RelayTopic::all() {
            assert_eq!(relay_binding(topic).routing_key, topic.routing_key());
        }
    }

    #[test]
    fn test_relay_queue_names() {
        assert_eq!(
            relay_binding(RelayTopic::OrderCreated).queue,
            "createOrderNotificationQueue"
        );
        assert_eq!(
            relay_binding(RelayTopic::CustomizationRequested).exchange,
            "eluxe.product.createCustomizationNotification"
        );
    }
}
