use std::sync::atomic::Ordering;
use std::sync::Arc;

use serde_json::json;
use setting_shared::MailConfig;

use crate::domain::entities::NotificationType;
use crate::domain::value_objects::ReadStatus;
use crate::repositories::MockNotificationRepository;
use crate::services::mail_bridge::MailBridge;
use crate::services::messaging::{
    MockDelivery, NoopRealtimePublisher, RecordingDeadLetterSink, RecordingEmailPublisher,
    StaticTemplateRenderer,
};
use crate::services::notification::NotificationService;
use crate::services::relay::{NotificationRelay, RelayOutcome, RelayTopic};

struct Fixture {
    relay: NotificationRelay,
    repository: Arc<MockNotificationRepository>,
    publisher: RecordingEmailPublisher,
    dead_letters: RecordingDeadLetterSink,
}

fn fixture_with(repository: MockNotificationRepository, dead_letters: RecordingDeadLetterSink) -> Fixture {
    let repository = Arc::new(repository);
    let publisher = RecordingEmailPublisher::new();
    let config = MailConfig {
        support_receivers: vec!["support@e-luxe.fr".to_string()],
        ..MailConfig::default()
    };
    let mail = Arc::new(MailBridge::new(
        Arc::new(publisher.clone()),
        Arc::new(StaticTemplateRenderer),
        config,
    ));
    let notifications = Arc::new(NotificationService::new(
        repository.clone(),
        Arc::new(NoopRealtimePublisher),
        mail.clone(),
    ));
    let relay = NotificationRelay::new(notifications, mail, Arc::new(dead_letters.clone()));

    Fixture {
        relay,
        repository,
        publisher,
        dead_letters,
    }
}

fn fixture() -> Fixture {
    fixture_with(MockNotificationRepository::new(), RecordingDeadLetterSink::new())
}

fn order_payload() -> Vec<u8> {
    serde_json::to_vec(&json!({
        "type": "order",
        "message": { "order_id": "X", "message": "Your order shipped", "user_id": "U" }
    }))
    .unwrap()
}

#[tokio::test]
async fn test_order_message_creates_one_unread_notification() {
    let f = fixture();
    let delivery = MockDelivery::new(order_payload());
    let acks = delivery.ack_counter();

    let outcome = f.relay.process(RelayTopic::OrderCreated, &delivery).await;

    let stored = f.repository.all().await;
    assert!(matches!(outcome, RelayOutcome::Stored { .. }));
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].kind, NotificationType::Order);
    assert_eq!(stored[0].order_id.as_deref(), Some("X"));
    assert_eq!(stored[0].user_id.as_deref(), Some("U"));
    assert_eq!(stored[0].status, ReadStatus::Unread);
    assert_eq!(acks.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_inner_type_takes_precedence() {
    let f = fixture();
    let payload = json!({
        "type": "order",
        "message": { "type": "product", "message": "Back in stock" }
    });

    f.relay
        .handle(RelayTopic::OrderCreated, payload.to_string().as_bytes())
        .await;

    assert_eq!(f.repository.all().await[0].kind, NotificationType::Product);
}

#[tokio::test]
async fn test_type_defaults_to_order() {
    let f = fixture();
    let payload = json!({ "message": { "order_id": "A1", "message": "Paid" } });

    f.relay
        .handle(RelayTopic::OrderCreated, payload.to_string().as_bytes())
        .await;

    assert_eq!(f.repository.all().await[0].kind, NotificationType::Order);
}

#[tokio::test]
async fn test_persistence_failure_is_acked_and_dead_lettered() {
    let f = fixture_with(MockNotificationRepository::failing(), RecordingDeadLetterSink::new());
    let delivery = MockDelivery::new(order_payload());
    let acks = delivery.ack_counter();

    let outcome = f.relay.process(RelayTopic::OrderCreated, &delivery).await;

    assert!(matches!(outcome, RelayOutcome::DeadLettered { .. }));
    assert_eq!(acks.load(Ordering::SeqCst), 1);
    assert_eq!(f.dead_letters.letters().await.len(), 1);
}

#[tokio::test]
async fn test_parse_failure_is_acked_and_dead_lettered() {
    let f = fixture();
    let delivery = MockDelivery::new(b"{not json".to_vec());
    let acks = delivery.ack_counter();

    f.relay.process(RelayTopic::OrderCreated, &delivery).await;

    let letters = f.dead_letters.letters().await;
    assert_eq!(acks.load(Ordering::SeqCst), 1);
    assert_eq!(letters.len(), 1);
    assert_eq!(letters[0].topic, "createOrderNotification");
    assert_eq!(letters[0].payload, "{not json");
    assert!(f.repository.all().await.is_empty());
}

#[tokio::test]
async fn test_dead_letter_failure_still_acks() {
    let f = fixture_with(MockNotificationRepository::new(), RecordingDeadLetterSink::failing());
    let delivery = MockDelivery::new(b"[]".to_vec());
    let acks = delivery.ack_counter();

    let outcome = f.relay.process(RelayTopic::OrderCreated, &delivery).await;

    assert!(matches!(outcome, RelayOutcome::DeadLettered { .. }));
    assert_eq!(acks.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_unknown_type_is_dead_lettered() {
    let f = fixture();
    let payload = json!({ "message": { "type": "invoice", "message": "?" } });

    let outcome = f
        .relay
        .handle(RelayTopic::OrderCreated, payload.to_string().as_bytes())
        .await;

    assert!(matches!(outcome, RelayOutcome::DeadLettered { .. }));
    assert!(f.repository.all().await.is_empty());
}

#[tokio::test]
async fn test_customization_stores_and_sends_two_emails() {
    let f = fixture();
    let payload = json!({
        "logType": "createCustomizationNotification",
        "message": {
            "product_id": "prod-1",
            "user_id": "user-1",
            "name": "Bob",
            "email": "bob@example.com",
            "phone": "+33600000000",
            "subject": "Engraving",
            "message": "Initials on the clasp",
            "image": "https://cdn.e-luxe.fr/p.png"
        }
    });

    f.relay
        .handle(RelayTopic::CustomizationRequested, payload.to_string().as_bytes())
        .await;

    let stored = f.repository.all().await;
    let jobs = f.publisher.jobs().await;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].kind, NotificationType::Customization);
    assert_eq!(stored[0].product_id.as_deref(), Some("prod-1"));
    assert_eq!(stored[0].email.as_deref(), Some("bob@example.com"));
    assert_eq!(jobs.len(), 2);
    assert_eq!(jobs[0].receivers, vec!["bob@example.com"]);
    assert_eq!(jobs[1].receivers, vec!["support@e-luxe.fr"]);
}

#[tokio::test]
async fn test_duplicates_are_stored_twice() {
    let f = fixture();

    f.relay.handle(RelayTopic::OrderCreated, &order_payload()).await;
    f.relay.handle(RelayTopic::OrderCreated, &order_payload()).await;

    assert_eq!(f.repository.all().await.len(), 2);
}

#[tokio::test]
async fn test_order_numbering_schemes_are_stored_as_is() {
    let f = fixture();

    for order_id in ["ORD/2024/0001", "#1024", "2024-11 (retry)"] {
        let payload = json!({
            "type": "order",
            "message": { "order_id": order_id, "message": "Your order shipped", "user_id": "U" }
        });
        let outcome = f
            .relay
            .handle(RelayTopic::OrderCreated, payload.to_string().as_bytes())
            .await;
        assert!(matches!(outcome, RelayOutcome::Stored { .. }), "{}", order_id);
    }

    let stored: Vec<_> = f
        .repository
        .all()
        .await
        .into_iter()
        .filter_map(|n| n.order_id)
        .collect();
    assert_eq!(stored.len(), 3);
    assert!(stored.contains(&"ORD/2024/0001".to_string()));
    assert!(f.dead_letters.letters().await.is_empty());
}

#[tokio::test]
async fn test_customization_without_support_receivers_sends_confirmation_only() {
    let repository = Arc::new(MockNotificationRepository::new());
    let publisher = RecordingEmailPublisher::new();
    let mail = Arc::new(MailBridge::new(
        Arc::new(publisher.clone()),
        Arc::new(StaticTemplateRenderer),
        MailConfig::default(),
    ));
    let notifications = Arc::new(NotificationService::new(
        repository.clone(),
        Arc::new(NoopRealtimePublisher),
        mail.clone(),
    ));
    let dead_letters = RecordingDeadLetterSink::new();
    let relay = NotificationRelay::new(notifications, mail, Arc::new(dead_letters.clone()));
    let payload = json!({
        "message": { "product_id": "prod-1", "email": "bob@example.com", "message": "Engraving" }
    });

    let outcome = relay
        .handle(RelayTopic::CustomizationRequested, payload.to_string().as_bytes())
        .await;

    let jobs = publisher.jobs().await;
    assert!(matches!(outcome, RelayOutcome::Stored { .. }));
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].receivers, vec!["bob@example.com"]);
    assert!(dead_letters.letters().await.is_empty());
}
