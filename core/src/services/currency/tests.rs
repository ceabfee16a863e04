use std::sync::Arc;

use crate::domain::entities::{CurrencyUpdate, NewCurrency};
use crate::domain::value_objects::Visibility;
use crate::errors::{DomainError, Resource};
use crate::repositories::MockCurrencyRepository;
use crate::services::currency::CurrencyService;

fn service() -> CurrencyService {
    CurrencyService::new(Arc::new(MockCurrencyRepository::new()))
}

fn named(name: &str) -> NewCurrency {
    NewCurrency {
        name: name.to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_create_then_get_has_default_flags() {
    let service = service();

    let created = service.create(named("English")).await.unwrap();
    let fetched = service.get(&created.id.to_string()).await.unwrap();

    assert_eq!(fetched.status, Visibility::Show);
    assert_eq!(fetched.live_exchange_rates, Visibility::Show);
}

#[tokio::test]
async fn test_create_requires_name() {
    let err = service().create(named("  ")).await.unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));
}

#[tokio::test]
async fn test_delete_twice_is_not_found() {
    let service = service();
    let id = service.create(named("Euro")).await.unwrap().id.to_string();

    service.delete(&id).await.unwrap();
    let err = service.delete(&id).await.unwrap_err();

    assert_eq!(err, DomainError::not_found(Resource::Currency));
}

#[tokio::test]
async fn test_invalid_identifier() {
    let err = service().get("123").await.unwrap_err();
    assert!(matches!(err, DomainError::InvalidIdentifier { .. }));
}

#[tokio::test]
async fn test_listing_orders() {
    let service = service();
    service.create(named("Yen")).await.unwrap();
    let hidden = service.create(named("Dollar")).await.unwrap();
    service.create(named("Euro")).await.unwrap();
    service
        .update_status(&hidden.id.to_string(), Visibility::Hide)
        .await
        .unwrap();

    let all: Vec<_> = service
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    let showing: Vec<_> = service
        .list_showing()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();

    assert_eq!(all, vec!["Dollar", "Euro", "Yen"]);
    assert_eq!(showing, vec!["Euro", "Yen"]);
}

#[tokio::test]
async fn test_update_status_sets_both_flags() {
    let service = service();
    let id = service.create(named("Euro")).await.unwrap().id.to_string();

    let hidden = service.update_status(&id, Visibility::Hide).await.unwrap();
    assert_eq!(hidden.live_exchange_rates, Visibility::Hide);

    let live = service
        .update_live_exchange_rates(&id, Visibility::Show)
        .await
        .unwrap();
    assert_eq!(live.status, Visibility::Hide);
    assert_eq!(live.live_exchange_rates, Visibility::Show);
}

#[tokio::test]
async fn test_partial_update() {
    let service = service();
    let id = service.create(named("Euro")).await.unwrap().id.to_string();

    let updated = service
        .update(
            &id,
            CurrencyUpdate {
                symbol: Some("€".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Euro");
    assert_eq!(updated.symbol.as_deref(), Some("€"));
}

#[tokio::test]
async fn test_bulk_status_touches_only_listed_ids() {
    let service = service();
    let a = service.create(named("A")).await.unwrap();
    let b = service.create(named("B")).await.unwrap();
    let c = service.create(named("C")).await.unwrap();

    let modified = service
        .update_many_status(&[a.id.to_string(), c.id.to_string()], Visibility::Hide)
        .await
        .unwrap();

    assert_eq!(modified, 2);
    assert_eq!(service.get(&b.id.to_string()).await.unwrap().status, Visibility::Show);
    assert_eq!(service.get(&c.id.to_string()).await.unwrap().status, Visibility::Hide);
}

#[tokio::test]
async fn test_delete_many_without_match_is_not_found() {
    let service = service();
    service.create(named("A")).await.unwrap();

    let err = service
        .delete_many(&[uuid::Uuid::new_v4().to_string()])
        .await
        .unwrap_err();

    assert_eq!(err, DomainError::not_found(Resource::Currency));
}
