use std::sync::Arc;

use crate::domain::entities::{LanguageUpdate, NewLanguage};
use crate::domain::value_objects::Visibility;
use crate::errors::{DomainError, Resource};
use crate::repositories::MockLanguageRepository;
use crate::services::language::LanguageService;

fn service() -> LanguageService {
    LanguageService::new(Arc::new(MockLanguageRepository::new()))
}

fn language(name: &str, iso_code: &str) -> NewLanguage {
    NewLanguage {
        name: name.to_string(),
        iso_code: iso_code.to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_duplicate_name_conflicts() {
    let service = service();
    service.create(language("English", "en")).await.unwrap();

    let err = service.create(language("English", "en-GB")).await.unwrap_err();

    assert_eq!(
        err,
        DomainError::AlreadyExists {
            resource: Resource::Language
        }
    );
}

#[tokio::test]
async fn test_iso_code_is_required() {
    let err = service().create(language("English", "")).await.unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));
}

#[tokio::test]
async fn test_rename_onto_existing_name_conflicts() {
    let service = service();
    service.create(language("English", "en")).await.unwrap();
    let french = service.create(language("French", "fr")).await.unwrap();

    let err = service
        .update(
            &french.id.to_string(),
            LanguageUpdate {
                name: Some("English".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::AlreadyExists { .. }));
}

#[tokio::test]
async fn test_showing_excludes_hidden() {
    let service = service();
    let en = service.create(language("English", "en")).await.unwrap();
    service.create(language("French", "fr")).await.unwrap();
    service
        .update_many_status(&[en.id.to_string()], Visibility::Hide)
        .await
        .unwrap();

    let showing = service.list_showing().await.unwrap();

    assert_eq!(showing.len(), 1);
    assert_eq!(showing[0].iso_code, "fr");
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let service = service();
    let id = service.create(language("English", "en")).await.unwrap().id.to_string();

    service.delete(&id).await.unwrap();

    assert_eq!(
        service.get(&id).await.unwrap_err(),
        DomainError::not_found(Resource::Language)
    );
}
