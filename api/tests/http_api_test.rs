mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{json, Value};

use setting_api::{create_app, HttpConfig};
use setting_core::domain::value_objects::ReadStatus;
use setting_core::services::messaging::RecordingEmailPublisher;

use common::{bearer, token, TestContext};

macro_rules! init_app {
    ($ctx:expr) => {
        test::init_service(create_app(
            $ctx.state.clone(),
            $ctx.gate.clone(),
            &HttpConfig::default(),
        ))
        .await
    };
}

#[actix_web::test]
async fn test_docs_bypass_authorization_and_locale() {
    let ctx = TestContext::new();
    let app = init_app!(ctx);

    let req = test::TestRequest::get().uri("/v1/settings/docs").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(ctx.deny_list.acquired(), 0);
}

#[actix_web::test]
async fn test_health_is_public() {
    let ctx = TestContext::new();
    let app = init_app!(ctx);

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_missing_token_is_rejected() {
    let ctx = TestContext::new();
    let app = init_app!(ctx);

    let req = test::TestRequest::get().uri("/v1/en/currencies").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "FAILED");
    assert_eq!(body["data"]["errNo"], 14);
}

#[actix_web::test]
async fn test_deny_listed_token_releases_lease_once() {
    let ctx = TestContext::new();
    let token = token();
    ctx.deny_list.insert(format!("bl_{}", token)).await;
    let app = init_app!(ctx);

    let req = test::TestRequest::get()
        .uri("/v1/en/currencies")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["errNo"], 11);
    assert_eq!(ctx.deny_list.acquired(), 1);
    assert_eq!(ctx.deny_list.released(), 1);
}

#[actix_web::test]
async fn test_lease_released_once_for_valid_and_invalid_tokens() {
    let ctx = TestContext::new();
    let app = init_app!(ctx);

    let req = test::TestRequest::get()
        .uri("/v1/en/currencies")
        .insert_header(bearer(&token()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(ctx.deny_list.released(), 1);

    let req = test::TestRequest::get()
        .uri("/v1/en/currencies")
        .insert_header(bearer("not-a-jwt"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(ctx.deny_list.released(), 2);
    assert_eq!(ctx.deny_list.acquired(), 2);
}

#[actix_web::test]
async fn test_unsupported_locale_is_rejected_before_authorization() {
    let ctx = TestContext::new();
    let app = init_app!(ctx);

    let req = test::TestRequest::get()
        .uri("/v1/de/currencies")
        .insert_header(bearer(&token()))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["errNo"], 259);
    assert_eq!(body["data"]["errMsg"], "Language not supported");
    assert_eq!(ctx.deny_list.acquired(), 0);
}

#[actix_web::test]
async fn test_created_currency_defaults_to_show() {
    let ctx = TestContext::new();
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/v1/en/currencies")
        .insert_header(bearer(&token()))
        .set_json(json!({ "name": "English" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    let id = body["data"]["_id"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri(&format!("/v1/en/currency/{}", id))
        .insert_header(bearer(&token()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "OK");
    assert_eq!(body["data"]["status"], "show");
    assert_eq!(body["data"]["live_exchange_rates"], "show");
}

#[actix_web::test]
async fn test_second_delete_is_not_found() {
    let ctx = TestContext::new();
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/v1/en/currencies")
        .insert_header(bearer(&token()))
        .set_json(json!({ "name": "Euro", "symbol": "€" }))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let id = body["data"]["_id"].as_str().unwrap().to_string();

    let delete = || {
        test::TestRequest::delete()
            .uri(&format!("/v1/en/currency/{}", id))
            .insert_header(bearer(&token()))
            .to_request()
    };

    let resp = test::call_service(&app, delete()).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = test::call_service(&app, delete()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["errNo"], 26);
    assert_eq!(body["data"]["errMsg"], "Currency not found");
}

#[actix_web::test]
async fn test_not_found_message_follows_locale() {
    let ctx = TestContext::new();
    let app = init_app!(ctx);

    let req = test::TestRequest::get()
        .uri("/v1/fr/currency/6f9619ff-8b86-d011-b42d-00c04fc964ff")
        .insert_header(bearer(&token()))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["errMsg"], "Devise introuvable");
}

#[actix_web::test]
async fn test_malformed_identifier_is_bad_request() {
    let ctx = TestContext::new();
    let app = init_app!(ctx);

    let req = test::TestRequest::get()
        .uri("/v1/en/currency/not-an-id")
        .insert_header(bearer(&token()))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["errNo"], 27);
}

#[actix_web::test]
async fn test_missing_required_field_is_precondition_failed() {
    let ctx = TestContext::new();
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/v1/en/currencies")
        .insert_header(bearer(&token()))
        .set_json(json!({ "symbol": "$" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::PRECONDITION_FAILED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["errNo"], 6);
    assert_eq!(body["data"]["errMsg"]["name"][0], "The name field is required");
}

#[actix_web::test]
async fn test_malformed_json_is_bad_request() {
    let ctx = TestContext::new();
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/v1/en/currencies")
        .insert_header(bearer(&token()))
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{\"name\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["errNo"], 259);
}

#[actix_web::test]
async fn test_duplicate_language_is_conflict() {
    let ctx = TestContext::new();
    let app = init_app!(ctx);

    let create = || {
        test::TestRequest::post()
            .uri("/v1/en/languages")
            .insert_header(bearer(&token()))
            .set_json(json!({ "name": "Français", "iso_code": "fr" }))
            .to_request()
    };

    let resp = test::call_service(&app, create()).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = test::call_service(&app, create()).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["errNo"], 260);
}

#[actix_web::test]
async fn test_global_setting_takes_default_currency_from_symbol() {
    let ctx = TestContext::new();
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/v1/en/currencies")
        .insert_header(bearer(&token()))
        .set_json(json!({ "name": "Euro", "symbol": "€" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/v1/en/setting")
        .insert_header(bearer(&token()))
        .set_json(json!({
            "name": "globalSetting",
            "setting": { "shop_name": "E-Luxe", "default_currency": "Dollar" }
        }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::put()
        .uri("/v1/en/setting/global")
        .insert_header(bearer(&token()))
        .set_json(json!({ "setting": { "default_currency_symbol": "€" } }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/v1/en/setting/global")
        .insert_header(bearer(&token()))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["shop_name"], "E-Luxe");
    assert_eq!(body["data"]["default_currency"], "Euro");
    assert_eq!(body["data"]["default_currency_symbol"], "€");
}

#[actix_web::test]
async fn test_missing_setting_document_is_not_found() {
    let ctx = TestContext::new();
    let app = init_app!(ctx);

    let req = test::TestRequest::get()
        .uri("/v1/en/setting/store/seo")
        .insert_header(bearer(&token()))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_contact_is_created_even_when_email_publish_fails() {
    let ctx = TestContext::with_email_publisher(RecordingEmailPublisher::failing());
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/v1/en/notifications")
        .insert_header(bearer(&token()))
        .set_json(json!({
            "type": "contact",
            "name": "Awa",
            "email": "awa@example.com",
            "subject": "Sizing",
            "message": "Do you ship to Dakar?"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["type"], "contact");

    let jobs = ctx.email.wait_for_jobs(1).await;
    assert_eq!(jobs.len(), 1);
    assert!(!jobs[0].body.is_empty());
    assert_eq!(jobs[0].receivers, vec!["support@e-luxe.fr".to_string()]);
    assert_eq!(ctx.realtime.wait_for_events(1).await.len(), 1);
}

#[actix_web::test]
async fn test_bulk_status_changes_exactly_listed_ids() {
    let ctx = TestContext::new();
    let app = init_app!(ctx);

    let mut ids = Vec::new();
    for order in ["A", "B", "C"] {
        let req = test::TestRequest::post()
            .uri("/v1/en/notifications")
            .insert_header(bearer(&token()))
            .set_json(json!({
                "type": "order",
                "order_id": order,
                "message": "Your order shipped"
            }))
            .to_request();
        let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
        ids.push(body["data"]["_id"].as_str().unwrap().to_string());
    }

    let req = test::TestRequest::put()
        .uri("/v1/en/notifications/many")
        .insert_header(bearer(&token()))
        .set_json(json!({ "ids": [ids[0], ids[2]], "status": "read" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["modified_count"], 2);

    for notification in ctx.notifications.all().await {
        let expected = if notification.id.to_string() == ids[1] {
            ReadStatus::Unread
        } else {
            ReadStatus::Read
        };
        assert_eq!(notification.status, expected);
    }

    let req = test::TestRequest::get()
        .uri("/v1/en/notifications?page=1&limit=2")
        .insert_header(bearer(&token()))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["totalDoc"], 3);
    assert_eq!(body["data"]["totalUnreadDoc"], 1);
    assert_eq!(body["data"]["notifications"].as_array().unwrap().len(), 2);
}

#[actix_web::test]
async fn test_single_status_reports_unread_count() {
    let ctx = TestContext::new();
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/v1/fr/notifications")
        .insert_header(bearer(&token()))
        .set_json(json!({ "type": "product", "product_id": "P1", "message": "Back in stock" }))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let id = body["data"]["_id"].as_str().unwrap().to_string();

    let req = test::TestRequest::put()
        .uri(&format!("/v1/en/notification/{}/status", id))
        .insert_header(bearer(&token()))
        .set_json(json!({ "status": "read" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["totalDoc"], 0);
    assert_eq!(body["data"]["message"], "Notification read");
}

#[actix_web::test]
async fn test_unknown_route_is_not_found() {
    let ctx = TestContext::new();
    let app = init_app!(ctx);

    let req = test::TestRequest::get()
        .uri("/v1/en/unknown")
        .insert_header(bearer(&token()))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["errNo"], 26);
}
