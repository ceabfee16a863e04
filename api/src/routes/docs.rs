//! Static endpoint index served under the documentation prefix

use actix_web::HttpResponse;
use serde_json::json;

/// API documentation endpoint
pub async fn api_documentation() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "message": "E-Luxe setting service v1",
        "endpoints": {
            "health": "/health",
            "currencies": {
                "base": "/v1/{lang}/currencies",
                "routes": [
                    "POST /currencies",
                    "POST /currencies/many",
                    "GET /currencies",
                    "GET /currencies/showing",
                    "PUT /currencies/many",
                    "DELETE /currencies/{ids}",
                    "GET /currency/{id}",
                    "PUT /currency/{id}",
                    "DELETE /currency/{id}",
                    "PUT /currency/{id}/status",
                    "PUT /currency/{id}/live-exchange-rates"
                ]
            },
            "languages": {
                "base": "/v1/{lang}/languages",
                "routes": [
                    "POST /languages",
                    "POST /languages/many",
                    "GET /languages",
                    "GET /languages/showing",
                    "PUT /languages/update/many",
                    "DELETE /languages/{ids}",
                    "GET /language/{id}",
                    "PUT /language/{id}",
                    "DELETE /language/{id}",
                    "PUT /language/{id}/status"
                ]
            },
            "settings": {
                "base": "/v1/{lang}/setting",
                "routes": [
                    "POST /setting",
                    "GET /setting/global",
                    "PUT /setting/global",
                    "GET /setting/store-setting",
                    "PUT /setting/store-setting",
                    "GET /setting/store/seo",
                    "GET /setting/store/customization?key=&keyTwo=",
                    "PUT /setting/store/customization"
                ]
            },
            "notifications": {
                "base": "/v1/{lang}/notifications",
                "routes": [
                    "POST /notifications",
                    "GET /notifications?page=&limit=",
                    "PUT /notifications/many",
                    "DELETE /notifications/{ids}/many",
                    "GET /notification/{id}",
                    "PUT /notification/{id}/status",
                    "DELETE /notification/{id}",
                    "DELETE /notification/product/{productId}"
                ]
            },
            "locales": ["en", "fr"],
            "authentication": "Bearer token in the Authorization header"
        }
    }))
}
