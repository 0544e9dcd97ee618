// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::http::StatusCode;
use actix_web::web::JsonConfig;

/// Malformed or mistyped JSON bodies become `400 {"errors": "..."}`.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        tracing::debug!(error = %message, "Rejected request body");
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::errors(StatusCode::BAD_REQUEST, message),
        )
        .into()
    })
}
