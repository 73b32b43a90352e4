use crate::shared::api::ApiResponse;
use actix_web::error::JsonPayloadError;
use actix_web::web::JsonConfig;

/// Upper bound on accepted JSON request bodies.
pub const JSON_BODY_LIMIT: usize = 16 * 1024;

pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(JSON_BODY_LIMIT)
        .error_handler(|err, req| {
            tracing::debug!(path = %req.path(), error = %err, "Rejected JSON payload");

            let response = match &err {
                JsonPayloadError::ContentType => ApiResponse::bad_request(
                    "VALIDATION_ERROR",
                    "Content type must be application/json",
                ),
                JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
                    ApiResponse::bad_request("VALIDATION_ERROR", "Request body is too large")
                }
                other => ApiResponse::bad_request("VALIDATION_ERROR", &other.to_string()),
            };

            actix_web::error::InternalError::from_response(err, response).into()
        })
}
