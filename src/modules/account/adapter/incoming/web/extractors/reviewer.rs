use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::future::{ready, Ready};
use uuid::Uuid;

use crate::shared::api::ApiResponse;

pub const REVIEWER_HEADER: &str = "X-Reviewer-Id";

/// Super admin deciding a registration, as asserted by the upstream gateway.
#[derive(Debug, Clone, Copy)]
pub struct Reviewer {
    pub reviewer_id: Uuid,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for Reviewer {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let reviewer_id = req
            .headers()
            .get(REVIEWER_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| Uuid::parse_str(value.trim()).ok());

        match reviewer_id {
            Some(reviewer_id) => ready(Ok(Reviewer { reviewer_id })),
            None => ready(Err(create_api_error(ApiResponse::unauthorized(
                "MISSING_REVIEWER",
                "Missing or invalid reviewer id",
            )))),
        }
    }
}
