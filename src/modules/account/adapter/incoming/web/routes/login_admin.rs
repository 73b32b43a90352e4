use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::account::adapter::incoming::web::dto::AdminResponse;
use crate::modules::account::application::ports::incoming::use_cases::{LoginError, LoginInput};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Login request from client
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "johndoe")]
    pub username: String,

    #[schema(example = "SecurePass123!")]
    pub password: String,
}

/// Admin login
///
/// Checks the password against the stored credential and returns the admin.
#[utoipa::path(
    post,
    path = "/api/admins/login",
    tag = "admins",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<AdminResponse>)),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_CREDENTIALS",
                    "message": "Invalid username or password"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/admins/login")]
pub async fn login_admin_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    info!(username = %dto.username, "Login attempt");

    let input = LoginInput {
        username: dto.username,
        password: dto.password,
    };

    match data.account.login.execute(input).await {
        Ok(actor) => {
            info!(admin_id = %actor.id, "Admin logged in");
            ApiResponse::success(AdminResponse::from(actor))
        }

        Err(LoginError::InvalidCredentials) => {
            warn!("Login failed: Invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid username or password")
        }

        Err(LoginError::QueryFailed(ref e)) => {
            error!(error = %e, "Database query failed");
            ApiResponse::internal_error()
        }
    }
}
