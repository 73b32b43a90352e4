use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::account::adapter::incoming::web::dto::AdminResponse;
use crate::modules::account::application::ports::incoming::use_cases::{
    CreateAdminError, CreateAdminInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateAdminRequest {
    #[schema(example = "johndoe")]
    pub username: String,
    #[schema(example = "SecurePass123!")]
    pub password: String,
    #[schema(example = 1)]
    pub role_id: i32,
    pub is_verified: bool,
    pub is_active: bool,
}

/// Create an admin account
#[utoipa::path(
    post,
    path = "/api/admins",
    tag = "admins",
    request_body = CreateAdminRequest,
    responses(
        (status = 201, description = "Admin created", body = inline(SuccessResponse<AdminResponse>)),
        (status = 409, description = "Username already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/admins")]
pub async fn create_admin_handler(
    req: web::Json<CreateAdminRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let input = CreateAdminInput {
        username: req.username,
        password: req.password,
        role_id: req.role_id,
        is_verified: req.is_verified,
        is_active: req.is_active,
    };

    match data.account.create.execute(input).await {
        Ok(actor) => {
            info!(actor_id = %actor.id, "Admin created");
            ApiResponse::created(AdminResponse::from(actor))
        }

        Err(CreateAdminError::UsernameAlreadyExists) => {
            ApiResponse::conflict("USERNAME_ALREADY_EXISTS", "Username already exists")
        }

        Err(e) => {
            error!("Failed to create admin: {}", e);
            ApiResponse::internal_error()
        }
    }
}
