use actix_web::{put, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::account::adapter::incoming::web::dto::AdminResponse;
use crate::modules::account::application::ports::incoming::use_cases::{
    UpdateAdminError, UpdateAdminInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UpdateAdminRequest {
    #[schema(example = "johndoe")]
    pub username: String,
    /// New password; omit or leave empty to keep the current one
    #[serde(default)]
    pub password: Option<String>,
    pub is_verified: bool,
    pub is_active: bool,
}

/// Overwrite an admin's username, flags and optionally password
#[utoipa::path(
    put,
    path = "/api/admins/{id}",
    tag = "admins",
    params(("id" = Uuid, Path, description = "Admin id")),
    request_body = UpdateAdminRequest,
    responses(
        (status = 200, description = "Admin updated", body = inline(SuccessResponse<AdminResponse>)),
        (status = 404, description = "Admin not found", body = ErrorResponse),
        (status = 409, description = "Username already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/admins/{id}")]
pub async fn update_admin_handler(
    path: web::Path<Uuid>,
    req: web::Json<UpdateAdminRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    let req = req.into_inner();
    let input = UpdateAdminInput {
        username: req.username,
        password: req.password,
        is_verified: req.is_verified,
        is_active: req.is_active,
    };

    match data.account.update.execute(id, input).await {
        Ok(actor) => {
            info!(admin_id = %id, "Admin updated");
            ApiResponse::success(AdminResponse::from(actor))
        }

        Err(UpdateAdminError::NotFound) => {
            ApiResponse::not_found("ADMIN_NOT_FOUND", "Admin not found")
        }

        Err(UpdateAdminError::UsernameAlreadyExists) => {
            ApiResponse::conflict("USERNAME_ALREADY_EXISTS", "Username already exists")
        }

        Err(e) => {
            error!(admin_id = %id, "Failed to update admin: {}", e);
            ApiResponse::internal_error()
        }
    }
}
