use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::account::adapter::incoming::web::dto::AdminResponse;
use crate::modules::account::application::ports::incoming::use_cases::GetAdminByIdError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get a single admin
#[utoipa::path(
    get,
    path = "/api/admins/{id}",
    tag = "admins",
    params(("id" = Uuid, Path, description = "Admin id")),
    responses(
        (status = 200, description = "Admin found", body = inline(SuccessResponse<AdminResponse>)),
        (status = 404, description = "Admin not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/admins/{id}")]
pub async fn get_admin_handler(path: web::Path<Uuid>, data: web::Data<AppState>) -> impl Responder {
    let id = path.into_inner();

    match data.account.get_single.execute(id).await {
        Ok(actor) => ApiResponse::success(AdminResponse::from(actor)),

        Err(GetAdminByIdError::NotFound) => {
            ApiResponse::not_found("ADMIN_NOT_FOUND", "Admin not found")
        }

        Err(GetAdminByIdError::QueryFailed(msg)) => {
            error!(admin_id = %id, "Failed to fetch admin: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
