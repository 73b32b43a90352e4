use actix_web::{delete, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::account::adapter::incoming::web::dto::AdminResponse;
use crate::modules::account::application::ports::incoming::use_cases::DeleteAdminError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete an admin and its registration record
#[utoipa::path(
    delete,
    path = "/api/admins/{id}",
    tag = "admins",
    params(("id" = Uuid, Path, description = "Admin id")),
    responses(
        (status = 200, description = "Deleted admin", body = inline(SuccessResponse<AdminResponse>)),
        (status = 404, description = "Admin not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/admins/{id}")]
pub async fn delete_admin_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.account.delete.execute(id).await {
        Ok(actor) => {
            info!(admin_id = %id, "Admin deleted");
            ApiResponse::success(AdminResponse::from(actor))
        }

        Err(DeleteAdminError::NotFound) => {
            ApiResponse::not_found("ADMIN_NOT_FOUND", "Admin not found")
        }

        Err(DeleteAdminError::RepositoryError(msg)) => {
            error!(admin_id = %id, "Failed to delete admin: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
