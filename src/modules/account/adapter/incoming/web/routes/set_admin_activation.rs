use actix_web::{put, web, HttpResponse, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::account::adapter::incoming::web::dto::AdminResponse;
use crate::modules::account::application::domain::entities::Actor;
use crate::modules::account::application::ports::incoming::use_cases::SetAdminActivationError;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn activation_response(
    id: Uuid,
    result: Result<Actor, SetAdminActivationError>,
) -> HttpResponse {
    match result {
        Ok(actor) => {
            info!(admin_id = %id, is_active = actor.is_active, "Admin activation changed");
            ApiResponse::success(AdminResponse::from(actor))
        }

        Err(SetAdminActivationError::NotFound) => {
            ApiResponse::not_found("ADMIN_NOT_FOUND", "Admin not found")
        }

        Err(SetAdminActivationError::RepositoryError(msg)) => {
            error!(admin_id = %id, "Failed to change admin activation: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

/// Activate an admin
#[utoipa::path(
    put,
    path = "/api/admins/{id}/activate",
    tag = "admins",
    params(("id" = Uuid, Path, description = "Admin id")),
    responses(
        (status = 200, description = "Admin activated", body = inline(SuccessResponse<AdminResponse>)),
        (status = 404, description = "Admin not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/admins/{id}/activate")]
pub async fn activate_admin_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    activation_response(id, data.account.activation.activate(id).await)
}

/// Deactivate an admin
#[utoipa::path(
    put,
    path = "/api/admins/{id}/deactivate",
    tag = "admins",
    params(("id" = Uuid, Path, description = "Admin id")),
    responses(
        (status = 200, description = "Admin deactivated", body = inline(SuccessResponse<AdminResponse>)),
        (status = 404, description = "Admin not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/admins/{id}/deactivate")]
pub async fn deactivate_admin_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    activation_response(id, data.account.activation.deactivate(id).await)
}
