use actix_web::{put, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::account::adapter::incoming::web::dto::RegisterApprovalResponse;
use crate::modules::account::adapter::incoming::web::extractors::reviewer::Reviewer;
use crate::modules::account::application::domain::entities::ApprovalStatus;
use crate::modules::account::application::ports::incoming::use_cases::UpdateRegisterApprovalError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UpdateRegisterApprovalRequest {
    /// `approved`, `rejected` or `pending`
    #[schema(value_type = String, example = "approved")]
    pub status: ApprovalStatus,
}

/// Decide a registration request
///
/// Approving verifies and activates the account, rejecting clears both flags.
#[utoipa::path(
    put,
    path = "/api/register-approvals/{id}",
    tag = "register-approvals",
    params(
        ("id" = Uuid, Path, description = "Register approval id"),
        ("X-Reviewer-Id" = Uuid, Header, description = "Deciding super admin"),
    ),
    request_body = UpdateRegisterApprovalRequest,
    responses(
        (status = 200, description = "Decision recorded", body = inline(SuccessResponse<RegisterApprovalResponse>)),
        (status = 401, description = "Missing reviewer", body = ErrorResponse),
        (status = 404, description = "Approval or actor not found", body = ErrorResponse),
        (status = 409, description = "Approval already resolved", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/register-approvals/{id}")]
pub async fn update_register_approval_handler(
    reviewer: Reviewer,
    path: web::Path<Uuid>,
    req: web::Json<UpdateRegisterApprovalRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    let status = req.into_inner().status;

    match data
        .account
        .update_approval
        .execute(id, status, reviewer.reviewer_id)
        .await
    {
        Ok(approval) => {
            info!(
                approval_id = %id,
                reviewer_id = %reviewer.reviewer_id,
                status = %approval.status,
                "Registration decided"
            );
            ApiResponse::success(RegisterApprovalResponse::from(approval))
        }

        Err(UpdateRegisterApprovalError::NotFound) => {
            ApiResponse::not_found("APPROVAL_NOT_FOUND", "Register approval not found")
        }

        Err(UpdateRegisterApprovalError::ActorNotFound) => {
            ApiResponse::not_found("ADMIN_NOT_FOUND", "Registered admin not found")
        }

        Err(UpdateRegisterApprovalError::AlreadyResolved(current)) => ApiResponse::conflict(
            "APPROVAL_ALREADY_RESOLVED",
            &format!("Register approval already {current}"),
        ),

        Err(UpdateRegisterApprovalError::RepositoryError(msg)) => {
            error!(approval_id = %id, "Failed to decide registration: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
