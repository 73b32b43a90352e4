use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::account::adapter::incoming::web::dto::RegisterApprovalResponse;
use crate::modules::account::application::ports::incoming::use_cases::GetRegisterApprovalsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List registration requests
#[utoipa::path(
    get,
    path = "/api/register-approvals",
    tag = "register-approvals",
    responses(
        (status = 200, description = "All registration requests", body = inline(SuccessResponse<Vec<RegisterApprovalResponse>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/register-approvals")]
pub async fn get_register_approvals_handler(data: web::Data<AppState>) -> impl Responder {
    match data.account.get_approvals.execute().await {
        Ok(approvals) => ApiResponse::success(
            approvals
                .into_iter()
                .map(RegisterApprovalResponse::from)
                .collect::<Vec<_>>(),
        ),

        Err(GetRegisterApprovalsError::QueryFailed(msg)) => {
            error!("Failed to list register approvals: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
