use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::account::adapter::incoming::web::dto::AdminResponse;
use crate::modules::account::application::domain::entities::ActorListFilter;
use crate::modules::account::application::ports::incoming::use_cases::GetAdminsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetAdminsQuery {
    /// Substring of the username; empty matches all
    #[serde(default)]
    pub username: String,

    /// 1-based page of five; 0 returns everything
    #[serde(default)]
    pub page: u32,
}

/// List admin accounts
#[utoipa::path(
    get,
    path = "/api/admins",
    tag = "admins",
    params(GetAdminsQuery),
    responses(
        (status = 200, description = "Matching admins", body = inline(SuccessResponse<Vec<AdminResponse>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/admins")]
pub async fn get_admins_handler(
    query: web::Query<GetAdminsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();
    let filter = ActorListFilter::new(query.username, query.page);

    match data.account.get_list.execute(filter).await {
        Ok(actors) => ApiResponse::success(
            actors
                .into_iter()
                .map(AdminResponse::from)
                .collect::<Vec<_>>(),
        ),

        Err(GetAdminsError::QueryFailed(msg)) => {
            error!("Failed to list admins: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
