use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::account::adapter::incoming::web::dto::AdminResponse;
use crate::modules::account::application::ports::incoming::use_cases::{
    RegisterError, RegisterInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct RegisterAdminRequest {
    #[schema(example = "johndoe")]
    pub username: String,
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

/// Self-register an account
///
/// Creates an unverified, inactive account and a pending registration
/// request for a super admin to decide.
#[utoipa::path(
    post,
    path = "/api/admins/register",
    tag = "admins",
    request_body = RegisterAdminRequest,
    responses(
        (status = 201, description = "Registration pending approval", body = inline(SuccessResponse<AdminResponse>)),
        (status = 409, description = "Username already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/admins/register")]
pub async fn register_admin_handler(
    req: web::Json<RegisterAdminRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let input = RegisterInput {
        username: req.username,
        password: req.password,
    };

    match data.account.register.execute(input).await {
        Ok(actor) => {
            info!(admin_id = %actor.id, "Registration pending approval");
            ApiResponse::created(AdminResponse::from(actor))
        }

        Err(RegisterError::UsernameAlreadyExists) => {
            ApiResponse::conflict("USERNAME_ALREADY_EXISTS", "Username already exists")
        }

        Err(e) => {
            error!("Registration failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::modules::account::adapter::incoming::web::routes::login_admin_handler;
    use crate::modules::account::application::domain::entities::ApprovalStatus;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::in_memory_store::InMemoryAccountStore;

    fn register_request(username: &str) -> RegisterAdminRequest {
        RegisterAdminRequest {
            username: username.to_string(),
            password: "pw".to_string(),
        }
    }

    #[actix_web::test]
    async fn test_register_creates_pending_account() {
        let store = InMemoryAccountStore::new();
        let app_state = TestAppStateBuilder::default()
            .with_in_memory_services(&store)
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(register_admin_handler))
                .await;

        let req = test::TestRequest::post()
            .uri("/api/admins/register")
            .set_json(&register_request("ann"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["role_id"], 2);
        assert_eq!(body["data"]["is_verified"], false);
        assert_eq!(body["data"]["is_active"], false);

        let approvals = store.approvals();
        assert_eq!(approvals.len(), 1);
        assert_eq!(approvals[0].status, ApprovalStatus::Pending);
    }

    #[actix_web::test]
    async fn test_register_duplicate_username() {
        let store = InMemoryAccountStore::new();
        let app_state = TestAppStateBuilder::default()
            .with_in_memory_services(&store)
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(register_admin_handler))
                .await;

        for expected in [StatusCode::CREATED, StatusCode::CONFLICT] {
            let req = test::TestRequest::post()
                .uri("/api/admins/register")
                .set_json(&register_request("ann"))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), expected);
        }

        assert_eq!(store.actors().len(), 1);
        assert_eq!(store.approvals().len(), 1);
    }

    #[actix_web::test]
    async fn test_registered_password_logs_in() {
        let store = InMemoryAccountStore::new();
        let app_state = TestAppStateBuilder::default()
            .with_in_memory_services(&store)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(register_admin_handler)
                .service(login_admin_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admins/register")
            .set_json(&register_request("ann"))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::post()
            .uri("/api/admins/login")
            .set_json(serde_json::json!({ "username": "ann", "password": "pw" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::post()
            .uri("/api/admins/login")
            .set_json(serde_json::json!({ "username": "ann", "password": "pw2" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
