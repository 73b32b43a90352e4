use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::OpenApi;

use crate::account::adapter::incoming::web::dto::{AdminResponse, RegisterApprovalResponse};
use crate::account::adapter::incoming::web::routes::{
    CreateAdminRequest, LoginRequestDto, RegisterAdminRequest, UpdateAdminRequest,
    UpdateRegisterApprovalRequest,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Admin Accounts API",
        version = "1.0.0",
        description = "Admin account management with self-registration approval"
    ),
    paths(
        // Admin endpoints
        crate::account::adapter::incoming::web::routes::create_admin::create_admin_handler,
        crate::account::adapter::incoming::web::routes::get_admins::get_admins_handler,
        crate::account::adapter::incoming::web::routes::get_admin::get_admin_handler,
        crate::account::adapter::incoming::web::routes::update_admin::update_admin_handler,
        crate::account::adapter::incoming::web::routes::delete_admin::delete_admin_handler,
        crate::account::adapter::incoming::web::routes::set_admin_activation::activate_admin_handler,
        crate::account::adapter::incoming::web::routes::set_admin_activation::deactivate_admin_handler,
        crate::account::adapter::incoming::web::routes::login_admin::login_admin_handler,
        crate::account::adapter::incoming::web::routes::register_admin::register_admin_handler,

        // Registration approval endpoints
        crate::account::adapter::incoming::web::routes::get_register_approvals::get_register_approvals_handler,
        crate::account::adapter::incoming::web::routes::update_register_approval::update_register_approval_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<AdminResponse>,
            ErrorResponse,
            ErrorDetail,

            // Account DTOs
            AdminResponse,
            RegisterApprovalResponse,
            CreateAdminRequest,
            UpdateAdminRequest,
            LoginRequestDto,
            RegisterAdminRequest,
            UpdateRegisterApprovalRequest
        )
    ),
    tags(
        (name = "admins", description = "Admin account endpoints"),
        (name = "register-approvals", description = "Self-registration review endpoints"),
    )
)]
pub struct ApiDoc;
