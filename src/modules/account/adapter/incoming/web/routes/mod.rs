pub mod create_admin;
pub mod delete_admin;
pub mod get_admin;
pub mod get_admins;
pub mod get_register_approvals;
pub mod login_admin;
pub mod register_admin;
pub mod set_admin_activation;
pub mod update_admin;
pub mod update_register_approval;

use actix_web::web;

pub use create_admin::{create_admin_handler, CreateAdminRequest};
pub use delete_admin::delete_admin_handler;
pub use get_admin::get_admin_handler;
pub use get_admins::{get_admins_handler, GetAdminsQuery};
pub use get_register_approvals::get_register_approvals_handler;
pub use login_admin::{login_admin_handler, LoginRequestDto};
pub use register_admin::{register_admin_handler, RegisterAdminRequest};
pub use set_admin_activation::{activate_admin_handler, deactivate_admin_handler};
pub use update_admin::{update_admin_handler, UpdateAdminRequest};
pub use update_register_approval::{
    update_register_approval_handler, UpdateRegisterApprovalRequest,
};

// Literal paths (login, register) go before `{id}` so they are matched first.
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(login_admin_handler)
        .service(register_admin_handler)
        .service(create_admin_handler)
        .service(get_admins_handler)
        .service(get_admin_handler)
        .service(update_admin_handler)
        .service(delete_admin_handler)
        .service(activate_admin_handler)
        .service(deactivate_admin_handler)
        .service(get_register_approvals_handler)
        .service(update_register_approval_handler);
}
