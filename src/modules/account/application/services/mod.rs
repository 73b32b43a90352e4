pub mod create_admin_service;
pub mod delete_admin_service;
pub mod get_admin_by_id_service;
pub mod get_admins_service;
pub mod get_register_approvals_service;
pub mod login_admin_service;
pub mod register_admin_service;
pub mod set_admin_activation_service;
pub mod update_admin_service;
pub mod update_register_approval_service;

pub use create_admin_service::CreateAdminService;
pub use delete_admin_service::DeleteAdminService;
pub use get_admin_by_id_service::GetAdminByIdService;
pub use get_admins_service::GetAdminsService;
pub use get_register_approvals_service::GetRegisterApprovalsService;
pub use login_admin_service::LoginAdminService;
pub use register_admin_service::RegisterAdminService;
pub use set_admin_activation_service::SetAdminActivationService;
pub use update_admin_service::UpdateAdminService;
pub use update_register_approval_service::UpdateRegisterApprovalService;
