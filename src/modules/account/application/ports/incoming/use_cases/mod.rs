mod create_admin;
mod delete_admin;
mod get_admin_by_id;
mod get_admins;
mod get_register_approvals;
mod login_admin;
mod register_admin;
mod set_admin_activation;
mod update_admin;
mod update_register_approval;

pub use create_admin::{CreateAdminError, CreateAdminInput, CreateAdminUseCase};
pub use delete_admin::{DeleteAdminError, DeleteAdminUseCase};
pub use get_admin_by_id::{GetAdminByIdError, GetAdminByIdUseCase};
pub use get_admins::{GetAdminsError, GetAdminsUseCase};
pub use get_register_approvals::{GetRegisterApprovalsError, GetRegisterApprovalsUseCase};
pub use login_admin::{LoginAdminUseCase, LoginError, LoginInput};
pub use register_admin::{RegisterAdminUseCase, RegisterError, RegisterInput};
pub use set_admin_activation::{SetAdminActivationError, SetAdminActivationUseCase};
pub use update_admin::{UpdateAdminError, UpdateAdminInput, UpdateAdminUseCase};
pub use update_register_approval::{UpdateRegisterApprovalError, UpdateRegisterApprovalUseCase};
