use std::sync::Arc;

use crate::modules::account::application::ports::incoming::use_cases::{
    CreateAdminUseCase, DeleteAdminUseCase, GetAdminByIdUseCase, GetAdminsUseCase,
    GetRegisterApprovalsUseCase, LoginAdminUseCase, RegisterAdminUseCase,
    SetAdminActivationUseCase, UpdateAdminUseCase, UpdateRegisterApprovalUseCase,
};

/// Every account operation the web layer can reach.
#[derive(Clone)]
pub struct AccountUseCases {
    pub create: Arc<dyn CreateAdminUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetAdminsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetAdminByIdUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateAdminUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteAdminUseCase + Send + Sync>,
    pub activation: Arc<dyn SetAdminActivationUseCase + Send + Sync>,
    pub login: Arc<dyn LoginAdminUseCase + Send + Sync>,
    pub register: Arc<dyn RegisterAdminUseCase + Send + Sync>,
    pub get_approvals: Arc<dyn GetRegisterApprovalsUseCase + Send + Sync>,
    pub update_approval: Arc<dyn UpdateRegisterApprovalUseCase + Send + Sync>,
}
