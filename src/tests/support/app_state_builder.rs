use actix_web::web;
use std::sync::Arc;

use crate::account::application::ports::incoming::use_cases::{
    CreateAdminUseCase, DeleteAdminUseCase, GetAdminByIdUseCase, GetAdminsUseCase,
    GetRegisterApprovalsUseCase, LoginAdminUseCase, RegisterAdminUseCase,
    SetAdminActivationUseCase, UpdateAdminUseCase, UpdateRegisterApprovalUseCase,
};
use crate::account::application::AccountUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

pub struct TestAppStateBuilder {
    account: AccountUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            account: AccountUseCases {
                create: Arc::new(StubCreateAdminUseCase),
                get_list: Arc::new(StubGetAdminsUseCase),
                get_single: Arc::new(StubGetAdminByIdUseCase),
                update: Arc::new(StubUpdateAdminUseCase),
                delete: Arc::new(StubDeleteAdminUseCase),
                activation: Arc::new(StubSetAdminActivationUseCase),
                login: Arc::new(StubLoginAdminUseCase),
                register: Arc::new(StubRegisterAdminUseCase),
                get_approvals: Arc::new(StubGetRegisterApprovalsUseCase),
                update_approval: Arc::new(StubUpdateRegisterApprovalUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_create_admin(mut self, uc: impl CreateAdminUseCase + 'static) -> Self {
        self.account.create = Arc::new(uc);
        self
    }

    pub fn with_get_admins(mut self, uc: impl GetAdminsUseCase + 'static) -> Self {
        self.account.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_admin_by_id(mut self, uc: impl GetAdminByIdUseCase + 'static) -> Self {
        self.account.get_single = Arc::new(uc);
        self
    }

    pub fn with_update_admin(mut self, uc: impl UpdateAdminUseCase + 'static) -> Self {
        self.account.update = Arc::new(uc);
        self
    }

    pub fn with_delete_admin(mut self, uc: impl DeleteAdminUseCase + 'static) -> Self {
        self.account.delete = Arc::new(uc);
        self
    }

    pub fn with_admin_activation(mut self, uc: impl SetAdminActivationUseCase + 'static) -> Self {
        self.account.activation = Arc::new(uc);
        self
    }

    pub fn with_login_admin(mut self, uc: impl LoginAdminUseCase + 'static) -> Self {
        self.account.login = Arc::new(uc);
        self
    }

    pub fn with_register_admin(mut self, uc: impl RegisterAdminUseCase + 'static) -> Self {
        self.account.register = Arc::new(uc);
        self
    }

    pub fn with_get_register_approvals(
        mut self,
        uc: impl GetRegisterApprovalsUseCase + 'static,
    ) -> Self {
        self.account.get_approvals = Arc::new(uc);
        self
    }

    pub fn with_update_register_approval(
        mut self,
        uc: impl UpdateRegisterApprovalUseCase + 'static,
    ) -> Self {
        self.account.update_approval = Arc::new(uc);
        self
    }

    /// Wires every use case to the shared in-memory store with the fake hasher.
    pub fn with_in_memory_services(
        self,
        store: &crate::tests::support::in_memory_store::InMemoryAccountStore,
    ) -> Self {
        use crate::account::application::services::*;
        use crate::tests::support::fake_hasher::FakePasswordHasher;

        let hasher: Arc<dyn crate::account::application::ports::outgoing::PasswordHasher> =
            Arc::new(FakePasswordHasher);

        Self {
            account: AccountUseCases {
                create: Arc::new(CreateAdminService::new(store.clone(), hasher.clone())),
                get_list: Arc::new(GetAdminsService::new(store.clone())),
                get_single: Arc::new(GetAdminByIdService::new(store.clone())),
                update: Arc::new(UpdateAdminService::new(store.clone(), hasher.clone())),
                delete: Arc::new(DeleteAdminService::new(store.clone())),
                activation: Arc::new(SetAdminActivationService::new(store.clone())),
                login: Arc::new(LoginAdminService::new(store.clone(), hasher.clone())),
                register: Arc::new(RegisterAdminService::new(
                    store.clone(),
                    store.clone(),
                    hasher,
                )),
                get_approvals: Arc::new(GetRegisterApprovalsService::new(store.clone())),
                update_approval: Arc::new(UpdateRegisterApprovalService::new(store.clone())),
            },
        }
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            account: self.account,
        })
    }
}
