use async_trait::async_trait;
use uuid::Uuid;

use crate::account::application::domain::entities::{
    Actor, ActorListFilter, ApprovalStatus, RegisterApproval,
};
use crate::account::application::ports::incoming::use_cases::{
    CreateAdminError, CreateAdminInput, CreateAdminUseCase, DeleteAdminError, DeleteAdminUseCase,
    GetAdminByIdError, GetAdminByIdUseCase, GetAdminsError, GetAdminsUseCase,
    GetRegisterApprovalsError, GetRegisterApprovalsUseCase, LoginAdminUseCase, LoginError,
    LoginInput, RegisterAdminUseCase, RegisterError, RegisterInput, SetAdminActivationError,
    SetAdminActivationUseCase, UpdateAdminError, UpdateAdminInput, UpdateAdminUseCase,
    UpdateRegisterApprovalError, UpdateRegisterApprovalUseCase,
};

const NOT_USED: &str = "not used in this test";

pub struct StubCreateAdminUseCase;

#[async_trait]
impl CreateAdminUseCase for StubCreateAdminUseCase {
    async fn execute(&self, _input: CreateAdminInput) -> Result<Actor, CreateAdminError> {
        Err(CreateAdminError::RepositoryError(NOT_USED.to_string()))
    }
}

pub struct StubGetAdminsUseCase;

#[async_trait]
impl GetAdminsUseCase for StubGetAdminsUseCase {
    async fn execute(&self, _filter: ActorListFilter) -> Result<Vec<Actor>, GetAdminsError> {
        Ok(vec![])
    }
}

pub struct StubGetAdminByIdUseCase;

#[async_trait]
impl GetAdminByIdUseCase for StubGetAdminByIdUseCase {
    async fn execute(&self, _id: Uuid) -> Result<Actor, GetAdminByIdError> {
        Err(GetAdminByIdError::NotFound)
    }
}

pub struct StubUpdateAdminUseCase;

#[async_trait]
impl UpdateAdminUseCase for StubUpdateAdminUseCase {
    async fn execute(&self, _id: Uuid, _input: UpdateAdminInput) -> Result<Actor, UpdateAdminError> {
        Err(UpdateAdminError::NotFound)
    }
}

pub struct StubDeleteAdminUseCase;

#[async_trait]
impl DeleteAdminUseCase for StubDeleteAdminUseCase {
    async fn execute(&self, _id: Uuid) -> Result<Actor, DeleteAdminError> {
        Err(DeleteAdminError::NotFound)
    }
}

pub struct StubSetAdminActivationUseCase;

#[async_trait]
impl SetAdminActivationUseCase for StubSetAdminActivationUseCase {
    async fn activate(&self, _id: Uuid) -> Result<Actor, SetAdminActivationError> {
        Err(SetAdminActivationError::NotFound)
    }

    async fn deactivate(&self, _id: Uuid) -> Result<Actor, SetAdminActivationError> {
        Err(SetAdminActivationError::NotFound)
    }
}

pub struct StubLoginAdminUseCase;

#[async_trait]
impl LoginAdminUseCase for StubLoginAdminUseCase {
    async fn execute(&self, _input: LoginInput) -> Result<Actor, LoginError> {
        Err(LoginError::InvalidCredentials)
    }
}

pub struct StubRegisterAdminUseCase;

#[async_trait]
impl RegisterAdminUseCase for StubRegisterAdminUseCase {
    async fn execute(&self, _input: RegisterInput) -> Result<Actor, RegisterError> {
        Err(RegisterError::RepositoryError(NOT_USED.to_string()))
    }
}

pub struct StubGetRegisterApprovalsUseCase;

#[async_trait]
impl GetRegisterApprovalsUseCase for StubGetRegisterApprovalsUseCase {
    async fn execute(&self) -> Result<Vec<RegisterApproval>, GetRegisterApprovalsError> {
        Ok(vec![])
    }
}

pub struct StubUpdateRegisterApprovalUseCase;

#[async_trait]
impl UpdateRegisterApprovalUseCase for StubUpdateRegisterApprovalUseCase {
    async fn execute(
        &self,
        _id: Uuid,
        _status: ApprovalStatus,
        _reviewer_id: Uuid,
    ) -> Result<RegisterApproval, UpdateRegisterApprovalError> {
        Err(UpdateRegisterApprovalError::NotFound)
    }
}
