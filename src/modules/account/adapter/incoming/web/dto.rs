use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::account::application::domain::entities::{
    Actor, ApprovalStatus, RegisterApproval,
};

/// Public view of an actor. Credentials never leave the service.
#[derive(Debug, Serialize, ToSchema)]
pub struct AdminResponse {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: Uuid,
    #[schema(example = "johndoe")]
    pub username: String,
    #[schema(example = 1)]
    pub role_id: i32,
    pub is_verified: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Actor> for AdminResponse {
    fn from(actor: Actor) -> Self {
        Self {
            id: actor.id,
            username: actor.username,
            role_id: actor.role_id,
            is_verified: actor.is_verified,
            is_active: actor.is_active,
            created_at: actor.created_at,
            updated_at: actor.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterApprovalResponse {
    pub id: Uuid,
    /// Actor waiting for the decision
    pub admin_id: Uuid,
    /// Super admin who decided, if any
    pub super_admin_id: Option<Uuid>,
    #[schema(value_type = String, example = "pending")]
    pub status: ApprovalStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<RegisterApproval> for RegisterApprovalResponse {
    fn from(approval: RegisterApproval) -> Self {
        Self {
            id: approval.id,
            admin_id: approval.admin_id,
            super_admin_id: approval.super_admin_id,
            status: approval.status,
            created_at: approval.created_at,
            updated_at: approval.updated_at,
        }
    }
}
