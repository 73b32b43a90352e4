use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::modules::account::application::domain::entities::{ApprovalStatus, RegisterApproval};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "register_approvals")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub admin_id: Uuid,
    pub super_admin_id: Option<Uuid>,
    pub status: RegisterStatus,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum RegisterStatus {
    #[sea_orm(string_value = "pending")]
    Pending,

    #[sea_orm(string_value = "approved")]
    Approved,

    #[sea_orm(string_value = "rejected")]
    Rejected,
}

impl From<RegisterStatus> for ApprovalStatus {
    fn from(status: RegisterStatus) -> Self {
        match status {
            RegisterStatus::Pending => ApprovalStatus::Pending,
            RegisterStatus::Approved => ApprovalStatus::Approved,
            RegisterStatus::Rejected => ApprovalStatus::Rejected,
        }
    }
}

impl From<ApprovalStatus> for RegisterStatus {
    fn from(status: ApprovalStatus) -> Self {
        match status {
            ApprovalStatus::Pending => RegisterStatus::Pending,
            ApprovalStatus::Approved => RegisterStatus::Approved,
            ApprovalStatus::Rejected => RegisterStatus::Rejected,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::actors::Entity",
        from = "Column::AdminId",
        to = "super::actors::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Actors,
}

impl Related<super::actors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Actors.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        use chrono::Utc;
        use sea_orm::ActiveValue::Set;

        if !insert {
            self.updated_at = Set(Utc::now().into());
        }

        Ok(self)
    }
}

impl From<Model> for RegisterApproval {
    fn from(model: Model) -> Self {
        RegisterApproval {
            id: model.id,
            admin_id: model.admin_id,
            super_admin_id: model.super_admin_id,
            status: model.status.into(),
            created_at: model.created_at.with_timezone(&chrono::Utc),
            updated_at: model.updated_at.with_timezone(&chrono::Utc),
        }
    }
}
