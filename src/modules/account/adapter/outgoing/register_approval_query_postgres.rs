use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use std::sync::Arc;

use super::sea_orm_entity::register_approvals::{
    Column as ApprovalColumn, Entity as ApprovalEntity,
};
use crate::modules::account::application::domain::entities::RegisterApproval;
use crate::modules::account::application::ports::outgoing::{
    RegisterApprovalQuery, RegisterApprovalQueryError,
};

#[derive(Clone, Debug)]
pub struct RegisterApprovalQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl RegisterApprovalQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RegisterApprovalQuery for RegisterApprovalQueryPostgres {
    async fn list_all(&self) -> Result<Vec<RegisterApproval>, RegisterApprovalQueryError> {
        let approvals = ApprovalEntity::find()
            .order_by_asc(ApprovalColumn::CreatedAt)
            .order_by_asc(ApprovalColumn::Id)
            .all(&*self.db)
            .await
            .map_err(|e| RegisterApprovalQueryError::DatabaseError(e.to_string()))?;

        Ok(approvals.into_iter().map(RegisterApproval::from).collect())
    }
}
