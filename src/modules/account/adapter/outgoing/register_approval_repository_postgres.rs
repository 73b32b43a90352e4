use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QuerySelect, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::actors::{Column as ActorColumn, Entity as ActorEntity};
use super::sea_orm_entity::register_approvals::{
    ActiveModel as ApprovalActiveModel, Entity as ApprovalEntity,
};
use crate::modules::account::application::domain::entities::RegisterApproval;
use crate::modules::account::application::domain::policies::ensure_decidable;
use crate::modules::account::application::ports::outgoing::{
    ApprovalDecision, RegisterApprovalRepository, RegisterApprovalRepositoryError,
};

#[derive(Clone, Debug)]
pub struct RegisterApprovalRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl RegisterApprovalRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> RegisterApprovalRepositoryError {
        RegisterApprovalRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl RegisterApprovalRepository for RegisterApprovalRepositoryPostgres {
    async fn resolve(
        &self,
        id: Uuid,
        decision: ApprovalDecision,
    ) -> Result<RegisterApproval, RegisterApprovalRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        // Held until commit, so concurrent decisions on one request serialize.
        let current = match ApprovalEntity::find_by_id(id).lock_exclusive().one(&txn).await {
            Ok(Some(model)) => model,
            Ok(None) => {
                let _ = txn.rollback().await;
                return Err(RegisterApprovalRepositoryError::NotFound);
            }
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(Self::map_db_err(e));
            }
        };

        if let Err(e) = ensure_decidable(current.status.into()) {
            let _ = txn.rollback().await;
            tracing::info!(approval_id = %id, error = %e, "Rejected decision on resolved approval");
            return Err(RegisterApprovalRepositoryError::AlreadyResolved(
                current.status.into(),
            ));
        }

        let admin_id = current.admin_id;
        let mut active_approval: ApprovalActiveModel = current.into();
        active_approval.status = Set(decision.status.into());
        active_approval.super_admin_id = Set(Some(decision.reviewer_id));

        let updated = match active_approval.update(&txn).await {
            Ok(model) => model,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(Self::map_db_err(e));
            }
        };

        if let Some(flags) = decision.status.actor_flags() {
            let cascade = ActorEntity::update_many()
                .col_expr(ActorColumn::IsVerified, Expr::value(flags.is_verified))
                .col_expr(ActorColumn::IsActive, Expr::value(flags.is_active))
                .col_expr(ActorColumn::UpdatedAt, Expr::value(Utc::now().fixed_offset()))
                .filter(ActorColumn::Id.eq(admin_id))
                .exec(&txn)
                .await;

            match cascade {
                Ok(res) if res.rows_affected == 0 => {
                    tracing::warn!(
                        approval_id = %id,
                        actor_id = %admin_id,
                        "Registered actor missing, rolling back decision"
                    );
                    let _ = txn.rollback().await;
                    return Err(RegisterApprovalRepositoryError::ActorNotFound);
                }
                Ok(_) => {}
                Err(e) => {
                    let _ = txn.rollback().await;
                    return Err(Self::map_db_err(e));
                }
            }
        }

        txn.commit().await.map_err(Self::map_db_err)?;

        Ok(updated.into())
    }
}
