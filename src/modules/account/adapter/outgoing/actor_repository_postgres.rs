use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::actors::{
    ActiveModel as ActorActiveModel, Column as ActorColumn, Entity as ActorEntity,
};
use super::sea_orm_entity::register_approvals::{
    ActiveModel as ApprovalActiveModel, RegisterStatus,
};
use crate::modules::account::application::domain::entities::{
    Actor, ActorChanges, NewActor, RegisterApproval,
};
use crate::modules::account::application::ports::outgoing::{
    ActorRepository, ActorRepositoryError, RegisteredActor,
};

#[derive(Clone, Debug)]
pub struct ActorRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ActorRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn new_actor_model(actor: NewActor) -> ActorActiveModel {
        let now = Utc::now().fixed_offset();
        ActorActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(actor.username),
            password_hash: Set(actor.credential.hash),
            salt: Set(actor.credential.salt),
            role_id: Set(actor.role_id),
            is_verified: Set(actor.is_verified),
            is_active: Set(actor.is_active),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }

    async fn find_existing(&self, id: Uuid) -> Result<Actor, ActorRepositoryError> {
        ActorEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(Actor::from)
            .ok_or(ActorRepositoryError::NotFound)
    }
}

#[async_trait]
impl ActorRepository for ActorRepositoryPostgres {
    async fn create_actor(&self, actor: NewActor) -> Result<Actor, ActorRepositoryError> {
        let inserted = Self::new_actor_model(actor)
            .insert(&*self.db)
            .await
            .map_err(map_write_err)?;

        Ok(inserted.into())
    }

    async fn update_actor(
        &self,
        id: Uuid,
        changes: ActorChanges,
    ) -> Result<Actor, ActorRepositoryError> {
        let actor = ActorEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ActorRepositoryError::NotFound)?;

        let mut active_actor: ActorActiveModel = actor.into();
        active_actor.username = Set(changes.username);
        if let Some(credential) = changes.credential {
            active_actor.password_hash = Set(credential.hash);
            active_actor.salt = Set(credential.salt);
        }
        active_actor.is_verified = Set(changes.is_verified);
        active_actor.is_active = Set(changes.is_active);

        // Zero rows matched means the actor went away after the read.
        let updated = active_actor
            .update(&*self.db)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => ActorRepositoryError::NotFound,
                other => map_write_err(other),
            })?;

        Ok(updated.into())
    }

    async fn delete_actor(&self, id: Uuid) -> Result<Actor, ActorRepositoryError> {
        let actor = ActorEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ActorRepositoryError::NotFound)?;

        let result = ActorEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ActorRepositoryError::NotFound);
        }

        Ok(actor.into())
    }

    async fn set_active(&self, id: Uuid, is_active: bool) -> Result<Actor, ActorRepositoryError> {
        let result = ActorEntity::update_many()
            .col_expr(ActorColumn::IsActive, Expr::value(is_active))
            .col_expr(ActorColumn::UpdatedAt, Expr::value(Utc::now().fixed_offset()))
            .filter(ActorColumn::Id.eq(id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ActorRepositoryError::NotFound);
        }

        self.find_existing(id).await
    }

    async fn register_actor(
        &self,
        actor: NewActor,
    ) -> Result<RegisteredActor, ActorRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let inserted_actor = match Self::new_actor_model(actor).insert(&txn).await {
            Ok(model) => model,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(map_write_err(e));
            }
        };

        let approval = ApprovalActiveModel {
            id: Set(Uuid::new_v4()),
            admin_id: Set(inserted_actor.id),
            super_admin_id: Set(None),
            status: Set(RegisterStatus::Pending),
            created_at: Set(inserted_actor.created_at),
            updated_at: Set(inserted_actor.created_at),
        };

        let inserted_approval = match approval.insert(&txn).await {
            Ok(model) => model,
            Err(e) => {
                tracing::warn!(
                    username = %inserted_actor.username,
                    error = %e,
                    "Register approval insert failed, rolling back actor"
                );
                let _ = txn.rollback().await;
                return Err(map_db_err(e));
            }
        };

        txn.commit().await.map_err(map_db_err)?;

        Ok(RegisteredActor {
            actor: inserted_actor.into(),
            approval: RegisterApproval::from(inserted_approval),
        })
    }
}

fn map_write_err(e: DbErr) -> ActorRepositoryError {
    let err_str = e.to_string().to_lowercase();
    if err_str.contains("23505")
        || err_str.contains("duplicate key")
        || err_str.contains("unique constraint")
    {
        return ActorRepositoryError::UsernameAlreadyExists;
    }
    ActorRepositoryError::DatabaseError(e.to_string())
}

fn map_db_err(e: DbErr) -> ActorRepositoryError {
    ActorRepositoryError::DatabaseError(e.to_string())
}
