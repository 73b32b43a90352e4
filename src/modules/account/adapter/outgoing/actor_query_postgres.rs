use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::actors::{Column as ActorColumn, Entity as ActorEntity};
use crate::modules::account::application::domain::entities::{Actor, ActorListFilter};
use crate::modules::account::application::ports::outgoing::{ActorQuery, ActorQueryError};

#[derive(Clone, Debug)]
pub struct ActorQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ActorQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ActorQuery for ActorQueryPostgres {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Actor>, ActorQueryError> {
        let actor = ActorEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| ActorQueryError::DatabaseError(e.to_string()))?;

        Ok(actor.map(Actor::from))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Actor>, ActorQueryError> {
        let actor = ActorEntity::find()
            .filter(ActorColumn::Username.eq(username))
            .one(&*self.db)
            .await
            .map_err(|e| ActorQueryError::DatabaseError(e.to_string()))?;

        Ok(actor.map(Actor::from))
    }

    async fn list(&self, filter: ActorListFilter) -> Result<Vec<Actor>, ActorQueryError> {
        let mut select = ActorEntity::find()
            .filter(ActorColumn::Username.contains(filter.username.as_str()))
            .order_by_asc(ActorColumn::CreatedAt)
            .order_by_asc(ActorColumn::Id);

        if let Some((offset, limit)) = filter.window() {
            select = select.offset(offset).limit(limit);
        }

        let actors = select
            .all(&*self.db)
            .await
            .map_err(|e| ActorQueryError::DatabaseError(e.to_string()))?;

        Ok(actors.into_iter().map(Actor::from).collect())
    }
}
