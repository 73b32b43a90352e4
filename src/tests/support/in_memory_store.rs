use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::account::application::domain::entities::{
    Actor, ActorChanges, ActorListFilter, ApprovalStatus, NewActor, RegisterApproval,
};
use crate::account::application::domain::policies::ensure_decidable;
use crate::account::application::ports::outgoing::{
    ActorQuery, ActorQueryError, ActorRepository, ActorRepositoryError, ApprovalDecision,
    RegisteredActor, RegisterApprovalQuery, RegisterApprovalQueryError,
    RegisterApprovalRepository, RegisterApprovalRepositoryError,
};

#[derive(Debug, Clone, Default)]
struct StoreState {
    actors: Vec<Actor>,
    approvals: Vec<RegisterApproval>,
}

/// In-memory stand-in for both tables. Multi-step writes run against a copy
/// of the state that only replaces the original on success, so a failure
/// leaves nothing behind, like a rolled back transaction.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAccountStore {
    state: Arc<Mutex<StoreState>>,
    fail_approval_insert: bool,
    fail_actor_cascade: bool,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registration fails after the actor insert.
    pub fn failing_approval_insert(mut self) -> Self {
        self.fail_approval_insert = true;
        self
    }

    /// Approval decisions fail after the status write.
    pub fn failing_actor_cascade(mut self) -> Self {
        self.fail_actor_cascade = true;
        self
    }

    pub fn actors(&self) -> Vec<Actor> {
        self.state.lock().unwrap().actors.clone()
    }

    pub fn approvals(&self) -> Vec<RegisterApproval> {
        self.state.lock().unwrap().approvals.clone()
    }

    pub fn insert_actor(&self, actor: Actor) {
        self.state.lock().unwrap().actors.push(actor);
    }

    pub fn insert_approval(&self, approval: RegisterApproval) {
        self.state.lock().unwrap().approvals.push(approval);
    }

    fn build_actor(actor: NewActor) -> Actor {
        let now = Utc::now();
        Actor {
            id: Uuid::new_v4(),
            username: actor.username,
            password_hash: actor.credential.hash,
            salt: actor.credential.salt,
            role_id: actor.role_id,
            is_verified: actor.is_verified,
            is_active: actor.is_active,
            created_at: now,
            updated_at: now,
        }
    }

    fn username_taken(state: &StoreState, username: &str, except: Option<Uuid>) -> bool {
        state
            .actors
            .iter()
            .any(|a| a.username == username && Some(a.id) != except)
    }
}

#[async_trait]
impl ActorQuery for InMemoryAccountStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Actor>, ActorQueryError> {
        let state = self.state.lock().unwrap();
        Ok(state.actors.iter().find(|a| a.id == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Actor>, ActorQueryError> {
        let state = self.state.lock().unwrap();
        Ok(state.actors.iter().find(|a| a.username == username).cloned())
    }

    async fn list(&self, filter: ActorListFilter) -> Result<Vec<Actor>, ActorQueryError> {
        let state = self.state.lock().unwrap();
        let matches = state
            .actors
            .iter()
            .filter(|a| a.username.contains(&filter.username))
            .cloned();

        Ok(match filter.window() {
            Some((offset, limit)) => matches.skip(offset as usize).take(limit as usize).collect(),
            None => matches.collect(),
        })
    }
}

#[async_trait]
impl ActorRepository for InMemoryAccountStore {
    async fn create_actor(&self, actor: NewActor) -> Result<Actor, ActorRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if Self::username_taken(&state, &actor.username, None) {
            return Err(ActorRepositoryError::UsernameAlreadyExists);
        }
        let created = Self::build_actor(actor);
        state.actors.push(created.clone());
        Ok(created)
    }

    async fn update_actor(
        &self,
        id: Uuid,
        changes: ActorChanges,
    ) -> Result<Actor, ActorRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if Self::username_taken(&state, &changes.username, Some(id)) {
            return Err(ActorRepositoryError::UsernameAlreadyExists);
        }
        let actor = state
            .actors
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(ActorRepositoryError::NotFound)?;

        actor.username = changes.username;
        if let Some(credential) = changes.credential {
            actor.password_hash = credential.hash;
            actor.salt = credential.salt;
        }
        actor.is_verified = changes.is_verified;
        actor.is_active = changes.is_active;
        actor.updated_at = Utc::now();

        Ok(actor.clone())
    }

    async fn delete_actor(&self, id: Uuid) -> Result<Actor, ActorRepositoryError> {
        let mut state = self.state.lock().unwrap();
        let index = state
            .actors
            .iter()
            .position(|a| a.id == id)
            .ok_or(ActorRepositoryError::NotFound)?;

        state.approvals.retain(|r| r.admin_id != id);
        Ok(state.actors.remove(index))
    }

    async fn set_active(&self, id: Uuid, is_active: bool) -> Result<Actor, ActorRepositoryError> {
        let mut state = self.state.lock().unwrap();
        let actor = state
            .actors
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(ActorRepositoryError::NotFound)?;

        actor.is_active = is_active;
        actor.updated_at = Utc::now();
        Ok(actor.clone())
    }

    async fn register_actor(
        &self,
        actor: NewActor,
    ) -> Result<RegisteredActor, ActorRepositoryError> {
        let mut state = self.state.lock().unwrap();
        let mut working = state.clone();

        if Self::username_taken(&working, &actor.username, None) {
            return Err(ActorRepositoryError::UsernameAlreadyExists);
        }
        let created = Self::build_actor(actor);
        working.actors.push(created.clone());

        if self.fail_approval_insert {
            return Err(ActorRepositoryError::DatabaseError(
                "approval insert failed".to_string(),
            ));
        }

        let approval = RegisterApproval {
            id: Uuid::new_v4(),
            admin_id: created.id,
            super_admin_id: None,
            status: ApprovalStatus::Pending,
            created_at: created.created_at,
            updated_at: created.created_at,
        };
        working.approvals.push(approval.clone());

        *state = working;
        Ok(RegisteredActor {
            actor: created,
            approval,
        })
    }
}

#[async_trait]
impl RegisterApprovalQuery for InMemoryAccountStore {
    async fn list_all(&self) -> Result<Vec<RegisterApproval>, RegisterApprovalQueryError> {
        Ok(self.state.lock().unwrap().approvals.clone())
    }
}

#[async_trait]
impl RegisterApprovalRepository for InMemoryAccountStore {
    async fn resolve(
        &self,
        id: Uuid,
        decision: ApprovalDecision,
    ) -> Result<RegisterApproval, RegisterApprovalRepositoryError> {
        let mut state = self.state.lock().unwrap();
        let mut working = state.clone();

        let approval = working
            .approvals
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(RegisterApprovalRepositoryError::NotFound)?;

        ensure_decidable(approval.status).map_err(|_| {
            RegisterApprovalRepositoryError::AlreadyResolved(approval.status)
        })?;

        approval.status = decision.status;
        approval.super_admin_id = Some(decision.reviewer_id);
        approval.updated_at = Utc::now();
        let updated = approval.clone();

        if let Some(flags) = decision.status.actor_flags() {
            if self.fail_actor_cascade {
                return Err(RegisterApprovalRepositoryError::DatabaseError(
                    "actor update failed".to_string(),
                ));
            }
            let actor = working
                .actors
                .iter_mut()
                .find(|a| a.id == updated.admin_id)
                .ok_or(RegisterApprovalRepositoryError::ActorNotFound)?;
            actor.is_verified = flags.is_verified;
            actor.is_active = flags.is_active;
            actor.updated_at = Utc::now();
        }

        *state = working;
        Ok(updated)
    }
}
