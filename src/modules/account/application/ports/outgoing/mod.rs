pub mod actor_query;
pub mod actor_repository;
pub mod password_hasher;
pub mod register_approval_query;
pub mod register_approval_repository;

pub use actor_query::{ActorQuery, ActorQueryError};
pub use actor_repository::{ActorRepository, ActorRepositoryError, RegisteredActor};
pub use password_hasher::{HashError, PasswordHasher};
pub use register_approval_query::{RegisterApprovalQuery, RegisterApprovalQueryError};
pub use register_approval_repository::{
    ApprovalDecision, RegisterApprovalRepository, RegisterApprovalRepositoryError,
};
