mod actor_query_postgres;
mod actor_repository_postgres;
mod register_approval_query_postgres;
mod register_approval_repository_postgres;
pub mod sea_orm_entity;
pub mod security;

pub use actor_query_postgres::ActorQueryPostgres;
pub use actor_repository_postgres::ActorRepositoryPostgres;
pub use register_approval_query_postgres::RegisterApprovalQueryPostgres;
pub use register_approval_repository_postgres::RegisterApprovalRepositoryPostgres;
