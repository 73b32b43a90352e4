pub mod actors;
pub mod register_approvals;
