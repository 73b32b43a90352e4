pub mod approval_policy;

pub use approval_policy::{ensure_decidable, ActorFlags, ApprovalTransitionError};
