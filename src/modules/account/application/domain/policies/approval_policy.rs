use crate::modules::account::application::domain::entities::ApprovalStatus;

/// Verification/activation flags an approval decision writes onto the actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActorFlags {
    pub is_verified: bool,
    pub is_active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ApprovalTransitionError {
    #[error("Register approval already resolved as {0}")]
    AlreadyResolved(ApprovalStatus),
}

impl ApprovalStatus {
    /// `approved` and `rejected` are final.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ApprovalStatus::Approved | ApprovalStatus::Rejected)
    }

    /// Cascade applied to the registered actor when this status is decided.
    /// `pending` leaves the actor untouched.
    pub fn actor_flags(&self) -> Option<ActorFlags> {
        match self {
            ApprovalStatus::Approved => Some(ActorFlags {
                is_verified: true,
                is_active: true,
            }),
            ApprovalStatus::Rejected => Some(ActorFlags {
                is_verified: false,
                is_active: false,
            }),
            ApprovalStatus::Pending => None,
        }
    }
}

/// Only a pending approval accepts a decision.
pub fn ensure_decidable(current: ApprovalStatus) -> Result<(), ApprovalTransitionError> {
    if current.is_terminal() {
        return Err(ApprovalTransitionError::AlreadyResolved(current));
    }
    Ok(())
}
