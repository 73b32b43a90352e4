use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role assigned to every self-registered actor.
pub const STANDARD_USER_ROLE_ID: i32 = 2;

/// Rows per page for admin listings.
pub const ADMIN_PAGE_SIZE: u64 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub salt: String,
    pub role_id: i32,
    pub is_verified: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Salted one-way hash of a password. `hash` is the full PHC string,
/// `salt` the B64 salt that went into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub hash: String,
    pub salt: String,
}

impl Actor {
    pub fn credential(&self) -> Credential {
        Credential {
            hash: self.password_hash.clone(),
            salt: self.salt.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "pending",
            ApprovalStatus::Approved => "approved",
            ApprovalStatus::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegisterApproval {
    pub id: Uuid,
    /// Actor that registered and is waiting for the decision.
    pub admin_id: Uuid,
    /// Super admin who made the decision, if any.
    pub super_admin_id: Option<Uuid>,
    pub status: ApprovalStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields needed to insert a new actor row.
#[derive(Debug, Clone)]
pub struct NewActor {
    pub username: String,
    pub credential: Credential,
    pub role_id: i32,
    pub is_verified: bool,
    pub is_active: bool,
}

impl NewActor {
    /// A self-registered account: standard role, unverified and inactive
    /// until a super admin approves it.
    pub fn self_registered(username: String, credential: Credential) -> Self {
        Self {
            username,
            credential,
            role_id: STANDARD_USER_ROLE_ID,
            is_verified: false,
            is_active: false,
        }
    }
}

/// Overwrite set for an existing actor. `credential: None` keeps the stored hash.
#[derive(Debug, Clone)]
pub struct ActorChanges {
    pub username: String,
    pub credential: Option<Credential>,
    pub is_verified: bool,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActorListFilter {
    /// Substring match on username; empty matches everything.
    pub username: String,
    /// 1-based page; 0 disables pagination.
    pub page: u32,
}

impl ActorListFilter {
    pub fn new(username: impl Into<String>, page: u32) -> Self {
        Self {
            username: username.into(),
            page,
        }
    }

    /// `(offset, limit)` for the requested page, `None` when unpaginated.
    pub fn window(&self) -> Option<(u64, u64)> {
        if self.page == 0 {
            return None;
        }
        let offset = (u64::from(self.page) - 1) * ADMIN_PAGE_SIZE;
        Some((offset, ADMIN_PAGE_SIZE))
    }
}
