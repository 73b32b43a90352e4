use chrono::Utc;
use uuid::Uuid;

use crate::account::application::domain::entities::{
    Actor, ApprovalStatus, RegisterApproval, STANDARD_USER_ROLE_ID,
};

pub fn actor(username: &str) -> Actor {
    let now = Utc::now();
    Actor {
        id: Uuid::new_v4(),
        username: username.to_string(),
        password_hash: format!("fake$secret-{username}"),
        salt: "fixed-salt".to_string(),
        role_id: 1,
        is_verified: true,
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

pub fn registered_actor(username: &str) -> Actor {
    Actor {
        role_id: STANDARD_USER_ROLE_ID,
        is_verified: false,
        is_active: false,
        ..actor(username)
    }
}

pub fn approval(admin_id: Uuid, status: ApprovalStatus) -> RegisterApproval {
    let now = Utc::now();
    RegisterApproval {
        id: Uuid::new_v4(),
        admin_id,
        super_admin_id: None,
        status,
        created_at: now,
        updated_at: now,
    }
}
