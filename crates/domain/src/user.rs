use crate::value_objects::{PasswordHash, Timestamp, UserEmail, UserId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub email: UserEmail,
    /// 只在存储层与凭据校验之间流转，任何响应都不包含该字段
    pub password: PasswordHash,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl User {
    pub fn register(id: UserId, email: UserEmail, password: PasswordHash, now: Timestamp) -> Self {
        Self {
            id,
            email,
            password,
            created_at: now,
            updated_at: now,
        }
    }
}
