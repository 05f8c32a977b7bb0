use domain::{Chirp, Timestamp, User};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 对外的用户记录，不包含凭据字段。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: Uuid,
    pub email: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            id: Uuid::from(user.id),
            email: user.email.as_str().to_owned(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChirpDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub body: String,
}

impl From<&Chirp> for ChirpDto {
    fn from(chirp: &Chirp) -> Self {
        Self {
            id: Uuid::from(chirp.id),
            user_id: Uuid::from(chirp.user_id),
            created_at: chirp.created_at,
            updated_at: chirp.updated_at,
            body: chirp.body.as_str().to_owned(),
        }
    }
}
