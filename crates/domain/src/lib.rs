//! Chirpy 核心领域模型
//!
//! 包含用户、Chirp 等实体，内容审核与长度校验规则，以及持久化边界的仓储接口。

pub mod chirp;
pub mod errors;
pub mod moderation;
pub mod repository;
pub mod user;
pub mod value_objects;

// 重新导出常用类型
pub use chirp::{validate_body, Chirp, ChirpBody, MAX_CHIRP_LENGTH};
pub use errors::{DomainError, DomainResult, RepositoryError};
pub use moderation::{moderate, ContentModerator, MASK};
pub use repository::{ChirpRepository, RepositoryFuture, RepositoryResult, UserRepository};
pub use user::User;
pub use value_objects::{
    ChirpId, Password, PasswordHash, Timestamp, UserEmail, UserId, MIN_EMAIL_LENGTH,
    MIN_PASSWORD_LENGTH,
};

#[cfg(feature = "testing")]
pub use repository::{MockChirpRepository, MockUserRepository};
