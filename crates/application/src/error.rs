use domain::{DomainError, RepositoryError};
use thiserror::Error;

use crate::password::PasswordHasherError;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
    #[error("password error: {0}")]
    Password(#[from] PasswordHasherError),
    /// 账号不存在与密码错误统一为该错误
    #[error("authentication failed")]
    Authentication,
    #[error("{resource} not found")]
    NotFound { resource: &'static str },
    #[error("operation not allowed on this platform")]
    Forbidden,
}

impl ApplicationError {
    pub fn not_found(resource: &'static str) -> Self {
        Self::NotFound { resource }
    }

    /// 系统故障（存储或哈希子系统），区别于正常的校验/认证结果
    pub fn is_system_fault(&self) -> bool {
        matches!(self, Self::Repository(_) | Self::Password(_))
    }
}
