//! 领域模型错误定义
//!
//! 校验类错误的 `Display` 文案即对外暴露的错误信息，必须保证对客户端安全。

use thiserror::Error;

/// 领域模型错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Chirp 正文超出长度上限（按未审核的原文计算）
    #[error("Chirp is too long")]
    ChirpTooLong { max: usize, length: usize },

    /// 邮箱不满足最小长度
    #[error("invalid email")]
    InvalidEmail,

    /// 密码不满足最小长度
    #[error("invalid password")]
    InvalidPassword,

    /// 其他参数错误
    #[error("invalid argument {field}: {reason}")]
    InvalidArgument { field: &'static str, reason: String },
}

impl DomainError {
    /// 创建参数错误
    pub fn invalid_argument(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field,
            reason: reason.into(),
        }
    }
}

/// 领域模型结果类型
pub type DomainResult<T> = Result<T, DomainError>;

/// 仓储（持久化边界）错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("record conflicts with an existing one")]
    Conflict,
    #[error("storage error: {message}")]
    Storage { message: String },
}

impl RepositoryError {
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}
