//! 凭据校验端口
//!
//! `Mismatch` 是正常的用户输入结果；`Hash` / `Verify` 属于系统故障，
//! 需要分别记录与上报。

use async_trait::async_trait;
use domain::{Password, PasswordHash};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PasswordHasherError {
    #[error("hash error: {0}")]
    Hash(String),
    #[error("verify error: {0}")]
    Verify(String),
    #[error("password does not match")]
    Mismatch,
}

impl PasswordHasherError {
    pub fn hash_error(message: impl Into<String>) -> Self {
        Self::Hash(message.into())
    }

    pub fn verify_error(message: impl Into<String>) -> Self {
        Self::Verify(message.into())
    }
}

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// 加盐的单向哈希，同一明文两次调用得到不同结果。
    async fn hash(&self, plaintext: &Password) -> Result<PasswordHash, PasswordHasherError>;

    /// 候选密码与存储哈希一致时返回 `Ok(())`，不一致返回 [`PasswordHasherError::Mismatch`]。
    async fn verify(
        &self,
        candidate: &Password,
        hashed: &PasswordHash,
    ) -> Result<(), PasswordHasherError>;
}
