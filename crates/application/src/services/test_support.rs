//! 服务测试使用的时钟与哈希替身

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use domain::{Password, PasswordHash, Timestamp};

use crate::{clock::Clock, password::PasswordHasher, PasswordHasherError};

pub struct FixedClock(pub Timestamp);

impl Default for FixedClock {
    fn default() -> Self {
        Self(Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}

/// 以 `plain:` 前缀保存明文，便于断言
pub struct PlainPasswordHasher;

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, plaintext: &Password) -> Result<PasswordHash, PasswordHasherError> {
        PasswordHash::new(format!("plain:{}", plaintext.expose()))
            .map_err(|err| PasswordHasherError::hash_error(err.to_string()))
    }

    async fn verify(
        &self,
        candidate: &Password,
        hashed: &PasswordHash,
    ) -> Result<(), PasswordHasherError> {
        if hashed.as_str() == format!("plain:{}", candidate.expose()) {
            Ok(())
        } else {
            Err(PasswordHasherError::Mismatch)
        }
    }
}

/// 哈希子系统故障
pub struct BrokenPasswordHasher;

#[async_trait]
impl PasswordHasher for BrokenPasswordHasher {
    async fn hash(&self, _plaintext: &Password) -> Result<PasswordHash, PasswordHasherError> {
        Err(PasswordHasherError::hash_error("out of memory"))
    }

    async fn verify(
        &self,
        _candidate: &Password,
        _hashed: &PasswordHash,
    ) -> Result<(), PasswordHasherError> {
        Err(PasswordHasherError::verify_error("invalid hash"))
    }
}
