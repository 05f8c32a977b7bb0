use application::{password::PasswordHasherError, PasswordHasher};
use async_trait::async_trait;
use bcrypt::{non_truncating_hash, non_truncating_verify, BcryptError, DEFAULT_COST};
use domain::{Password, PasswordHash};

/// bcrypt 哈希在阻塞线程池中执行，避免占用异步工作线程
///
/// bcrypt 只使用前 72 个字节（含结尾的 NUL），这里拒绝更长的输入而不是
/// 静默截断：注册时报哈希错误，登录时视为密码不匹配。
#[derive(Debug, Clone)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new(cost: Option<u32>) -> Self {
        Self {
            cost: cost.unwrap_or(DEFAULT_COST),
        }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

#[async_trait]
impl PasswordHasher for BcryptPasswordHasher {
    async fn hash(&self, plaintext: &Password) -> Result<PasswordHash, PasswordHasherError> {
        let cost = self.cost;
        let plaintext = plaintext.expose().to_owned();
        let hashed = tokio::task::spawn_blocking(move || non_truncating_hash(plaintext, cost))
            .await
            .map_err(|err| PasswordHasherError::hash_error(err.to_string()))
            .and_then(|res| res.map_err(|err| PasswordHasherError::hash_error(err.to_string())))?;

        PasswordHash::new(hashed).map_err(|err| PasswordHasherError::hash_error(err.to_string()))
    }

    async fn verify(
        &self,
        candidate: &Password,
        hashed: &PasswordHash,
    ) -> Result<(), PasswordHasherError> {
        let candidate = candidate.expose().to_owned();
        let hashed = hashed.as_str().to_owned();
        let matched = tokio::task::spawn_blocking(move || non_truncating_verify(candidate, &hashed))
            .await
            .map_err(|err| PasswordHasherError::verify_error(err.to_string()))
            .and_then(|res| match res {
                Ok(matched) => Ok(matched),
                // 加上 NUL 超过 72 字节的候选密码不可能是注册时的密码
                Err(BcryptError::Truncation(_)) => Ok(false),
                Err(err) => Err(PasswordHasherError::verify_error(err.to_string())),
            })?;

        if matched {
            Ok(())
        } else {
            Err(PasswordHasherError::Mismatch)
        }
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new(Some(DEFAULT_COST))
    }
}
