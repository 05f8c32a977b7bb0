use crate::errors::{DomainError, DomainResult};
use crate::moderation::ContentModerator;
use crate::value_objects::{ChirpId, Timestamp, UserId};

/// Chirp 正文长度上限（字符数）。
pub const MAX_CHIRP_LENGTH: usize = 140;

/// 校验客户端提交的原始正文长度。
///
/// 长度按审核前的原文计算，成功时原样返回。
pub fn validate_body(raw: String) -> DomainResult<String> {
    let length = raw.chars().count();
    if length > MAX_CHIRP_LENGTH {
        return Err(DomainError::ChirpTooLong {
            max: MAX_CHIRP_LENGTH,
            length,
        });
    }
    Ok(raw)
}

/// 已通过长度校验并完成审核的正文。
///
/// 只能由 [`ChirpBody::accept`] 或从存储层读回的数据构造。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChirpBody(String);

impl ChirpBody {
    /// 先校验原文长度，再交给审核器；原文在此之后被丢弃。
    pub fn accept(raw: String, moderator: &ContentModerator) -> DomainResult<Self> {
        let raw = validate_body(raw)?;
        Ok(Self(moderator.moderate(&raw)))
    }

    /// 从存储层恢复，存储中的正文已经审核过。
    pub fn from_stored(body: String) -> Self {
        Self(body)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chirp {
    pub id: ChirpId,
    pub user_id: UserId,
    pub body: ChirpBody,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Chirp {
    pub fn create(id: ChirpId, user_id: UserId, body: ChirpBody, now: Timestamp) -> Self {
        Self {
            id,
            user_id,
            body,
            created_at: now,
            updated_at: now,
        }
    }
}
