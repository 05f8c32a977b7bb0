use std::{fmt, sync::Arc};

use domain::{Chirp, ChirpBody, ChirpId, ChirpRepository, ContentModerator, UserId};
use uuid::Uuid;

use crate::{clock::Clock, dto::ChirpDto, error::ApplicationError};

#[derive(Clone)]
pub struct CreateChirpRequest {
    pub user_id: Uuid,
    pub body: String,
}

// 未审核的正文不进入日志
impl fmt::Debug for CreateChirpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateChirpRequest")
            .field("user_id", &self.user_id)
            .field("body_chars", &self.body.chars().count())
            .finish()
    }
}

pub struct ChirpServiceDependencies {
    pub chirp_repository: Arc<dyn ChirpRepository>,
    pub moderator: Arc<ContentModerator>,
    pub clock: Arc<dyn Clock>,
}

pub struct ChirpService {
    deps: ChirpServiceDependencies,
}

impl ChirpService {
    pub fn new(deps: ChirpServiceDependencies) -> Self {
        Self { deps }
    }

    pub async fn create(&self, request: CreateChirpRequest) -> Result<ChirpDto, ApplicationError> {
        let body = ChirpBody::accept(request.body, &self.deps.moderator).inspect_err(|err| {
            tracing::debug!(user_id = %request.user_id, error = %err, "chirp rejected");
        })?;

        let chirp = Chirp::create(
            ChirpId::generate(),
            UserId::from(request.user_id),
            body,
            self.deps.clock.now(),
        );
        let stored = self.deps.chirp_repository.create(chirp).await?;

        tracing::info!(chirp_id = %stored.id, user_id = %stored.user_id, "chirp created");
        Ok(ChirpDto::from(&stored))
    }

    /// 最新创建的排在最前
    pub async fn list(&self) -> Result<Vec<ChirpDto>, ApplicationError> {
        let chirps = self.deps.chirp_repository.list_all().await?;
        Ok(chirps.iter().rev().map(ChirpDto::from).collect())
    }

    pub async fn get(&self, id: Uuid) -> Result<ChirpDto, ApplicationError> {
        self.deps
            .chirp_repository
            .find_by_id(ChirpId::from(id))
            .await?
            .map(|chirp| ChirpDto::from(&chirp))
            .ok_or(ApplicationError::not_found("chirp"))
    }
}
