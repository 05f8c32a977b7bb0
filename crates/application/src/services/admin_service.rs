use std::sync::Arc;

use config::Platform;
use domain::UserRepository;

use crate::error::ApplicationError;

pub struct AdminServiceDependencies {
    pub user_repository: Arc<dyn UserRepository>,
    pub platform: Platform,
}

/// 管理端的破坏性操作，仅在开发模式下可用。
pub struct AdminService {
    deps: AdminServiceDependencies,
}

impl AdminService {
    pub fn new(deps: AdminServiceDependencies) -> Self {
        Self { deps }
    }

    /// 删除全部用户及其 Chirp，返回删除的用户数
    pub async fn reset(&self) -> Result<u64, ApplicationError> {
        if !self.deps.platform.is_dev() {
            tracing::warn!(platform = ?self.deps.platform, "reset refused outside dev");
            return Err(ApplicationError::Forbidden);
        }

        let deleted = self.deps.user_repository.delete_all().await?;
        tracing::info!(deleted, "all users deleted");
        Ok(deleted)
    }
}
