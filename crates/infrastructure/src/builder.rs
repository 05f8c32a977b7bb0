use std::sync::Arc;

use application::PasswordHasher;
use config::AppConfig;
use domain::{ChirpRepository, UserRepository};
use sqlx::PgPool;
use thiserror::Error;

use crate::{
    migrations::MIGRATOR,
    password::BcryptPasswordHasher,
    repository::{create_pg_pool, PgStorage},
};

/// 连接参数与哈希强度
#[derive(Debug, Clone)]
pub struct InfrastructureConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub bcrypt_cost: Option<u32>,
}

impl From<&AppConfig> for InfrastructureConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            database_url: config.database.url.clone(),
            max_connections: config.database.max_connections,
            bcrypt_cost: config.server.bcrypt_cost,
        }
    }
}

#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("failed to connect to database: {0}")]
    Connect(#[source] sqlx::Error),
    #[error("failed to apply migrations: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// 运行期使用的存储与凭据适配器
#[derive(Clone)]
pub struct Infrastructure {
    storage: PgStorage,
    password_hasher: Arc<BcryptPasswordHasher>,
}

impl Infrastructure {
    /// 建立连接池并执行迁移
    pub async fn connect(config: InfrastructureConfig) -> Result<Self, InfrastructureError> {
        let pool = create_pg_pool(&config.database_url, config.max_connections)
            .await
            .map_err(InfrastructureError::Connect)?;
        MIGRATOR.run(&pool).await?;
        tracing::info!(
            max_connections = config.max_connections,
            "database ready, migrations applied"
        );

        Ok(Self::from_pool(pool, config.bcrypt_cost))
    }

    /// 复用已迁移的连接池
    pub fn from_pool(pool: PgPool, bcrypt_cost: Option<u32>) -> Self {
        Self {
            storage: PgStorage::new(pool),
            password_hasher: Arc::new(BcryptPasswordHasher::new(bcrypt_cost)),
        }
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.storage.user_repository.clone()
    }

    pub fn chirp_repository(&self) -> Arc<dyn ChirpRepository> {
        self.storage.chirp_repository.clone()
    }

    pub fn password_hasher(&self) -> Arc<dyn PasswordHasher> {
        self.password_hasher.clone()
    }
}
