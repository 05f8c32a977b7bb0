//! 主应用程序入口
//!
//! 加载配置、连接数据库并启动 Axum Web API 服务。

use std::sync::Arc;

use application::{
    AdminService, AdminServiceDependencies, ChirpService, ChirpServiceDependencies, Clock,
    SystemClock, UserService, UserServiceDependencies,
};
use config::AppConfig;
use domain::ContentModerator;
use infrastructure::{Infrastructure, InfrastructureConfig};
use tracing_subscriber::EnvFilter;
use web_api::{router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志，未设置 RUST_LOG 时默认 info
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::load()?;

    tracing::info!(
        database = %config.database.redacted_url(),
        platform = ?config.platform,
        "配置加载完成"
    );

    let infrastructure = Infrastructure::connect(InfrastructureConfig::from(&config)).await?;

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let moderator = Arc::new(ContentModerator::new(&config.moderation.banned_words));

    let user_service = UserService::new(UserServiceDependencies {
        user_repository: infrastructure.user_repository(),
        password_hasher: infrastructure.password_hasher(),
        clock: clock.clone(),
    });

    let chirp_service = ChirpService::new(ChirpServiceDependencies {
        chirp_repository: infrastructure.chirp_repository(),
        moderator,
        clock,
    });

    let admin_service = AdminService::new(AdminServiceDependencies {
        user_repository: infrastructure.user_repository(),
        platform: config.platform,
    });

    let state = AppState::new(
        Arc::new(user_service),
        Arc::new(chirp_service),
        Arc::new(admin_service),
        config.server.static_dir.clone(),
    );

    // 启动 Web 服务器
    let app = router(state);
    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;

    tracing::info!("Chirpy 服务器启动在 http://{}", address);
    axum::serve(listener, app).await?;

    Ok(())
}
