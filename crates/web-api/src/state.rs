use std::{path::PathBuf, sync::Arc};

use application::{AdminService, ChirpService, UserService};

use crate::metrics::ApiMetrics;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub chirp_service: Arc<ChirpService>,
    pub admin_service: Arc<AdminService>,
    pub metrics: Arc<ApiMetrics>,
    /// `/app/` 静态文件根目录
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn new(
        user_service: Arc<UserService>,
        chirp_service: Arc<ChirpService>,
        admin_service: Arc<AdminService>,
        static_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            user_service,
            chirp_service,
            admin_service,
            metrics: Arc::new(ApiMetrics::default()),
            static_dir: static_dir.into(),
        }
    }
}
