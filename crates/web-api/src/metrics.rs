//! 静态站点访问计数

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

/// 进程级访问计数器，只能通过 increment / hits / reset 访问
#[derive(Debug, Default)]
pub struct ApiMetrics {
    file_server_hits: AtomicU64,
}

impl ApiMetrics {
    pub fn increment(&self) {
        self.file_server_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn hits(&self) -> u64 {
        self.file_server_hits.load(Ordering::Relaxed)
    }

    /// 清零并返回清零前的值
    pub fn reset(&self) -> u64 {
        self.file_server_hits.swap(0, Ordering::Relaxed)
    }
}

pub(crate) async fn count_hits(
    State(metrics): State<Arc<ApiMetrics>>,
    request: Request,
    next: Next,
) -> Response {
    metrics.increment();
    next.run(request).await
}
