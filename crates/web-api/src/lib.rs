//! Web API 层。
//!
//! 提供 Axum 路由，将 HTTP 请求委托给应用层的用例服务，并统一错误响应格式。

mod admin_routes;
mod error;
mod extract;
mod metrics;
mod routes;
mod state;

pub use error::{ApiError, ErrorBody};
pub use extract::JsonBody;
pub use metrics::ApiMetrics;
pub use routes::router;
pub use state::AppState;
