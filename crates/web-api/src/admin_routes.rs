use axum::{
    extract::State,
    response::Html,
    routing::{get, post},
    Router,
};

use crate::{error::ApiError, state::AppState};

/// 管理端路由
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/metrics", get(show_metrics))
        .route("/reset", post(reset))
}

async fn show_metrics(State(state): State<AppState>) -> Html<String> {
    Html(format!(
        "<html>
  <body>
    <h1>Welcome, Chirpy Admin</h1>
    <p>Chirpy has been visited {} times!</p>
  </body>
</html>",
        state.metrics.hits()
    ))
}

/// 仅开发模式：删除全部用户并清零访问计数
async fn reset(State(state): State<AppState>) -> Result<String, ApiError> {
    state.admin_service.reset().await?;
    let previous = state.metrics.reset();
    Ok(format!("Hits reset, previous hits was {previous}"))
}
