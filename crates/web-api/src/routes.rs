use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tower_http::{services::ServeDir, trace::TraceLayer};
use uuid::Uuid;

use application::services::{AuthenticateUserRequest, CreateChirpRequest, RegisterUserRequest};
use application::{ChirpDto, UserDto};

use crate::{
    admin_routes::admin_routes, error::ApiError, extract::JsonBody, metrics::count_hits,
    state::AppState,
};

#[derive(Deserialize)]
struct CreateChirpPayload {
    body: String,
    user_id: Uuid,
}

#[derive(Deserialize)]
struct CredentialsPayload {
    email: String,
    password: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .nest("/admin", admin_routes())
        .merge(file_server(&state))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/chirps", get(list_chirps).post(create_chirp))
        .route("/chirps/{chirp_id}", get(get_chirp))
        .route("/users", get(list_users).post(create_user))
        .route("/login", post(login))
}

/// `/app/` 下的静态文件，每次请求计入访问计数
fn file_server(state: &AppState) -> Router<AppState> {
    Router::new()
        .nest_service("/app", ServeDir::new(&state.static_dir))
        .layer(middleware::from_fn_with_state(
            state.metrics.clone(),
            count_hits,
        ))
}

async fn healthz() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        "OK",
    )
}

async fn create_chirp(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateChirpPayload>,
) -> Result<(StatusCode, Json<ChirpDto>), ApiError> {
    let dto = state
        .chirp_service
        .create(CreateChirpRequest {
            user_id: payload.user_id,
            body: payload.body,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(dto)))
}

async fn list_chirps(State(state): State<AppState>) -> Result<Json<Vec<ChirpDto>>, ApiError> {
    let items = state.chirp_service.list().await?;
    Ok(Json(items))
}

async fn get_chirp(
    State(state): State<AppState>,
    Path(chirp_id): Path<String>,
) -> Result<Json<ChirpDto>, ApiError> {
    let chirp_id = Uuid::parse_str(&chirp_id).map_err(ApiError::malformed)?;
    let dto = state.chirp_service.get(chirp_id).await?;
    Ok(Json(dto))
}

async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CredentialsPayload>,
) -> Result<(StatusCode, Json<UserDto>), ApiError> {
    let dto = state
        .user_service
        .register(RegisterUserRequest {
            email: payload.email,
            password: payload.password,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(dto)))
}

async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserDto>>, ApiError> {
    let items = state.user_service.list().await?;
    Ok(Json(items))
}

async fn login(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CredentialsPayload>,
) -> Result<Json<UserDto>, ApiError> {
    let dto = state
        .user_service
        .authenticate(AuthenticateUserRequest {
            email: payload.email,
            password: payload.password,
        })
        .await?;

    Ok(Json(dto))
}
