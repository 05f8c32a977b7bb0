#![allow(dead_code)]

use std::sync::Arc;

use application::{
    AdminService, AdminServiceDependencies, ChirpService, ChirpServiceDependencies, SystemClock,
    UserService, UserServiceDependencies,
};
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use config::Platform;
use domain::{
    Chirp, ChirpId, ChirpRepository, ContentModerator, RepositoryError, RepositoryFuture, User,
    UserEmail, UserRepository,
};
use infrastructure::BcryptPasswordHasher;
use serde_json::{json, Value};
use tokio::sync::RwLock;
use tower::ServiceExt;

use web_api::{router, AppState};

/// 同时实现两个仓储接口的内存存储，删除用户时级联删除其 Chirp
#[derive(Clone, Default)]
pub struct InMemoryStore {
    users: Arc<RwLock<Vec<User>>>,
    chirps: Arc<RwLock<Vec<Chirp>>>,
}

impl InMemoryStore {
    pub async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn chirp_count(&self) -> usize {
        self.chirps.read().await.len()
    }

    pub async fn stored_hash(&self, email: &str) -> Option<String> {
        self.users
            .read()
            .await
            .iter()
            .find(|user| user.email.as_str() == email)
            .map(|user| user.password.as_str().to_owned())
    }
}

impl UserRepository for InMemoryStore {
    fn create(&self, user: User) -> RepositoryFuture<User> {
        let store = self.clone();
        Box::pin(async move {
            let mut guard = store.users.write().await;
            if guard.iter().any(|u| u.email == user.email || u.id == user.id) {
                return Err(RepositoryError::Conflict);
            }
            guard.push(user.clone());
            Ok(user)
        })
    }

    fn find_by_email(&self, email: UserEmail) -> RepositoryFuture<Option<User>> {
        let store = self.clone();
        Box::pin(async move {
            let guard = store.users.read().await;
            Ok(guard.iter().find(|u| u.email == email).cloned())
        })
    }

    fn list(&self) -> RepositoryFuture<Vec<User>> {
        let store = self.clone();
        Box::pin(async move { Ok(store.users.read().await.clone()) })
    }

    fn delete_all(&self) -> RepositoryFuture<u64> {
        let store = self.clone();
        Box::pin(async move {
            let mut users = store.users.write().await;
            let mut chirps = store.chirps.write().await;
            let deleted = users.len() as u64;
            users.clear();
            chirps.clear();
            Ok(deleted)
        })
    }
}

impl ChirpRepository for InMemoryStore {
    fn create(&self, chirp: Chirp) -> RepositoryFuture<Chirp> {
        let store = self.clone();
        Box::pin(async move {
            let users = store.users.read().await;
            if !users.iter().any(|u| u.id == chirp.user_id) {
                return Err(RepositoryError::storage("foreign key violation"));
            }
            store.chirps.write().await.push(chirp.clone());
            Ok(chirp)
        })
    }

    fn find_by_id(&self, id: ChirpId) -> RepositoryFuture<Option<Chirp>> {
        let store = self.clone();
        Box::pin(async move {
            let guard = store.chirps.read().await;
            Ok(guard.iter().find(|c| c.id == id).cloned())
        })
    }

    fn list_all(&self) -> RepositoryFuture<Vec<Chirp>> {
        let store = self.clone();
        Box::pin(async move { Ok(store.chirps.read().await.clone()) })
    }
}

/// 所有操作都失败的存储
pub struct FailingStore;

fn unavailable<T: Send + 'static>() -> RepositoryFuture<T> {
    Box::pin(async { Err(RepositoryError::storage("connection refused")) })
}

impl UserRepository for FailingStore {
    fn create(&self, _user: User) -> RepositoryFuture<User> {
        unavailable()
    }

    fn find_by_email(&self, _email: UserEmail) -> RepositoryFuture<Option<User>> {
        unavailable()
    }

    fn list(&self) -> RepositoryFuture<Vec<User>> {
        unavailable()
    }

    fn delete_all(&self) -> RepositoryFuture<u64> {
        unavailable()
    }
}

impl ChirpRepository for FailingStore {
    fn create(&self, _chirp: Chirp) -> RepositoryFuture<Chirp> {
        unavailable()
    }

    fn find_by_id(&self, _id: ChirpId) -> RepositoryFuture<Option<Chirp>> {
        unavailable()
    }

    fn list_all(&self) -> RepositoryFuture<Vec<Chirp>> {
        unavailable()
    }
}

pub struct TestApp {
    pub router: Router,
    pub store: InMemoryStore,
    pub state: AppState,
}

pub fn static_dir() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures")
}

fn build_state(
    user_repository: Arc<dyn UserRepository>,
    chirp_repository: Arc<dyn ChirpRepository>,
    platform: Platform,
) -> AppState {
    let clock = Arc::new(SystemClock);
    let password_hasher = Arc::new(BcryptPasswordHasher::new(Some(4)));

    let user_service = Arc::new(UserService::new(UserServiceDependencies {
        user_repository: user_repository.clone(),
        password_hasher,
        clock: clock.clone(),
    }));

    let chirp_service = Arc::new(ChirpService::new(ChirpServiceDependencies {
        chirp_repository,
        moderator: Arc::new(ContentModerator::default()),
        clock,
    }));

    let admin_service = Arc::new(AdminService::new(AdminServiceDependencies {
        user_repository,
        platform,
    }));

    AppState::new(user_service, chirp_service, admin_service, static_dir())
}

pub fn test_app(platform: Platform) -> TestApp {
    let store = InMemoryStore::default();
    let state = build_state(Arc::new(store.clone()), Arc::new(store.clone()), platform);

    TestApp {
        router: router(state.clone()),
        store,
        state,
    }
}

pub fn failing_app() -> Router {
    router(build_state(
        Arc::new(FailingStore),
        Arc::new(FailingStore),
        Platform::Dev,
    ))
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn raw_request(method: &str, uri: &str, body: &'static str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::from(body))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub struct RawResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: String,
}

pub async fn send_raw(app: &Router, request: Request<Body>) -> RawResponse {
    let response = app.clone().oneshot(request).await.expect("request");
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    RawResponse {
        status,
        content_type,
        body: String::from_utf8_lossy(&body_bytes).into_owned(),
    }
}

pub async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let raw = send_raw(app, request).await;
    let body = serde_json::from_str(&raw.body).unwrap_or(json!({}));
    (raw.status, body)
}

/// 注册用户并返回其 id
pub async fn register(app: &Router, email: &str, password: &str) -> String {
    let (status, body) = send_request(
        app,
        json_request(
            "POST",
            "/api/users",
            json!({ "email": email, "password": password }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().expect("user id").to_owned()
}
