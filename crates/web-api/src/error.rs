use application::ApplicationError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// 登录失败时唯一的错误文案，账号不存在与密码错误共用
pub const INCORRECT_CREDENTIALS: &str = "Incorrect email or password";
/// 系统故障时返回给客户端的通用文案
pub const INTERNAL_ERROR: &str = "Something went wrong";

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorBody,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorBody {
                error: message.into(),
            },
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, INCORRECT_CREDENTIALS)
    }

    pub fn forbidden() -> Self {
        Self::new(StatusCode::FORBIDDEN, "forbidden")
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal_server_error() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
    }

    /// 请求体无法解码或路径参数无法解析，细节只写日志
    pub fn malformed(detail: impl std::fmt::Display) -> Self {
        tracing::error!(detail = %detail, "malformed request");
        Self::internal_server_error()
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.body.error
    }
}

impl From<ApplicationError> for ApiError {
    fn from(error: ApplicationError) -> Self {
        use application::ApplicationError as AppErr;

        match error {
            AppErr::Domain(err) => ApiError::bad_request(err.to_string()),
            AppErr::Authentication => ApiError::unauthorized(),
            AppErr::NotFound { resource } => ApiError::not_found(format!("{resource} not found")),
            AppErr::Forbidden => ApiError::forbidden(),
            err @ (AppErr::Repository(_) | AppErr::Password(_)) => {
                tracing::error!(error = %err, "request failed");
                ApiError::internal_server_error()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
