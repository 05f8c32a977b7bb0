use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// JSON 请求体提取器
///
/// 与 `axum::Json` 不同，不检查 content-type，解码失败统一映射为
/// [`ApiError::malformed`]。日志只记录错误类别与位置，不记录请求内容。
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(ApiError::malformed)?;

        serde_json::from_slice(&bytes).map(JsonBody).map_err(|err| {
            ApiError::malformed(format_args!(
                "json decode failed: {:?} at line {} column {}",
                err.classify(),
                err.line(),
                err.column()
            ))
        })
    }
}
