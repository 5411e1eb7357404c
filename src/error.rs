use async_openai::error::OpenAIError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// LLM 服务错误
#[derive(Debug, Error)]
pub enum LlmError {
    /// 构建请求或调用上游 API 失败
    #[error("{0}")]
    Request(#[from] OpenAIError),
    /// 上游没有返回任何候选
    #[error("LLM 返回结果为空 (模型: {model})")]
    EmptyResponse { model: String },
}

/// HTTP 接口错误
///
/// 每个变体对应一种响应形态，见 [`IntoResponse`] 实现。
#[derive(Debug, Error)]
pub enum ApiError {
    /// 请求参数不完整或格式错误，返回 422
    #[error("{0}")]
    Validation(String),
    /// 解题接口捕获的任何失败，返回 500 并携带错误信息
    #[error("{0}")]
    Solve(String),
    /// 未处理的失败，返回通用 500
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<LlmError> for ApiError {
    fn from(err: LlmError) -> Self {
        ApiError::Internal(err.into())
    }
}

/// 错误响应体 `{"detail": ...}`
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}

impl ErrorDetail {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Json(ErrorDetail::new(msg))).into_response()
            }
            ApiError::Solve(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorDetail::new(msg))).into_response()
            }
            ApiError::Internal(err) => {
                tracing::error!("❌ 请求处理失败: {:#}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}

/// 接口结果类型
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::Validation("缺少参数".into()).into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::Solve("boom".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Internal(anyhow::anyhow!("boom")).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_empty_response_message_names_model() {
        let err = LlmError::EmptyResponse {
            model: "gpt-4o-mini".to_string(),
        };
        assert!(err.to_string().contains("gpt-4o-mini"));
    }
}
