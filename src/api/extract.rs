//! 请求参数提取

use axum::extract::multipart::{Multipart, MultipartRejection};
use serde::Deserialize;
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::models::UploadedImage;

/// 上传图片的表单字段名
pub const IMAGE_FIELD: &str = "image";

/// `?question=...` 查询参数
#[derive(Debug, Deserialize)]
pub struct QuestionQuery {
    pub question: Option<String>,
}

impl QuestionQuery {
    /// 取出必填的 `question`
    pub fn require(self) -> ApiResult<String> {
        self.question
            .ok_or_else(|| ApiError::Validation("缺少查询参数: question".to_string()))
    }
}

/// 从 multipart 表单中读取 `image` 字段的全部字节
///
/// 其它字段会被忽略。请求不是 multipart 或缺少该字段时返回校验错误，
/// 读取过程中的失败作为内部错误处理。
pub async fn read_image(multipart: Result<Multipart, MultipartRejection>) -> ApiResult<UploadedImage> {
    let mut multipart = multipart.map_err(|e| ApiError::Validation(e.body_text()))?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Internal(e.into()))?
    {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let content_type = field.content_type().map(str::to_string);
        let file_name = field.file_name().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::Internal(e.into()))?;

        debug!(
            "收到图片: {:?} ({:?}), {} 字节",
            file_name,
            content_type,
            bytes.len()
        );

        return Ok(UploadedImage {
            bytes: bytes.to_vec(),
            content_type,
            file_name,
        });
    }

    Err(ApiError::Validation(format!("缺少上传文件字段: {IMAGE_FIELD}")))
}
