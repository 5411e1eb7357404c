//! 上传的图片

use base64::{engine::general_purpose::STANDARD, Engine as _};

/// 上传文件未声明图片类型时使用的 MIME
pub const DEFAULT_IMAGE_MIME: &str = "image/jpeg";

/// 一次请求中上传的图片，完整读入内存
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
    pub file_name: Option<String>,
}

impl UploadedImage {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            content_type: None,
            file_name: None,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// 声明的类型为 `image/*` 时使用它，否则回退为 JPEG
    pub fn mime_type(&self) -> &str {
        match self.content_type.as_deref() {
            Some(ct) if ct.starts_with("image/") => ct,
            _ => DEFAULT_IMAGE_MIME,
        }
    }

    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }

    /// `data:<mime>;base64,<payload>`
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type(), self.to_base64())
    }
}
