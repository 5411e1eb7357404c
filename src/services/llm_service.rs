//! LLM 服务 - 业务能力层
//!
//! 只负责"调用上游补全接口"这一能力，不关心具体是哪个接口在用
//!
//! ## 技术栈
//! - 使用 `async-openai` crate 进行 API 调用
//! - 支持自定义 API 端点和模型
//! - 兼容 OpenAI API 的服务

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestMessageContentPartImage,
        ChatCompletionRequestMessageContentPartText, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, ChatCompletionRequestUserMessageContent,
        ChatCompletionRequestUserMessageContentPart, CreateChatCompletionRequest,
        CreateChatCompletionRequestArgs, ImageDetail, ImageUrl,
    },
    Client,
};
use backoff::ExponentialBackoffBuilder;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::LlmError;

/// 一次补全请求的全部输入
#[derive(Debug, Clone, Default)]
pub struct ChatPrompt {
    pub model: String,
    pub system_message: Option<String>,
    pub user_message: String,
    /// 图片 URL（可以是 `data:` URL），会追加到用户消息中
    pub images: Vec<String>,
    pub max_tokens: Option<u32>,
}

/// LLM 服务
///
/// 持有唯一的上游客户端，在所有请求间共享。
pub struct LlmService {
    client: Client<OpenAIConfig>,
}

impl LlmService {
    /// 创建新的 LLM 服务
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(&config.openai_api_key)
            .with_api_base(&config.openai_api_base);

        // 不重试：第一次失败（包括 429 / 5xx）直接返回
        let no_retry = ExponentialBackoffBuilder::new()
            .with_max_elapsed_time(Some(Duration::ZERO))
            .build();

        Self {
            client: Client::with_config(openai_config).with_backoff(no_retry),
        }
    }

    /// 发送补全请求并返回第一个候选的文本
    ///
    /// 上游没有返回任何候选时报错；候选存在但没有文本时返回 `None`。
    pub async fn complete(&self, prompt: &ChatPrompt) -> Result<Option<String>, LlmError> {
        debug!("调用 LLM API，模型: {}", prompt.model);
        debug!("用户消息长度: {} 字符", prompt.user_message.len());

        let request = build_request(prompt)?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            warn!("LLM API 调用失败: {}", e);
            LlmError::Request(e)
        })?;

        debug!("LLM API 调用成功");

        let choice = response.choices.first().ok_or_else(|| LlmError::EmptyResponse {
            model: prompt.model.clone(),
        })?;

        if choice.message.content.is_none() {
            warn!("LLM 返回内容为空 (模型: {})", prompt.model);
        }

        Ok(choice.message.content.clone())
    }
}

/// 把 [`ChatPrompt`] 转成上游请求
///
/// 有图片时用户消息是"文本 + 图片"的多部分内容，否则是纯文本。
pub fn build_request(prompt: &ChatPrompt) -> Result<CreateChatCompletionRequest, LlmError> {
    let mut messages = Vec::new();

    if let Some(sys_msg) = &prompt.system_message {
        let system_msg = ChatCompletionRequestSystemMessageArgs::default()
            .content(sys_msg.as_str())
            .build()?;
        messages.push(ChatCompletionRequestMessage::System(system_msg));
    }

    let user_msg = if prompt.images.is_empty() {
        ChatCompletionRequestUserMessageArgs::default()
            .content(prompt.user_message.as_str())
            .build()?
    } else {
        let mut content_parts = vec![ChatCompletionRequestUserMessageContentPart::Text(
            ChatCompletionRequestMessageContentPartText {
                text: prompt.user_message.clone(),
            },
        )];

        for url in &prompt.images {
            content_parts.push(ChatCompletionRequestUserMessageContentPart::ImageUrl(
                ChatCompletionRequestMessageContentPartImage {
                    image_url: ImageUrl {
                        url: url.clone(),
                        detail: Some(ImageDetail::High),
                    },
                },
            ));
        }

        debug!("使用 Vision API，包含 {} 张图片", prompt.images.len());

        ChatCompletionRequestUserMessageArgs::default()
            .content(ChatCompletionRequestUserMessageContent::Array(content_parts))
            .build()?
    };
    messages.push(ChatCompletionRequestMessage::User(user_msg));

    let mut args = CreateChatCompletionRequestArgs::default();
    args.model(&prompt.model).messages(messages);
    if let Some(max_tokens) = prompt.max_tokens {
        // 兼容 OpenAI 的服务普遍只认 `max_tokens`
        #[allow(deprecated)]
        args.max_tokens(max_tokens);
    }

    Ok(args.build()?)
}
