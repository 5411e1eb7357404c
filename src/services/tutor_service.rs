//! 辅导服务
//!
//! 把题目和图片组装成固定的提示词，交给 [`LlmService`]。

use std::sync::Arc;

use tracing::info;

use crate::config::Config;
use crate::error::LlmError;
use crate::models::{Question, UploadedImage};
use crate::services::llm_service::{ChatPrompt, LlmService};
use crate::utils::truncate_text;

const SOLVE_PREAMBLE: &str =
    "You are a helpful math tutor. Provide step-by-step solutions.Solve this question step by step: ";

const HINT_SYSTEM_MESSAGE: &str = "Analyze the partial solution and provide next steps.";

const CORRECTION_SYSTEM_MESSAGE: &str = "Check this solution for errors and provide corrections. If the solution is correct, type 'The solution is correct'.";

/// 日志中题目的最大显示长度
const QUESTION_PREVIEW_LEN: usize = 60;

/// 解题 / 提示 / 批改三种能力
#[derive(Clone)]
pub struct TutorService {
    llm: Arc<LlmService>,
    solve_model: String,
    vision_model: String,
    correction_max_tokens: u32,
}

impl TutorService {
    pub fn new(config: &Config) -> Self {
        Self::with_llm(Arc::new(LlmService::new(config)), config)
    }

    pub fn with_llm(llm: Arc<LlmService>, config: &Config) -> Self {
        Self {
            llm,
            solve_model: config.solve_model.clone(),
            vision_model: config.vision_model.clone(),
            correction_max_tokens: config.correction_max_tokens,
        }
    }

    /// 给出分步解答
    pub async fn solve(&self, question: &Question) -> Result<Option<String>, LlmError> {
        info!("🧮 解题: {}", truncate_text(question.as_str(), QUESTION_PREVIEW_LEN));
        self.llm.complete(&self.solve_prompt(question)).await
    }

    /// 根据手写过程给出下一步提示
    pub async fn hint(
        &self,
        question: &Question,
        image: &UploadedImage,
    ) -> Result<Option<String>, LlmError> {
        info!(
            "💡 提示: {} (图片 {} 字节)",
            truncate_text(question.as_str(), QUESTION_PREVIEW_LEN),
            image.len()
        );
        self.llm.complete(&self.hint_prompt(question, image)).await
    }

    /// 检查解答并给出修改意见
    pub async fn correct(
        &self,
        question: &Question,
        image: &UploadedImage,
    ) -> Result<Option<String>, LlmError> {
        info!(
            "✅ 批改: {} (图片 {} 字节)",
            truncate_text(question.as_str(), QUESTION_PREVIEW_LEN),
            image.len()
        );
        self.llm.complete(&self.correction_prompt(question, image)).await
    }

    fn solve_prompt(&self, question: &Question) -> ChatPrompt {
        ChatPrompt {
            model: self.solve_model.clone(),
            user_message: format!("{SOLVE_PREAMBLE}{question}"),
            ..Default::default()
        }
    }

    fn hint_prompt(&self, question: &Question, image: &UploadedImage) -> ChatPrompt {
        ChatPrompt {
            model: self.vision_model.clone(),
            system_message: Some(HINT_SYSTEM_MESSAGE.to_string()),
            user_message: format!(
                "Question: {question}\nBased on my work so far, what should be my next step?"
            ),
            images: vec![image.to_data_url()],
            max_tokens: None,
        }
    }

    fn correction_prompt(&self, question: &Question, image: &UploadedImage) -> ChatPrompt {
        ChatPrompt {
            model: self.vision_model.clone(),
            system_message: Some(CORRECTION_SYSTEM_MESSAGE.to_string()),
            user_message: format!("Question: {question}"),
            images: vec![image.to_data_url()],
            max_tokens: Some(self.correction_max_tokens),
        }
    }
}
