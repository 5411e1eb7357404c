//! # Math Tutor Relay
//!
//! 把题目和手写过程转发给上游大模型的数学辅导 HTTP 服务
//!
//! ## 分层
//!
//! ### ① 接口层（API）
//! - `api/` - 路由、跨域、请求参数提取，把错误映射成 HTTP 响应
//!
//! ### ② 业务能力层（Services）
//! - `TutorService` - 解题 / 提示 / 批改，负责组装提示词
//! - `LlmService` - 唯一的上游客户端，负责一次补全调用
//!
//! ### ③ 数据（Models）
//! - `Question` - 题目文本的解码与清理
//! - `UploadedImage` - 上传图片及其 `data:` URL
//!
//! ## 接口
//!
//! | 路由 | 输入 | 输出 |
//! |---|---|---|
//! | `POST /api/solve` | `?question=` | `{"solution": ...}` |
//! | `POST /api/hint` | `?question=` + 表单 `image` | `{"hint": ...}` |
//! | `POST /api/correct` | `?question=` + 表单 `image` | `{"correction": ...}` |

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use api::{router, AppState};
pub use app::App;
pub use config::Config;
pub use error::{ApiError, ApiResult, LlmError};
pub use models::{Question, UploadedImage};
pub use services::{LlmService, TutorService};
