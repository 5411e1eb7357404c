//! HTTP 接口层
//!
//! 负责路由、跨域和请求体限制，具体能力委托给 [`TutorService`]

mod extract;
mod handlers;

use axum::{extract::DefaultBodyLimit, routing::post, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::services::TutorService;

pub use extract::{QuestionQuery, IMAGE_FIELD};
pub use handlers::{correct, hint, not_found, solve};

/// 路由共享状态
#[derive(Clone)]
pub struct AppState {
    pub tutor: TutorService,
}

/// 根据配置创建完整的路由
pub fn router(config: &Config) -> Router {
    router_with_state(
        AppState {
            tutor: TutorService::new(config),
        },
        config.max_upload_bytes,
    )
}

pub fn router_with_state(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/api/solve", post(solve))
        .route("/api/hint", post(hint))
        .route("/api/correct", post(correct))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        // 允许任意来源、方法和请求头，并回显 Origin 以支持携带凭证
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
