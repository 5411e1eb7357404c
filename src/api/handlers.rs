use axum::{
    extract::{multipart::MultipartRejection, Multipart, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::error;

use crate::error::{ApiError, ApiResult, ErrorDetail};
use crate::models::{CorrectionResponse, HintResponse, Question, SolveResponse};

use super::extract::{read_image, QuestionQuery};
use super::AppState;

/// `POST /api/solve?question=...`
///
/// 唯一显式捕获失败的接口：任何错误都以 500 + `detail` 返回。
pub async fn solve(
    State(state): State<AppState>,
    Query(query): Query<QuestionQuery>,
) -> ApiResult<Json<SolveResponse>> {
    let question = Question::decode(&query.require()?);

    match state.tutor.solve(&question).await {
        Ok(solution) => Ok(Json(SolveResponse { solution })),
        Err(e) => {
            error!("❌ 解题失败: {}", e);
            Err(ApiError::Solve(e.to_string()))
        }
    }
}

/// `POST /api/hint?question=...`，表单字段 `image`
pub async fn hint(
    State(state): State<AppState>,
    Query(query): Query<QuestionQuery>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<Json<HintResponse>> {
    let question = Question::verbatim(query.require()?);
    let image = read_image(multipart).await?;

    let hint = state.tutor.hint(&question, &image).await?;
    Ok(Json(HintResponse { hint }))
}

/// `POST /api/correct?question=...`，表单字段 `image`
pub async fn correct(
    State(state): State<AppState>,
    Query(query): Query<QuestionQuery>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<Json<CorrectionResponse>> {
    let question = Question::verbatim(query.require()?);
    let image = read_image(multipart).await?;

    let correction = state.tutor.correct(&question, &image).await?;
    Ok(Json(CorrectionResponse { correction }))
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(ErrorDetail::new("Not Found")))
}
