//! 接口响应体
//!
//! 上游候选没有文本时对应字段为 `null`。

use serde::{Deserialize, Serialize};

/// `POST /api/solve`
#[derive(Debug, Serialize, Deserialize)]
pub struct SolveResponse {
    pub solution: Option<String>,
}

/// `POST /api/hint`
#[derive(Debug, Serialize, Deserialize)]
pub struct HintResponse {
    pub hint: Option<String>,
}

/// `POST /api/correct`
#[derive(Debug, Serialize, Deserialize)]
pub struct CorrectionResponse {
    pub correction: Option<String>,
}
