use crate::models::common::{FieldError, empty_string_as_none_i64};
use crate::utils::validate::{validate_positive_id, validate_title};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use ts_rs::TS;

pub const DEFAULT_MAX_SCORE: f64 = 100.0;

/// 创建作业请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "homework.ts")]
pub struct CreateHomeworkRequest {
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    pub group_id: Option<i64>,
    pub max_score: Option<f64>,
    pub deadline: Option<DateTime<Utc>>, // ISO 8601 格式，如 "2026-01-24T12:00:00Z"
}

impl CreateHomeworkRequest {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if let Err(msg) = validate_title(&self.title) {
            errors.push(FieldError::new("title", msg));
        }
        if let Some(group_id) = self.group_id
            && let Err(msg) = validate_positive_id(group_id)
        {
            errors.push(FieldError::new("group_id", msg));
        }
        if let Some(max_score) = self.max_score
            && !(max_score.is_finite() && max_score > 0.0)
        {
            errors.push(FieldError::new("max_score", "Must be greater than 0"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// 作业列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "homework.ts")]
pub struct HomeworkListParams {
    #[serde(default, deserialize_with = "empty_string_as_none_i64")]
    pub group_id: Option<i64>,
}
