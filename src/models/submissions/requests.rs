use crate::models::common::{FieldError, empty_string_as_none_i64};
use crate::utils::validate::{FEEDBACK_MAX_CHARS, validate_max_chars};
use serde::Deserialize;
use ts_rs::TS;

/// 提交列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "submission.ts")]
pub struct SubmissionListParams {
    #[serde(default, deserialize_with = "empty_string_as_none_i64")]
    pub homework_id: Option<i64>,
    // 按作业所属小组筛选
    #[serde(default, deserialize_with = "empty_string_as_none_i64")]
    pub group_id: Option<i64>,
}

/// 批改请求，字段均可选（部分更新）
///
/// 请求体中的 `checked_by` / `checked_at` 会被忽略，批改人和批改时间由服务端写入。
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "submission.ts")]
pub struct GradeSubmissionRequest {
    pub score: Option<f64>,
    pub feedback: Option<String>,
}

impl GradeSubmissionRequest {
    pub fn validate(&self, max_score: f64) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if let Some(score) = self.score
            && !(score.is_finite() && (0.0..=max_score).contains(&score))
        {
            errors.push(FieldError::new(
                "score",
                format!("Score must be between 0 and {max_score}"),
            ));
        }
        if let Some(feedback) = &self.feedback
            && let Err(msg) = validate_max_chars(feedback, FEEDBACK_MAX_CHARS)
        {
            errors.push(FieldError::new("feedback", msg));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_payload() {
        let req: GradeSubmissionRequest = serde_json::from_str(r#"{"score": 90}"#).unwrap();
        assert_eq!(req.score, Some(90.0));
        assert!(req.feedback.is_none());
        assert!(req.validate(100.0).is_ok());
    }

    #[test]
    fn test_checker_fields_are_not_part_of_request() {
        let req: GradeSubmissionRequest = serde_json::from_str(
            r#"{"score": 80, "checked_by": 999, "checked_at": "2000-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(req.score, Some(80.0));
    }

    #[test]
    fn test_score_bounds() {
        let over = GradeSubmissionRequest {
            score: Some(101.0),
            feedback: None,
        };
        assert_eq!(over.validate(100.0).unwrap_err()[0].field, "score");

        let negative = GradeSubmissionRequest {
            score: Some(-1.0),
            feedback: None,
        };
        assert!(negative.validate(100.0).is_err());

        let edge = GradeSubmissionRequest {
            score: Some(100.0),
            feedback: None,
        };
        assert!(edge.validate(100.0).is_ok());
    }

    #[test]
    fn test_feedback_length() {
        let req = GradeSubmissionRequest {
            score: None,
            feedback: Some("x".repeat(FEEDBACK_MAX_CHARS + 1)),
        };
        assert_eq!(req.validate(100.0).unwrap_err()[0].field, "feedback");
    }
}
