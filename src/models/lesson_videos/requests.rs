use crate::models::common::{FieldError, empty_string_as_none_i64};
use crate::utils::validate::{validate_http_url, validate_positive_id, validate_title};
use serde::Deserialize;
use ts_rs::TS;

/// 创建课程视频请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "lesson_video.ts")]
pub struct CreateLessonVideoRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub video_url: String,
    pub description: Option<String>,
    pub group_id: Option<i64>,
    pub duration_seconds: Option<i32>,
}

impl CreateLessonVideoRequest {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if let Err(msg) = validate_title(&self.title) {
            errors.push(FieldError::new("title", msg));
        }
        if let Err(msg) = validate_http_url(self.video_url.trim()) {
            errors.push(FieldError::new("video_url", msg));
        }
        if let Some(group_id) = self.group_id
            && let Err(msg) = validate_positive_id(group_id)
        {
            errors.push(FieldError::new("group_id", msg));
        }
        if let Some(duration) = self.duration_seconds
            && duration <= 0
        {
            errors.push(FieldError::new("duration_seconds", "Must be greater than 0"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// 课程视频列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "lesson_video.ts")]
pub struct LessonVideoListParams {
    #[serde(default, deserialize_with = "empty_string_as_none_i64")]
    pub group_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_video() {
        let req: CreateLessonVideoRequest = serde_json::from_str(
            r#"{"title": "Lesson 1", "video_url": "https://videos.example.com/1.mp4", "duration_seconds": 600}"#,
        )
        .unwrap();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_missing_url_and_title() {
        let req: CreateLessonVideoRequest = serde_json::from_str("{}").unwrap();
        let fields: Vec<String> = req
            .validate()
            .unwrap_err()
            .into_iter()
            .map(|e| e.field)
            .collect();
        assert_eq!(fields, vec!["title", "video_url"]);
    }

    #[test]
    fn test_non_positive_duration() {
        let req: CreateLessonVideoRequest = serde_json::from_str(
            r#"{"title": "Lesson 1", "video_url": "https://videos.example.com/1.mp4", "duration_seconds": 0}"#,
        )
        .unwrap();
        assert_eq!(req.validate().unwrap_err()[0].field, "duration_seconds");
    }
}
