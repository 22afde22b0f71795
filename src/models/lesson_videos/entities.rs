use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "lesson_video.ts")]
pub struct LessonVideo {
    pub id: i64,
    pub teacher_id: i64,
    pub group_id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub video_url: String,
    pub duration_seconds: Option<i32>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
