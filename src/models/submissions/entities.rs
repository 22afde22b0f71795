use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "submission.ts")]
pub struct HomeworkSubmission {
    pub id: i64,
    pub homework_id: i64,
    pub student_id: i64,
    pub content: String,
    pub attachment_url: Option<String>,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
    // 批改信息，未批改时均为空
    pub score: Option<f64>,
    pub feedback: Option<String>,
    pub checked_by: Option<i64>,
    pub checked_at: Option<chrono::DateTime<chrono::Utc>>,
}
