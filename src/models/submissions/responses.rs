use serde::Serialize;
use ts_rs::TS;

use super::entities::HomeworkSubmission;

/// 提交关联的作业信息
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "submission.ts")]
pub struct SubmissionHomeworkInfo {
    pub id: i64,
    pub title: String,
    pub group_id: Option<i64>,
    pub max_score: f64,
    pub deadline: Option<chrono::DateTime<chrono::Utc>>,
}

/// 提交者信息
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "submission.ts")]
pub struct SubmissionStudentInfo {
    pub id: i64,
    pub username: String,
    pub display_name: Option<String>,
}

/// 提交详情（作业与学生已预加载）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "submission.ts")]
pub struct SubmissionDetail {
    #[serde(flatten)]
    #[ts(flatten)]
    pub submission: HomeworkSubmission,
    pub homework: SubmissionHomeworkInfo,
    pub student: Option<SubmissionStudentInfo>,
}
