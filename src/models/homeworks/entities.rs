use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "homework.ts")]
pub struct Homework {
    // 唯一 ID
    pub id: i64,
    // 布置作业的教师 ID
    pub teacher_id: i64,
    // 关联的小组 ID（可选）
    pub group_id: Option<i64>,
    // 作业标题
    pub title: String,
    // 作业描述
    pub description: Option<String>,
    // 作业最高分数
    pub max_score: f64,
    // 作业截止时间
    pub deadline: Option<chrono::DateTime<chrono::Utc>>,
    // 作业创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 作业更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
