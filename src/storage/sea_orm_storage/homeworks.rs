//! 作业存储操作

use super::SeaOrmStorage;
use crate::entity::homeworks::{ActiveModel, Column, Entity as Homeworks};
use crate::errors::{GatewayError, Result};
use crate::models::homeworks::{
    entities::Homework,
    requests::{CreateHomeworkRequest, DEFAULT_MAX_SCORE},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建作业
    pub async fn create_homework_impl(
        &self,
        teacher_id: i64,
        req: CreateHomeworkRequest,
    ) -> Result<Homework> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            teacher_id: Set(teacher_id),
            group_id: Set(req.group_id),
            title: Set(req.title.trim().to_string()),
            description: Set(req.description),
            max_score: Set(req.max_score.unwrap_or(DEFAULT_MAX_SCORE)),
            deadline: Set(req.deadline.map(|dt| dt.timestamp())),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| GatewayError::database_operation(format!("创建作业失败: {e}")))?;

        Ok(result.into_homework())
    }

    /// 列出调用者的作业
    pub async fn list_owned_homeworks_impl(
        &self,
        teacher_id: i64,
        group_id: Option<i64>,
    ) -> Result<Vec<Homework>> {
        let mut select = Homeworks::find().filter(Column::TeacherId.eq(teacher_id));

        // 小组筛选
        if let Some(group_id) = group_id {
            select = select.filter(Column::GroupId.eq(group_id));
        }

        let result = select
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| GatewayError::database_operation(format!("查询作业列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_homework()).collect())
    }
}
