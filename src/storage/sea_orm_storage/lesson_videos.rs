//! 课程视频存储操作

use super::SeaOrmStorage;
use crate::entity::lesson_videos::{ActiveModel, Column, Entity as LessonVideos};
use crate::errors::{GatewayError, Result};
use crate::models::lesson_videos::{entities::LessonVideo, requests::CreateLessonVideoRequest};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn create_lesson_video_impl(
        &self,
        teacher_id: i64,
        req: CreateLessonVideoRequest,
    ) -> Result<LessonVideo> {
        let model = ActiveModel {
            teacher_id: Set(teacher_id),
            group_id: Set(req.group_id),
            title: Set(req.title.trim().to_string()),
            description: Set(req.description),
            video_url: Set(req.video_url.trim().to_string()),
            duration_seconds: Set(req.duration_seconds),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| GatewayError::database_operation(format!("创建课程视频失败: {e}")))?;

        Ok(result.into_lesson_video())
    }

    pub async fn list_owned_lesson_videos_impl(
        &self,
        teacher_id: i64,
        group_id: Option<i64>,
    ) -> Result<Vec<LessonVideo>> {
        let mut select = LessonVideos::find().filter(Column::TeacherId.eq(teacher_id));

        if let Some(group_id) = group_id {
            select = select.filter(Column::GroupId.eq(group_id));
        }

        let result = select
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| GatewayError::database_operation(format!("查询课程视频列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_lesson_video()).collect())
    }
}
