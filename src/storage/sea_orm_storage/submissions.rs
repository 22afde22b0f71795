//! 提交存储操作
//!
//! 提交本身没有教师字段，归属通过 `homeworks.teacher_id` 间接判断。

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::homework_submissions::{
    ActiveModel, Column, Entity as HomeworkSubmissions, Model as SubmissionModel,
};
use crate::entity::homeworks::{
    Column as HomeworkColumn, Entity as Homeworks, Model as HomeworkModel,
};
use crate::errors::{GatewayError, Result};
use crate::models::submissions::{
    requests::{GradeSubmissionRequest, SubmissionListParams},
    responses::{SubmissionDetail, SubmissionStudentInfo},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, SelectTwo, Set,
};

impl SeaOrmStorage {
    /// 带归属条件的提交查询：提交 JOIN 作业，并限定作业属于调用者
    fn owned_submissions(teacher_id: i64) -> SelectTwo<HomeworkSubmissions, Homeworks> {
        HomeworkSubmissions::find()
            .find_also_related(Homeworks)
            .filter(HomeworkColumn::TeacherId.eq(teacher_id))
    }

    /// 列出调用者作业下的提交
    pub async fn list_owned_submissions_impl(
        &self,
        teacher_id: i64,
        query: SubmissionListParams,
    ) -> Result<Vec<SubmissionDetail>> {
        let mut select = Self::owned_submissions(teacher_id);

        if let Some(homework_id) = query.homework_id {
            select = select.filter(Column::HomeworkId.eq(homework_id));
        }
        // 小组条件作用在作业上
        if let Some(group_id) = query.group_id {
            select = select.filter(HomeworkColumn::GroupId.eq(group_id));
        }

        let rows = select
            .order_by_desc(Column::SubmittedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| GatewayError::database_operation(format!("查询提交列表失败: {e}")))?;

        self.build_submission_details(rows).await
    }

    /// 获取调用者作业下的单个提交
    pub async fn get_owned_submission_impl(
        &self,
        teacher_id: i64,
        submission_id: i64,
    ) -> Result<Option<SubmissionDetail>> {
        let row = Self::owned_submissions(teacher_id)
            .filter(Column::Id.eq(submission_id))
            .one(&self.db)
            .await
            .map_err(|e| GatewayError::database_operation(format!("查询提交失败: {e}")))?;

        match row {
            Some(row) => Ok(self.build_submission_details(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    /// 批改提交
    ///
    /// 只更新请求中给出的字段；`checked_by` 与 `checked_at` 每次都会被覆盖。
    pub async fn grade_owned_submission_impl(
        &self,
        teacher_id: i64,
        submission_id: i64,
        req: GradeSubmissionRequest,
    ) -> Result<Option<SubmissionDetail>> {
        let row = Self::owned_submissions(teacher_id)
            .filter(Column::Id.eq(submission_id))
            .one(&self.db)
            .await
            .map_err(|e| GatewayError::database_operation(format!("查询提交失败: {e}")))?;

        let Some((submission, homework)) = row else {
            return Ok(None);
        };

        let mut model: ActiveModel = submission.into();
        if let Some(score) = req.score {
            model.score = Set(Some(score));
        }
        if let Some(feedback) = req.feedback {
            model.feedback = Set(Some(feedback));
        }
        model.checked_by = Set(Some(teacher_id));
        model.checked_at = Set(Some(chrono::Utc::now().timestamp()));

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| GatewayError::database_operation(format!("批改提交失败: {e}")))?;

        Ok(self
            .build_submission_details(vec![(updated, homework)])
            .await?
            .pop())
    }

    /// 组装提交详情，学生信息一次批量查询
    async fn build_submission_details(
        &self,
        rows: Vec<(SubmissionModel, Option<HomeworkModel>)>,
    ) -> Result<Vec<SubmissionDetail>> {
        let mut student_ids: Vec<i64> = rows.iter().map(|(s, _)| s.student_id).collect();
        student_ids.sort_unstable();
        student_ids.dedup();

        let student_map: HashMap<i64, SubmissionStudentInfo> = self
            .get_users_by_ids_impl(&student_ids)
            .await?
            .into_iter()
            .map(|user| {
                (
                    user.id,
                    SubmissionStudentInfo {
                        id: user.id,
                        username: user.username,
                        display_name: user.display_name,
                    },
                )
            })
            .collect();

        rows.into_iter()
            .map(|(submission, homework)| {
                // 归属条件过滤后作业一定存在
                let homework = homework.ok_or_else(|| {
                    GatewayError::database_operation(format!(
                        "提交 {} 缺少关联作业",
                        submission.id
                    ))
                })?;
                let student = student_map.get(&submission.student_id).cloned();

                Ok(SubmissionDetail {
                    homework: homework.to_submission_homework_info(),
                    student,
                    submission: submission.into_submission(),
                })
            })
            .collect()
    }
}
