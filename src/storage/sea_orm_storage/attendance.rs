//! 考勤存储操作

use super::SeaOrmStorage;
use crate::entity::attendances::{ActiveModel, Column, Entity as Attendances};
use crate::errors::{GatewayError, Result};
use crate::models::attendance::{
    entities::Attendance,
    requests::{AttendanceListQuery, NewAttendance},
};
use crate::utils::validate::DATE_FORMAT;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 批量创建考勤记录，任一条失败则整体回滚
    pub async fn create_attendances_impl(
        &self,
        teacher_id: i64,
        records: Vec<NewAttendance>,
    ) -> Result<Vec<Attendance>> {
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| GatewayError::database_operation(format!("开启事务失败: {e}")))?;

        let mut created = Vec::with_capacity(records.len());
        for record in records {
            let model = ActiveModel {
                teacher_id: Set(teacher_id),
                student_id: Set(record.student_id),
                group_id: Set(record.group_id),
                date: Set(record.date.format(DATE_FORMAT).to_string()),
                status: Set(record.status.to_string()),
                note: Set(record.note),
                created_at: Set(now),
                ..Default::default()
            };

            // 出错时 txn 被 drop，自动回滚
            let result = model
                .insert(&txn)
                .await
                .map_err(|e| GatewayError::database_operation(format!("创建考勤记录失败: {e}")))?;
            created.push(result.into_attendance());
        }

        txn.commit()
            .await
            .map_err(|e| GatewayError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(created)
    }

    /// 列出调用者的考勤记录
    pub async fn list_owned_attendances_impl(
        &self,
        teacher_id: i64,
        query: AttendanceListQuery,
    ) -> Result<Vec<Attendance>> {
        let mut select = Attendances::find().filter(Column::TeacherId.eq(teacher_id));

        if let Some(group_id) = query.group_id {
            select = select.filter(Column::GroupId.eq(group_id));
        }
        if let Some(date) = query.date {
            select = select.filter(Column::Date.eq(date.format(DATE_FORMAT).to_string()));
        }

        let result = select
            .order_by_desc(Column::Date)
            .order_by_asc(Column::StudentId)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| GatewayError::database_operation(format!("查询考勤列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_attendance()).collect())
    }
}
