use std::sync::Arc;

use crate::models::{
    attendance::{
        entities::Attendance,
        requests::{AttendanceListQuery, NewAttendance},
    },
    homeworks::{entities::Homework, requests::CreateHomeworkRequest},
    lesson_videos::{entities::LessonVideo, requests::CreateLessonVideoRequest},
    submissions::{
        requests::{GradeSubmissionRequest, SubmissionListParams},
        responses::SubmissionDetail,
    },
    users::{entities::User, requests::CreateUserRequest},
};

use crate::errors::Result;

pub mod sea_orm_storage;

/// 存储接口
///
/// 所有 `*_owned_*` 方法都以调用者 `teacher_id` 为参数，归属条件在查询构造时注入，
/// 不信任请求中携带的任何归属字段。
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（初始化数据与测试使用）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 批量获取用户信息
    async fn get_users_by_ids(&self, ids: &[i64]) -> Result<Vec<User>>;

    /// 考勤方法
    // 在同一事务中写入全部考勤记录，返回顺序与输入一致
    async fn create_attendances(
        &self,
        teacher_id: i64,
        records: Vec<NewAttendance>,
    ) -> Result<Vec<Attendance>>;
    async fn list_owned_attendances(
        &self,
        teacher_id: i64,
        query: AttendanceListQuery,
    ) -> Result<Vec<Attendance>>;

    /// 作业方法
    async fn create_homework(
        &self,
        teacher_id: i64,
        req: CreateHomeworkRequest,
    ) -> Result<Homework>;
    async fn list_owned_homeworks(
        &self,
        teacher_id: i64,
        group_id: Option<i64>,
    ) -> Result<Vec<Homework>>;

    /// 提交与批改方法
    async fn list_owned_submissions(
        &self,
        teacher_id: i64,
        query: SubmissionListParams,
    ) -> Result<Vec<SubmissionDetail>>;
    // 不存在与不属于调用者同样返回 None
    async fn get_owned_submission(
        &self,
        teacher_id: i64,
        submission_id: i64,
    ) -> Result<Option<SubmissionDetail>>;
    // 部分更新评分字段，并写入批改人与批改时间
    async fn grade_owned_submission(
        &self,
        teacher_id: i64,
        submission_id: i64,
        req: GradeSubmissionRequest,
    ) -> Result<Option<SubmissionDetail>>;

    /// 课程视频方法
    async fn create_lesson_video(
        &self,
        teacher_id: i64,
        req: CreateLessonVideoRequest,
    ) -> Result<LessonVideo>;
    async fn list_owned_lesson_videos(
        &self,
        teacher_id: i64,
        group_id: Option<i64>,
    ) -> Result<Vec<LessonVideo>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
