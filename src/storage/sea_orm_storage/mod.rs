//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod attendance;
mod homeworks;
mod lesson_videos;
mod submissions;
mod users;

use crate::config::AppConfig;
use crate::errors::{GatewayError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| GatewayError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// 使用已建立的连接创建存储实例（不运行迁移）
    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| GatewayError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| GatewayError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| GatewayError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(GatewayError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_users_by_ids(&self, ids: &[i64]) -> Result<Vec<User>> {
        self.get_users_by_ids_impl(ids).await
    }

    // 考勤模块
    async fn create_attendances(
        &self,
        teacher_id: i64,
        records: Vec<NewAttendance>,
    ) -> Result<Vec<Attendance>> {
        self.create_attendances_impl(teacher_id, records).await
    }

    async fn list_owned_attendances(
        &self,
        teacher_id: i64,
        query: AttendanceListQuery,
    ) -> Result<Vec<Attendance>> {
        self.list_owned_attendances_impl(teacher_id, query).await
    }

    // 作业模块
    async fn create_homework(
        &self,
        teacher_id: i64,
        req: CreateHomeworkRequest,
    ) -> Result<Homework> {
        self.create_homework_impl(teacher_id, req).await
    }

    async fn list_owned_homeworks(
        &self,
        teacher_id: i64,
        group_id: Option<i64>,
    ) -> Result<Vec<Homework>> {
        self.list_owned_homeworks_impl(teacher_id, group_id).await
    }

    // 提交模块
    async fn list_owned_submissions(
        &self,
        teacher_id: i64,
        query: SubmissionListParams,
    ) -> Result<Vec<SubmissionDetail>> {
        self.list_owned_submissions_impl(teacher_id, query).await
    }

    async fn get_owned_submission(
        &self,
        teacher_id: i64,
        submission_id: i64,
    ) -> Result<Option<SubmissionDetail>> {
        self.get_owned_submission_impl(teacher_id, submission_id)
            .await
    }

    async fn grade_owned_submission(
        &self,
        teacher_id: i64,
        submission_id: i64,
        req: GradeSubmissionRequest,
    ) -> Result<Option<SubmissionDetail>> {
        self.grade_owned_submission_impl(teacher_id, submission_id, req)
            .await
    }

    // 课程视频模块
    async fn create_lesson_video(
        &self,
        teacher_id: i64,
        req: CreateLessonVideoRequest,
    ) -> Result<LessonVideo> {
        self.create_lesson_video_impl(teacher_id, req).await
    }

    async fn list_owned_lesson_videos(
        &self,
        teacher_id: i64,
        group_id: Option<i64>,
    ) -> Result<Vec<LessonVideo>> {
        self.list_owned_lesson_videos_impl(teacher_id, group_id)
            .await
    }
}
