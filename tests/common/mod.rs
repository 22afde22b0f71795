#![allow(dead_code)]

use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, Set};
use serde_json::Value;

use teacher_gateway::cache::{ObjectCache, object_cache::moka::MokaCacheWrapper};
use teacher_gateway::entity::{homework_submissions, homeworks};
use teacher_gateway::models::users::{
    entities::{User, UserRole},
    requests::CreateUserRequest,
};
use teacher_gateway::storage::{Storage, sea_orm_storage::SeaOrmStorage};
use teacher_gateway::utils::jwt::JwtUtils;

pub struct TestContext {
    pub db: DatabaseConnection,
    pub storage: Arc<dyn Storage>,
    pub cache: Arc<dyn ObjectCache>,
}

pub async fn setup() -> TestContext {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory db");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    let storage: Arc<dyn Storage> = Arc::new(SeaOrmStorage::from_connection(db.clone()));
    let cache: Arc<dyn ObjectCache> = Arc::new(MokaCacheWrapper::with_settings(1_000, 60));

    TestContext { db, storage, cache }
}

/// 使用与生产相同的路由与错误处理器构建测试应用
macro_rules! init_app {
    ($ctx:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($ctx.storage.clone()))
                .app_data(actix_web::web::Data::new($ctx.cache.clone()))
                .configure(teacher_gateway::routes::configure_api),
        )
        .await
    };
}

impl TestContext {
    pub async fn user(&self, username: &str, role: UserRole, is_teacher: bool) -> User {
        self.storage
            .create_user(CreateUserRequest {
                username: username.to_string(),
                display_name: Some(format!("{username} display")),
                role,
                is_teacher,
            })
            .await
            .expect("Failed to create user")
    }

    pub async fn teacher(&self, username: &str) -> User {
        self.user(username, UserRole::Teacher, false).await
    }

    pub async fn student(&self, username: &str) -> User {
        self.user(username, UserRole::Student, false).await
    }

    /// 直接写库创建作业，`created_at` 可控
    pub async fn homework(
        &self,
        teacher_id: i64,
        group_id: Option<i64>,
        max_score: f64,
        created_at: i64,
    ) -> homeworks::Model {
        homeworks::ActiveModel {
            teacher_id: Set(teacher_id),
            group_id: Set(group_id),
            title: Set(format!("Homework by {teacher_id}")),
            description: Set(None),
            max_score: Set(max_score),
            deadline: Set(None),
            created_at: Set(created_at),
            updated_at: Set(created_at),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .expect("Failed to insert homework")
    }

    /// 学生提交由其他服务写入，这里直接写库
    pub async fn submission(
        &self,
        homework_id: i64,
        student_id: i64,
        submitted_at: i64,
    ) -> homework_submissions::Model {
        homework_submissions::ActiveModel {
            homework_id: Set(homework_id),
            student_id: Set(student_id),
            content: Set("my answer".to_string()),
            attachment_url: Set(None),
            submitted_at: Set(submitted_at),
            score: Set(None),
            feedback: Set(None),
            checked_by: Set(None),
            checked_at: Set(None),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .expect("Failed to insert submission")
    }
}

pub fn token_for(user: &User) -> String {
    JwtUtils::generate_access_token(user.id, &user.role.to_string())
        .expect("Failed to sign token")
}

pub fn bearer(user: &User) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token_for(user)))
}

/// 取出响应 `data` 中的列表
pub fn data_list(body: &Value) -> &Vec<Value> {
    body["data"].as_array().expect("data should be a list")
}
