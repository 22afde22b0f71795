//! 数据模型定义
//!
//! - `entities`: 业务实体（存储层返回）
//! - `requests`: 请求体与查询参数
//! - `responses`: 响应结构

pub mod attendance;
pub mod common;
pub mod homeworks;
pub mod lesson_videos;
pub mod submissions;
pub mod system;
pub mod users;

pub use common::{ApiResponse, FieldError};

/// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// 业务错误代码，随 `ApiResponse.code` 返回
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误
    BadRequest = 1000,
    ValidationFailed = 1001,
    Unauthorized = 1002,
    Forbidden = 1003,
    NotFound = 1004,
    InternalServerError = 1005,

    // 提交
    SubmissionNotFound = 2002,
}
