pub mod attendance;
pub mod homeworks;
pub mod lesson_videos;
pub mod submissions;
pub mod system;

pub use attendance::AttendanceService;
pub use homeworks::HomeworkService;
pub use lesson_videos::LessonVideoService;
pub use submissions::SubmissionService;
pub use system::SystemService;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, error::ErrorInternalServerError};
use std::sync::Arc;
use tracing::error;

use crate::errors::GatewayError;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode, FieldError, users::entities::User};
use crate::storage::Storage;

// 从 app_data 中取出存储实例
pub(crate) fn storage_from_request(request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
    request
        .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
        .map(|data| data.get_ref().clone())
        .ok_or_else(|| {
            error!("Storage not found in app data");
            ErrorInternalServerError("Storage not configured")
        })
}

// 当前用户由 RequireJWT 写入；缺失说明路由没有挂认证中间件
pub(crate) fn current_user(request: &HttpRequest) -> Result<User, HttpResponse> {
    RequireJWT::extract_user_claims(request).ok_or_else(|| {
        HttpResponse::Unauthorized().json(ApiResponse::<()>::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        ))
    })
}

pub(crate) fn validation_failed(errors: Vec<FieldError>) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::validation_failed(errors))
}

// 存储错误只记录日志，响应中不暴露细节
pub(crate) fn storage_failure(action: &str, err: &GatewayError) -> HttpResponse {
    error!("{} failed: {}", action, err);
    HttpResponse::InternalServerError().json(ApiResponse::<()>::error_empty(
        ErrorCode::InternalServerError,
        "Internal server error",
    ))
}
