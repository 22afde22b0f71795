pub mod attendance;

pub mod homeworks;

pub mod lesson_videos;

pub mod submissions;

pub mod system;

use actix_web::web;

use crate::middlewares;
use crate::utils::{json_error_handler, query_error_handler};

pub use system::configure_system_routes;

/// 注册全部 API：请求解析错误处理器、健康检查与教师路由
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .configure(configure_system_routes)
        .configure(configure_teacher_routes);
}

/// 教师操作路由，统一挂在 `/api/v1/teacher` 下
///
/// 中间件按注册的逆序执行：先 RequireJWT 认证，再 RequireTeacher 授权。
pub fn configure_teacher_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/teacher")
            .wrap(middlewares::RequireTeacher)
            .wrap(middlewares::RequireJWT)
            .configure(attendance::configure_attendance_routes)
            .configure(homeworks::configure_homeworks_routes)
            .configure(submissions::configure_submissions_routes)
            .configure(lesson_videos::configure_lesson_videos_routes),
    );
}
