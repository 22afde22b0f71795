use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::lesson_videos::requests::{CreateLessonVideoRequest, LessonVideoListParams};
use crate::services::LessonVideoService;

static LESSON_VIDEO_SERVICE: Lazy<LessonVideoService> = Lazy::new(LessonVideoService::new_lazy);

pub async fn list_lesson_videos(
    req: HttpRequest,
    query: web::Query<LessonVideoListParams>,
) -> ActixResult<HttpResponse> {
    LESSON_VIDEO_SERVICE
        .list_lesson_videos(&req, query.into_inner())
        .await
}

pub async fn create_lesson_video(
    req: HttpRequest,
    body: web::Json<CreateLessonVideoRequest>,
) -> ActixResult<HttpResponse> {
    LESSON_VIDEO_SERVICE
        .create_lesson_video(&req, body.into_inner())
        .await
}

// 配置路由
pub fn configure_lesson_videos_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/lesson-videos")
            .route(web::get().to(list_lesson_videos))
            .route(web::post().to(create_lesson_video)),
    );
}
