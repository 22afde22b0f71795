use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::LessonVideoService;
use crate::models::{ApiResponse, lesson_videos::requests::CreateLessonVideoRequest};
use crate::services::{current_user, storage_failure, validation_failed};

pub async fn create_lesson_video(
    service: &LessonVideoService,
    request: &HttpRequest,
    req: CreateLessonVideoRequest,
) -> ActixResult<HttpResponse> {
    let teacher = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    if let Err(errors) = req.validate() {
        return Ok(validation_failed(errors));
    }

    let storage = service.get_storage(request)?;

    match storage.create_lesson_video(teacher.id, req).await {
        Ok(video) => {
            info!("Teacher {} created lesson video {}", teacher.id, video.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(video, "Lesson video created")))
        }
        Err(e) => Ok(storage_failure("Creating lesson video", &e)),
    }
}
