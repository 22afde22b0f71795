use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::LessonVideoService;
use crate::models::{ApiResponse, lesson_videos::requests::LessonVideoListParams};
use crate::services::{current_user, storage_failure};

pub async fn list_lesson_videos(
    service: &LessonVideoService,
    request: &HttpRequest,
    query: LessonVideoListParams,
) -> ActixResult<HttpResponse> {
    let teacher = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    let storage = service.get_storage(request)?;

    match storage
        .list_owned_lesson_videos(teacher.id, query.group_id)
        .await
    {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(items, "OK"))),
        Err(e) => Ok(storage_failure("Listing lesson videos", &e)),
    }
}
