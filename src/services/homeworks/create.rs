use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::HomeworkService;
use crate::models::{ApiResponse, homeworks::requests::CreateHomeworkRequest};
use crate::services::{current_user, storage_failure, validation_failed};

pub async fn create_homework(
    service: &HomeworkService,
    request: &HttpRequest,
    req: CreateHomeworkRequest,
) -> ActixResult<HttpResponse> {
    let teacher = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    if let Err(errors) = req.validate() {
        return Ok(validation_failed(errors));
    }

    let storage = service.get_storage(request)?;

    match storage.create_homework(teacher.id, req).await {
        Ok(homework) => {
            info!("Teacher {} created homework {}", teacher.id, homework.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(homework, "Homework created")))
        }
        Err(e) => Ok(storage_failure("Creating homework", &e)),
    }
}
