use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AttendanceService;
use crate::models::{ApiResponse, attendance::requests::AttendanceListParams};
use crate::services::{current_user, storage_failure, validation_failed};

pub async fn list_attendance(
    service: &AttendanceService,
    request: &HttpRequest,
    params: AttendanceListParams,
) -> ActixResult<HttpResponse> {
    let teacher = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    let query = match params.into_query() {
        Ok(query) => query,
        Err(errors) => return Ok(validation_failed(errors)),
    };

    let storage = service.get_storage(request)?;

    match storage.list_owned_attendances(teacher.id, query).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(items, "OK"))),
        Err(e) => Ok(storage_failure("Listing attendance", &e)),
    }
}
