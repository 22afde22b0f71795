use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web::Bytes};
use tracing::{debug, info};

use super::SubmissionService;
use crate::models::{
    ApiResponse, ErrorCode,
    submissions::{SUBMISSION_NOT_FOUND, requests::GradeSubmissionRequest},
};
use crate::services::{current_user, storage_failure, validation_failed};

// 不存在和不属于调用者返回同一个响应
fn submission_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::<()>::error_empty(
        ErrorCode::SubmissionNotFound,
        SUBMISSION_NOT_FOUND,
    ))
}

fn parse_grade_body(body: &[u8]) -> Result<GradeSubmissionRequest, HttpResponse> {
    serde_json::from_slice(body).map_err(|e| {
        debug!("Rejected malformed grade body: {}", e);
        HttpResponse::BadRequest().json(ApiResponse::<()>::error_empty(
            ErrorCode::BadRequest,
            &format!("Invalid JSON body: {e}"),
        ))
    })
}

pub async fn grade_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    submission_id: i64,
    body: Bytes,
) -> ActixResult<HttpResponse> {
    let teacher = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    let storage = service.get_storage(request)?;

    let current = match storage.get_owned_submission(teacher.id, submission_id).await {
        Ok(Some(detail)) => detail,
        Ok(None) => return Ok(submission_not_found()),
        Err(e) => return Ok(storage_failure("Loading submission", &e)),
    };

    // 请求体在归属检查之后才解析，别人的提交一律 404
    let req = match parse_grade_body(&body) {
        Ok(req) => req,
        Err(resp) => return Ok(resp),
    };

    if let Err(errors) = req.validate(current.homework.max_score) {
        return Ok(validation_failed(errors));
    }

    match storage
        .grade_owned_submission(teacher.id, submission_id, req)
        .await
    {
        Ok(Some(detail)) => {
            info!(
                "Teacher {} graded submission {} (score: {:?})",
                teacher.id, submission_id, detail.submission.score
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(detail, "Submission graded")))
        }
        // 两次查询之间作业被删除等情况
        Ok(None) => Ok(submission_not_found()),
        Err(e) => Ok(storage_failure("Grading submission", &e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_grade_body() {
        let req = parse_grade_body(br#"{"score": 90, "checked_by": 7}"#).unwrap();
        assert_eq!(req.score, Some(90.0));
        assert!(req.feedback.is_none());
    }

    #[test]
    fn test_malformed_grade_body_is_bad_request() {
        let bodies: [&[u8]; 3] = [br#"{"score": "ninety"}"#, b"", b"{"];
        for body in bodies {
            let resp = parse_grade_body(body).unwrap_err();
            assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
        }
    }
}
