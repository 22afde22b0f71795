use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::HashSet;
use tracing::info;

use super::AttendanceService;
use crate::config::AppConfig;
use crate::models::{
    ApiResponse, FieldError,
    attendance::requests::{CreateAttendanceRequest, NewAttendance},
};
use crate::services::{current_user, storage_failure, validation_failed};

pub async fn create_attendance(
    service: &AttendanceService,
    request: &HttpRequest,
    req: CreateAttendanceRequest,
) -> ActixResult<HttpResponse> {
    let teacher = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    let is_batch = matches!(req, CreateAttendanceRequest::Batch(_));
    let records = match req.validate(AppConfig::get().app.max_batch_size) {
        Ok(records) => records,
        Err(errors) => return Ok(validation_failed(errors)),
    };

    let storage = service.get_storage(request)?;

    // 所有学生必须存在，否则整批拒绝
    let mut student_ids: Vec<i64> = records.iter().map(|r| r.student_id).collect();
    student_ids.sort_unstable();
    student_ids.dedup();
    let known: HashSet<i64> = match storage.get_users_by_ids(&student_ids).await {
        Ok(users) => users.into_iter().map(|u| u.id).collect(),
        Err(e) => return Ok(storage_failure("Loading attendance students", &e)),
    };
    let missing = unknown_students(&records, &known, is_batch);
    if !missing.is_empty() {
        return Ok(validation_failed(missing));
    }

    match storage.create_attendances(teacher.id, records).await {
        Ok(created) => {
            info!(
                "Teacher {} recorded {} attendance entries",
                teacher.id,
                created.len()
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(created, "Attendance recorded")))
        }
        Err(e) => Ok(storage_failure("Creating attendance", &e)),
    }
}

fn unknown_students(
    records: &[NewAttendance],
    known: &HashSet<i64>,
    is_batch: bool,
) -> Vec<FieldError> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| !known.contains(&record.student_id))
        .map(|(i, record)| {
            let field = if is_batch {
                format!("[{i}].student_id")
            } else {
                "student_id".to_string()
            };
            FieldError::new(field, format!("Student {} does not exist", record.student_id))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::attendance::entities::AttendanceStatus;
    use chrono::NaiveDate;

    fn record(student_id: i64) -> NewAttendance {
        NewAttendance {
            student_id,
            group_id: 7,
            date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            status: AttendanceStatus::Present,
            note: None,
        }
    }

    #[test]
    fn test_unknown_students_are_indexed_in_batches() {
        let known: HashSet<i64> = [1, 3].into_iter().collect();
        let errors = unknown_students(&[record(1), record(2), record(3), record(9)], &known, true);
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["[1].student_id", "[3].student_id"]);
    }

    #[test]
    fn test_unknown_student_single() {
        let errors = unknown_students(&[record(2)], &HashSet::new(), false);
        assert_eq!(errors[0].field, "student_id");
    }
}
