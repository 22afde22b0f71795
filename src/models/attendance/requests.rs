use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use ts_rs::TS;

use super::entities::AttendanceStatus;
use crate::models::common::{FieldError, empty_string_as_none, empty_string_as_none_i64};
use crate::utils::validate::{NOTE_MAX_CHARS, parse_date, validate_max_chars, validate_positive_id};

/// 单条考勤记录（请求体中没有教师字段，教师始终取当前用户）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "attendance.ts")]
pub struct AttendanceEntry {
    pub student_id: i64,
    pub group_id: i64,
    pub date: String, // YYYY-MM-DD
    #[serde(default)]
    pub status: AttendanceStatus,
    pub note: Option<String>,
}

/// 创建考勤请求：单个对象或对象数组
#[derive(Debug, Clone)]
pub enum CreateAttendanceRequest {
    Single(AttendanceEntry),
    Batch(Vec<AttendanceEntry>),
}

impl<'de> Deserialize<'de> for CreateAttendanceRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;
        use serde_json::Value;

        let value = Value::deserialize(deserializer)?;
        match value {
            Value::Array(_) => serde_json::from_value(value)
                .map(CreateAttendanceRequest::Batch)
                .map_err(D::Error::custom),
            Value::Object(_) => serde_json::from_value(value)
                .map(CreateAttendanceRequest::Single)
                .map_err(D::Error::custom),
            _ => Err(D::Error::custom(
                "expected an attendance object or a list of attendance objects",
            )),
        }
    }
}

/// 通过校验的考勤记录，写库前由存储层补上教师
#[derive(Debug, Clone, PartialEq)]
pub struct NewAttendance {
    pub student_id: i64,
    pub group_id: i64,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub note: Option<String>,
}

impl AttendanceEntry {
    fn validate(self, prefix: &str, errors: &mut Vec<FieldError>) -> Option<NewAttendance> {
        let before = errors.len();

        if let Err(msg) = validate_positive_id(self.student_id) {
            errors.push(FieldError::new(format!("{prefix}student_id"), msg));
        }
        if let Err(msg) = validate_positive_id(self.group_id) {
            errors.push(FieldError::new(format!("{prefix}group_id"), msg));
        }
        let date = match parse_date(self.date.trim()) {
            Ok(date) => Some(date),
            Err(msg) => {
                errors.push(FieldError::new(format!("{prefix}date"), msg));
                None
            }
        };
        if let Some(note) = &self.note
            && let Err(msg) = validate_max_chars(note, NOTE_MAX_CHARS)
        {
            errors.push(FieldError::new(format!("{prefix}note"), msg));
        }

        if errors.len() != before {
            return None;
        }

        Some(NewAttendance {
            student_id: self.student_id,
            group_id: self.group_id,
            date: date?,
            status: self.status,
            note: self.note.filter(|n| !n.trim().is_empty()),
        })
    }
}

impl CreateAttendanceRequest {
    /// 校验全部条目；任一条目出错则整体拒绝
    pub fn validate(self, max_batch_size: usize) -> Result<Vec<NewAttendance>, Vec<FieldError>> {
        let mut errors = Vec::new();

        let records = match self {
            CreateAttendanceRequest::Single(entry) => {
                entry.validate("", &mut errors).into_iter().collect::<Vec<_>>()
            }
            CreateAttendanceRequest::Batch(entries) => {
                if entries.is_empty() {
                    return Err(vec![FieldError::new(
                        "non_field_errors",
                        "At least one attendance entry is required",
                    )]);
                }
                if entries.len() > max_batch_size {
                    return Err(vec![FieldError::new(
                        "non_field_errors",
                        format!("At most {max_batch_size} attendance entries are allowed per request"),
                    )]);
                }
                entries
                    .into_iter()
                    .enumerate()
                    .filter_map(|(i, entry)| entry.validate(&format!("[{i}]."), &mut errors))
                    .collect()
            }
        };

        if errors.is_empty() {
            Ok(records)
        } else {
            Err(errors)
        }
    }
}

/// 考勤列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "attendance.ts")]
pub struct AttendanceListParams {
    #[serde(default, deserialize_with = "empty_string_as_none_i64")]
    pub group_id: Option<i64>,
    // 精确匹配，不支持范围
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub date: Option<String>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone, Default)]
pub struct AttendanceListQuery {
    pub group_id: Option<i64>,
    pub date: Option<NaiveDate>,
}

impl AttendanceListParams {
    pub fn into_query(self) -> Result<AttendanceListQuery, Vec<FieldError>> {
        let date = match self.date {
            Some(raw) => Some(
                parse_date(raw.trim()).map_err(|msg| vec![FieldError::new("date", msg)])?,
            ),
            None => None,
        };

        Ok(AttendanceListQuery {
            group_id: self.group_id,
            date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_object_payload() {
        let req: CreateAttendanceRequest = serde_json::from_str(
            r#"{"student_id": 3, "group_id": 7, "date": "2025-03-14", "status": "late"}"#,
        )
        .unwrap();
        let records = req.validate(10).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].status, AttendanceStatus::Late);
        assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
    }

    #[test]
    fn test_batch_payload_keeps_order_and_defaults_status() {
        let req: CreateAttendanceRequest = serde_json::from_str(
            r#"[
                {"student_id": 1, "group_id": 7, "date": "2025-03-14"},
                {"student_id": 2, "group_id": 7, "date": "2025-03-14"},
                {"student_id": 3, "group_id": 7, "date": "2025-03-14"}
            ]"#,
        )
        .unwrap();
        let records = req.validate(10).unwrap();
        let students: Vec<i64> = records.iter().map(|r| r.student_id).collect();
        assert_eq!(students, vec![1, 2, 3]);
        assert!(records.iter().all(|r| r.status == AttendanceStatus::Present));
    }

    #[test]
    fn test_teacher_field_in_payload_is_ignored() {
        let req: CreateAttendanceRequest = serde_json::from_str(
            r#"{"student_id": 3, "group_id": 7, "date": "2025-03-14", "teacher": 99, "teacher_id": 99}"#,
        )
        .unwrap();
        assert!(req.validate(10).is_ok());
    }

    #[test]
    fn test_batch_errors_are_indexed() {
        let req: CreateAttendanceRequest = serde_json::from_str(
            r#"[
                {"student_id": 1, "group_id": 7, "date": "2025-03-14"},
                {"student_id": 0, "group_id": 7, "date": "2025-02-30"}
            ]"#,
        )
        .unwrap();
        let errors = req.validate(10).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["[1].student_id", "[1].date"]);
    }

    #[test]
    fn test_empty_and_oversized_batches() {
        let empty: CreateAttendanceRequest = serde_json::from_str("[]").unwrap();
        assert_eq!(empty.validate(10).unwrap_err()[0].field, "non_field_errors");

        let entry = AttendanceEntry {
            student_id: 1,
            group_id: 1,
            date: "2025-03-14".to_string(),
            status: AttendanceStatus::Present,
            note: None,
        };
        let big = CreateAttendanceRequest::Batch(vec![entry; 3]);
        assert!(big.validate(2).is_err());
    }

    #[test]
    fn test_scalar_payload_is_rejected() {
        assert!(serde_json::from_str::<CreateAttendanceRequest>("42").is_err());
    }

    #[test]
    fn test_list_params_date_must_parse() {
        let params = AttendanceListParams {
            group_id: Some(7),
            date: Some("yesterday".to_string()),
        };
        let errors = params.into_query().unwrap_err();
        assert_eq!(errors[0].field, "date");

        let query = AttendanceListParams {
            group_id: None,
            date: Some("2025-03-14".to_string()),
        }
        .into_query()
        .unwrap();
        assert_eq!(query.date, NaiveDate::from_ymd_opt(2025, 3, 14));
    }
}
