//! 路径参数提取器
//!
//! 路径中的 ID 不是正整数时，资源不可能存在，直接返回该资源的 404，不进入处理函数。

use actix_web::{HttpRequest, HttpResponse, error::InternalError};

use crate::models::{ApiResponse, ErrorCode, submissions::SUBMISSION_NOT_FOUND};

/// 解析路径参数为正整数，失败时返回与“资源不存在”相同的响应
pub fn parse_safe_i64(
    req: &HttpRequest,
    name: &str,
    not_found_code: ErrorCode,
    not_found_message: &str,
) -> Result<i64, actix_web::Error> {
    let raw = req.match_info().get(name).unwrap_or_default();

    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => {
            let response = HttpResponse::NotFound().json(ApiResponse::<()>::error_empty(
                not_found_code,
                not_found_message,
            ));
            Err(InternalError::from_response(
                format!("Invalid path parameter '{name}': {raw}"),
                response,
            )
            .into())
        }
    }
}

/// 定义从路径中提取正整数 ID 的提取器
///
/// ```rust,ignore
/// define_safe_i64_extractor!(
///     SafeSubmissionIdI64,
///     "id",
///     ErrorCode::SubmissionNotFound,
///     SUBMISSION_NOT_FOUND
/// );
///
/// async fn handler(path: SafeSubmissionIdI64) -> HttpResponse {
///     let id: i64 = path.0;
///     // ...
/// }
/// ```
#[macro_export]
macro_rules! define_safe_i64_extractor {
    ($name:ident, $param:literal, $code:expr, $message:expr) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name(pub i64);

        impl actix_web::FromRequest for $name {
            type Error = actix_web::Error;
            type Future = futures_util::future::Ready<Result<Self, Self::Error>>;

            fn from_request(
                req: &actix_web::HttpRequest,
                _payload: &mut actix_web::dev::Payload,
            ) -> Self::Future {
                futures_util::future::ready(
                    $crate::utils::extractor::parse_safe_i64(req, $param, $code, $message)
                        .map($name),
                )
            }
        }
    };
}

define_safe_i64_extractor!(
    SafeSubmissionIdI64,
    "id",
    ErrorCode::SubmissionNotFound,
    SUBMISSION_NOT_FOUND
);
