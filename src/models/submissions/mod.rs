pub mod entities;
pub mod requests;
pub mod responses;

/// 提交不存在或不属于调用者时的统一提示
pub const SUBMISSION_NOT_FOUND: &str = "Submission not found";
