pub mod query;
pub mod response;

pub use query::{empty_string_as_none, empty_string_as_none_i64};
pub use response::{ApiResponse, FieldError};
