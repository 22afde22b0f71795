//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_gateway_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum GatewayError {
            $($variant(String),)*
        }

        impl GatewayError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(GatewayError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(GatewayError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(GatewayError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl GatewayError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        GatewayError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_gateway_errors! {
    CacheConnection("E001", "Cache Connection Error"),
    CachePluginNotFound("E002", "Cache Plugin Not Found"),
    DatabaseConfig("E003", "Database Configuration Error"),
    DatabaseConnection("E004", "Database Connection Error"),
    DatabaseOperation("E005", "Database Operation Error"),
}

impl GatewayError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for GatewayError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for GatewayError {
    fn from(err: sea_orm::DbErr) -> Self {
        GatewayError::DatabaseOperation(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(GatewayError::cache_connection("test").code(), "E001");
        assert_eq!(GatewayError::cache_plugin_not_found("test").code(), "E002");
        assert_eq!(GatewayError::database_config("test").code(), "E003");
        assert_eq!(GatewayError::database_operation("test").code(), "E005");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            GatewayError::cache_connection("test").error_type(),
            "Cache Connection Error"
        );
        assert_eq!(
            GatewayError::database_connection("test").error_type(),
            "Database Connection Error"
        );
    }

    #[test]
    fn test_db_err_conversion() {
        let err: GatewayError = sea_orm::DbErr::RecordNotFound("homework".into()).into();
        assert_eq!(err.code(), "E005");
        assert!(err.message().contains("homework"));
    }

    #[test]
    fn test_format_simple() {
        let err = GatewayError::database_config("Unsupported url scheme");
        let formatted = err.format_simple();
        assert!(formatted.contains("Database Configuration Error"));
        assert!(formatted.contains("Unsupported url scheme"));
    }
}
