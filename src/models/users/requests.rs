use super::entities::UserRole;
use serde::Deserialize;

// 用户创建请求（仅供初始化数据与测试使用，网关本身不开放注册）
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub display_name: Option<String>,
    pub role: UserRole,
    #[serde(default)]
    pub is_teacher: bool,
}
