//! 用户数据模型

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 用户记录。密码以明文存储，但从不出现在响应中。
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
}

/// 创建用户请求，id 由数据库生成
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[serde(alias = "nombre_usuario")]
    #[validate(length(min = 1, max = 50, message = "username must be between 1 and 50 characters"))]
    pub username: String,

    #[serde(alias = "contrasena")]
    #[validate(length(min = 1, max = 255, message = "password must be between 1 and 255 characters"))]
    pub password: String,
}

/// 登录请求。不做长度约束，任何不匹配的凭据都得到 401。
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(alias = "nombre_usuario")]
    pub username: String,

    #[serde(alias = "contrasena")]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub user_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_is_never_serialized() {
        let user = User {
            id: 7,
            username: "ana".to_string(),
            password: "secreto".to_string(),
        };

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["username"], "ana");
        assert!(value.get("password").is_none());
    }

    #[test]
    fn username_length_is_bounded() {
        let request = CreateUserRequest {
            username: "a".repeat(51),
            password: "x".to_string(),
        };
        assert!(request.validate().is_err());

        let request = CreateUserRequest {
            username: "a".repeat(50),
            password: "x".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn login_accepts_legacy_field_names() {
        let request: LoginRequest =
            serde_json::from_str(r#"{"id": 0, "nombre_usuario": "ana", "contrasena": "pw"}"#)
                .unwrap();
        assert_eq!(request.username, "ana");
        assert_eq!(request.password, "pw");
    }

    #[test]
    fn login_has_no_length_limits() {
        let request = LoginRequest {
            username: "a".repeat(51),
            password: String::new(),
        };
        assert!(request.validate().is_ok());
    }
}
