//! Request and response bodies of the roster API.
//!
//! Member bodies live in [`crate::member`]; this module covers the auth
//! endpoints and the shared error envelope.

use serde::{Deserialize, Serialize};

use crate::member::MemberId;

/// POST /auth/login
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// POST /auth/register
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Successful login.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserProfile,
}

/// The logged-in user as reported by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: MemberId,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Body of every non-2xx response.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    /// Extract the server's message from a raw body, if it has one.
    pub fn message_from(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .map(|e| e.error)
            .filter(|m| !m.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_auth_response_ignores_extra_user_fields() {
        let value = json!({
            "token": "abc.def.ghi",
            "user": {"id": 7, "username": "mira", "email": "mira@example.com", "created_at": "2024-01-01"}
        });

        let resp: AuthResponse = serde_json::from_value(value).unwrap();
        assert_eq!(resp.token, "abc.def.ghi");
        assert_eq!(resp.user.id, MemberId::Number(7));
        assert_eq!(resp.user.username, "mira");
        assert_eq!(resp.user.email.as_deref(), Some("mira@example.com"));
    }

    #[test]
    fn test_login_request_omits_missing_email() {
        let req = LoginRequest {
            username: "mira".into(),
            password: "hunter2".into(),
            email: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, json!({"username": "mira", "password": "hunter2"}));
    }

    #[test]
    fn test_error_message_from_body() {
        assert_eq!(
            ErrorResponse::message_from(r#"{"error":"Invalid credentials"}"#).as_deref(),
            Some("Invalid credentials")
        );
        assert_eq!(ErrorResponse::message_from("<html>502</html>"), None);
        assert_eq!(ErrorResponse::message_from(r#"{"error":""}"#), None);
    }
}
