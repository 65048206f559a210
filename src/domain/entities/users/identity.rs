//! Identity Entity Implementation
//!
//! 인증 코어가 참조하는 사용자 엔티티입니다.
//! 저장소 자체는 외부 협력자이며, 코어는 사용자명으로 조회하고 저장만 요청합니다.

use std::fmt;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 사용자 역할
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }
}

/// 사용자 엔티티
///
/// 토큰의 `sub` 클레임에는 항상 `username` 이 들어갑니다.
/// 내부 식별자인 `id` 는 토큰에 실리지 않습니다.
#[derive(Clone, Serialize, Deserialize)]
pub struct Identity {
    /// 내부 식별자
    pub id: Uuid,
    /// 전체 이름
    pub full_name: String,
    /// 이메일
    pub email: String,
    /// 로그인 식별자 (unique)
    pub username: String,
    /// bcrypt 등으로 해시된 비밀번호
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// 역할
    pub role: Role,
    /// 생성 시간
    pub created_at: DateTime<Utc>,
}

impl Identity {
    /// 새 일반 사용자 생성
    ///
    /// 회원가입으로 생성되는 사용자는 항상 `Role::User` 로 시작합니다.
    pub fn new(full_name: String, email: String, username: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            full_name,
            email,
            username,
            password_hash,
            role: Role::User,
            created_at: Utc::now(),
        }
    }

    /// 역할을 지정한 사용자 생성
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }
}

// 비밀번호 해시는 디버그 출력에도 남기지 않는다
impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Identity")
            .field("id", &self.id)
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("username", &self.username)
            .field("password_hash", &"<redacted>")
            .field("role", &self.role)
            .field("created_at", &self.created_at)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_identity_is_plain_user() {
        let identity = Identity::new(
            "Alice Kim".to_string(),
            "alice@example.com".to_string(),
            "alice".to_string(),
            "$2b$04$hash".to_string(),
        );

        assert_eq!(identity.role, Role::User);
        assert_eq!(identity.with_role(Role::Admin).role, Role::Admin);
    }

    #[test]
    fn test_password_hash_never_serialized_or_printed() {
        let identity = Identity::new(
            "Bob Lee".to_string(),
            "bob@example.com".to_string(),
            "bob".to_string(),
            "$2b$04$supersecrethash".to_string(),
        );

        let json = serde_json::to_string(&identity).unwrap();
        let debug = format!("{:?}", identity);

        assert!(!json.contains("supersecrethash"));
        assert!(!debug.contains("supersecrethash"));
        assert!(json.contains("\"role\":\"USER\""));
    }
}
