//! 인증 요청관련 DTO
//!
//! 회원가입, 로그인, 토큰 갱신 요청 본문을 매핑합니다.
//! JSON 필드명은 프론트엔드와 맞춰 camelCase 를 사용합니다.
use serde::Deserialize;
use validator::{Validate, ValidationErrors};
use crate::errors::errors::AppError;

/// 회원가입 요청 구조체
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100, message = "fullName is required"))]
    pub full_name: String,

    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,

    #[validate(length(min = 1, max = 50, message = "username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// 로그인 요청 구조체
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// 리프레시 토큰 요청 구조체
///
/// 필드가 아예 없는 본문도 빈 문자열로 역직렬화되어 검증 단계에서 거부됩니다.
#[derive(Debug, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    #[serde(default, rename = "refreshToken")]
    #[validate(length(min = 1, message = "refreshToken is required"))]
    pub refresh_token: String,
}

/// `validator` 검증 실패를 400 응답용 에러로 변환합니다.
///
/// 여러 필드가 실패하면 필드명 순으로 첫 번째 메시지를 사용합니다.
pub fn validation_failure(errors: ValidationErrors) -> AppError {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let message = fields
        .into_iter()
        .flat_map(|(_, errs)| errs.iter())
        .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "invalid request body".to_string());

    AppError::ValidationError(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_uses_camel_case() {
        let request: RegisterRequest = serde_json::from_str(
            r#"{"fullName":"Alice Kim","email":"alice@example.com","username":"alice","password":"pw"}"#,
        )
        .unwrap();

        assert_eq!(request.full_name, "Alice Kim");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_register_request_rejects_bad_email() {
        let request: RegisterRequest = serde_json::from_str(
            r#"{"fullName":"Alice Kim","email":"not-an-email","username":"alice","password":"pw"}"#,
        )
        .unwrap();

        let error = validation_failure(request.validate().unwrap_err());
        match error {
            AppError::ValidationError(msg) => assert!(msg.contains("email")),
            other => panic!("expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_refresh_request_absent_and_empty_are_invalid() {
        let absent: RefreshTokenRequest = serde_json::from_str("{}").unwrap();
        let empty: RefreshTokenRequest = serde_json::from_str(r#"{"refreshToken":""}"#).unwrap();
        let present: RefreshTokenRequest = serde_json::from_str(r#"{"refreshToken":"x.y.z"}"#).unwrap();

        assert!(absent.validate().is_err());
        assert!(empty.validate().is_err());
        assert!(present.validate().is_ok());
    }
}
