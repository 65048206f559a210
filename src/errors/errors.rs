//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 인증 코어를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! 에러는 두 계층으로 나뉩니다.
//!
//! - [`TokenError`]: 토큰 파싱/검증 단계의 세부 실패 원인. 검증기와 클레임 추출기
//!   바깥으로는 `false` 또는 일반적인 "invalid token" 으로만 노출됩니다.
//! - [`AppError`]: 오케스트레이터와 경계 계층이 다루는 타입 있는 실패.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status |
//! |----------|-------------|
//! | `ValidationError` | 400 Bad Request |
//! | `Token`, `InvalidRefreshToken` | 401 Unauthorized |
//! | `CredentialMismatch`, `IdentityNotFound` | 401 Unauthorized (동일한 메시지) |
//! | `IdentityExists` | 409 Conflict |
//! | `ConfigurationError`, `IdentityStoreError`, `InternalError` | 500 Internal Server Error |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::errors::AppError;
//!
//! async fn load(store: &dyn IdentityStore, username: &str) -> Result<Identity, AppError> {
//!     store.find_by_username(username)
//!         .await?
//!         .ok_or_else(|| AppError::IdentityNotFound(username.to_string()))
//! }
//! ```

use thiserror::Error;

/// 사용자 열거(user enumeration)를 막기 위해 로그인/리프레시 실패 시 공통으로 쓰는 메시지
pub const INVALID_CREDENTIALS_MESSAGE: &str = "invalid username or password";

/// 토큰 검증 실패 원인
///
/// 서명 검증이 만료 검사보다 먼저 수행되므로, 서명이 틀린 만료 토큰은
/// `Expired` 가 아니라 `SignatureInvalid` 로 분류됩니다.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    /// 구조가 잘못되었거나 필수 클레임이 없는 토큰
    #[error("token is malformed")]
    Malformed,

    /// 다른 키로 서명되었거나 변조된 토큰
    #[error("token signature is invalid")]
    SignatureInvalid,

    /// 서명은 유효하지만 만료된 토큰
    #[error("token has expired")]
    Expired,
}

impl TokenError {
    /// 관측 이벤트에 기록할 짧은 결과 코드
    pub fn code(&self) -> &'static str {
        match self {
            TokenError::Malformed => "malformed",
            TokenError::SignatureInvalid => "signature_invalid",
            TokenError::Expired => "expired",
        }
    }
}

/// 애플리케이션 전역 에러 타입
///
/// 인증 코어에서 발생할 수 있는 모든 종류의 실패를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 서명 키 설정 오류 (기동 시 치명적)
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// 토큰 검증 실패 (401 Unauthorized)
    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    /// 이미 존재하는 사용자명 (409 Conflict)
    #[error("Identity already exists: {0}")]
    IdentityExists(String),

    /// 사용자를 찾을 수 없음 (401, CredentialMismatch 와 동일하게 렌더링)
    #[error("Identity not found: {0}")]
    IdentityNotFound(String),

    /// 사용자명 또는 비밀번호 불일치 (401 Unauthorized)
    #[error("Credential mismatch")]
    CredentialMismatch,

    /// 유효하지 않은 리프레시 토큰 (401 Unauthorized)
    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 외부 사용자 저장소 에러 (500 Internal Server Error)
    #[error("Identity store error: {0}")]
    IdentityStoreError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트에게 노출해도 되는 메시지
    ///
    /// 5xx 에러와 토큰 세부 원인은 일반 메시지로 대체합니다.
    pub fn public_message(&self) -> String {
        match self {
            AppError::ValidationError(msg) => msg.clone(),
            AppError::IdentityExists(_) => "username is already taken".to_string(),
            AppError::CredentialMismatch | AppError::IdentityNotFound(_) => {
                INVALID_CREDENTIALS_MESSAGE.to_string()
            }
            AppError::InvalidRefreshToken => "invalid refresh token".to_string(),
            AppError::Token(_) => "invalid token".to_string(),
            AppError::ConfigurationError(_)
            | AppError::IdentityStoreError(_)
            | AppError::InternalError(_) => "internal server error".to_string(),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::IdentityExists(_) => StatusCode::CONFLICT,
            AppError::Token(_)
            | AppError::InvalidRefreshToken
            | AppError::CredentialMismatch
            | AppError::IdentityNotFound(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러의 상세 내용은 서버 로그에만 남기고 응답 본문에는 싣지 않습니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("요청 처리 실패: {}", self);
        }

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.public_message()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::MessageBody;
    use actix_web::http::StatusCode;
    use actix_web::ResponseError;

    fn body_of(error: &AppError) -> serde_json::Value {
        let bytes = error
            .error_response()
            .into_body()
            .try_into_bytes()
            .ok()
            .expect("json body");
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("refreshToken is required".to_string());
        assert_eq!(error.error_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_of(&error)["error"], "refreshToken is required");
    }

    #[test]
    fn test_identity_exists_response() {
        let error = AppError::IdentityExists("alice".to_string());
        assert_eq!(error.error_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_credential_mismatch_and_not_found_render_identically() {
        let mismatch = AppError::CredentialMismatch;
        let not_found = AppError::IdentityNotFound("ghost".to_string());

        assert_eq!(mismatch.error_response().status(), StatusCode::UNAUTHORIZED);
        assert_eq!(not_found.error_response().status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_of(&mismatch), body_of(&not_found));
        assert_eq!(body_of(&mismatch)["error"], INVALID_CREDENTIALS_MESSAGE);
    }

    #[test]
    fn test_token_errors_do_not_leak_reason() {
        let expired = AppError::from(TokenError::Expired);
        let forged = AppError::from(TokenError::SignatureInvalid);

        assert_eq!(expired.error_response().status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_of(&expired), body_of(&forged));
    }

    #[test]
    fn test_internal_error_hides_detail() {
        let error = AppError::IdentityStoreError("connection refused to 10.0.0.7".to_string());
        assert_eq!(error.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_of(&error)["error"], "internal server error");
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
