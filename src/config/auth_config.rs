//! # Authentication Configuration Module
//!
//! JWT 서명 키 등 인증 관련 설정을 관리하는 모듈입니다.
//!
//! 액세스 토큰과 리프레시 토큰은 서로 다른 비밀키로 서명됩니다.
//! 두 값 모두 base64(표준 알파벳)로 인코딩되어야 하며,
//! 디코딩 결과가 최소 256비트(32바이트) 이상이어야 합니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export JWT_ACCESS_SIGNING_SECRET="$(openssl rand -base64 32)"
//! export JWT_REFRESH_SIGNING_SECRET="$(openssl rand -base64 32)"
//! ```
//!
//! 두 값이 없으면 서버는 기동하지 않습니다. 개발용 기본값은 제공하지 않습니다.

use std::env;
use crate::errors::errors::AppError;

/// JSON Web Token (JWT) 서명 키 설정
///
/// `access-signing-secret`, `refresh-signing-secret` 두 설정값을
/// 환경 변수에서 읽어옵니다. 값 자체는 절대 로그에 남기지 않습니다.
pub struct JwtConfig;

impl JwtConfig {
    /// 액세스 토큰 서명 키 환경 변수 이름
    pub const ACCESS_SECRET_VAR: &'static str = "JWT_ACCESS_SIGNING_SECRET";

    /// 리프레시 토큰 서명 키 환경 변수 이름
    pub const REFRESH_SECRET_VAR: &'static str = "JWT_REFRESH_SIGNING_SECRET";

    /// 액세스 토큰 서명에 사용할 base64 비밀키를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigurationError` - 환경 변수가 없거나 비어 있는 경우
    pub fn access_signing_secret() -> Result<String, AppError> {
        Self::read_secret(Self::ACCESS_SECRET_VAR)
    }

    /// 리프레시 토큰 서명에 사용할 base64 비밀키를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigurationError` - 환경 변수가 없거나 비어 있는 경우
    pub fn refresh_signing_secret() -> Result<String, AppError> {
        Self::read_secret(Self::REFRESH_SECRET_VAR)
    }

    fn read_secret(var: &str) -> Result<String, AppError> {
        match env::var(var) {
            Ok(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
            Ok(_) => Err(AppError::ConfigurationError(format!("{} is empty", var))),
            Err(_) => Err(AppError::ConfigurationError(format!("{} must be set", var))),
        }
    }
}
