//! 클레임 추출
//!
//! 모든 추출은 전체 검증을 통과한 토큰에서만 이루어집니다.
//! 검증 실패 원인([`TokenError`])은 호출자에게 그대로 돌려주며,
//! 경계 계층에서는 일반적인 "invalid token" 으로만 렌더링됩니다.

use chrono::{DateTime, Utc};
use crate::domain::models::token::{Claims, TokenClass};
use crate::errors::errors::TokenError;
use super::token_service::TokenService;

/// `Authorization` 헤더의 베어러 접두사 (대소문자 구분)
pub const BEARER_PREFIX: &str = "Bearer ";

/// `Authorization` 헤더 값에서 토큰 부분만 꺼냅니다.
///
/// 접두사가 정확히 `"Bearer "` 가 아니거나 나머지가 비어 있으면 `None` 입니다.
pub fn extract_bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix(BEARER_PREFIX)
        .filter(|token| !token.is_empty())
}

impl TokenService {
    /// 검증된 토큰의 클레임에 선택자를 적용합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let scope = token_service.extract_claim(token, TokenClass::Access, |claims| {
    ///     claims.extra.get("scope").cloned()
    /// })?;
    /// ```
    pub fn extract_claim<T, F>(&self, token: &str, class: TokenClass, selector: F) -> Result<T, TokenError>
    where
        F: FnOnce(&Claims) -> T,
    {
        let claims = self.validate(token, class)?;
        Ok(selector(&claims))
    }

    /// 액세스 토큰의 사용자명
    pub fn extract_username(&self, token: &str) -> Result<String, TokenError> {
        self.extract_claim(token, TokenClass::Access, |claims| claims.sub.clone())
    }

    /// 액세스 토큰의 만료 시각
    pub fn extract_expiration(&self, token: &str) -> Result<DateTime<Utc>, TokenError> {
        self.extract_claim(token, TokenClass::Access, Claims::expires_at)
    }

    /// `Authorization` 헤더에서 사용자명을 꺼냅니다.
    ///
    /// # Returns
    ///
    /// * `Ok(None)` - 헤더가 없거나 베어러 형식이 아닌 경우
    /// * `Ok(Some(username))` - 유효한 액세스 토큰인 경우
    /// * `Err(TokenError)` - 베어러 토큰이 있으나 검증에 실패한 경우
    pub fn username_from_bearer_header(&self, header: Option<&str>) -> Result<Option<String>, TokenError> {
        match header.and_then(extract_bearer_token) {
            Some(token) => self.extract_username(token).map(Some),
            None => Ok(None),
        }
    }
}
