//! JWT 토큰 검증
//!
//! 서명을 먼저 확인하고, 서명이 맞는 토큰에 대해서만 만료를 판단합니다.
//! 만료 판정에는 유예 시간이 없습니다: `now > exp` 이면 만료입니다.

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, Validation};
use crate::domain::models::token::{Claims, TokenClass};
use crate::errors::errors::TokenError;
use super::token_audit::{TokenOutcome, TOKEN_VALIDATED};
use super::token_service::TokenService;

/// `|exp - now|` 가 이 값(초)을 넘으면 시계 차이 진단 신호를 냅니다.
pub const CLOCK_SKEW_THRESHOLD_SECS: i64 = 5 * 60;

fn validation_rules() -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    // 만료는 직접 판단한다 (라이브러리 기본 leeway 60초 배제)
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.set_required_spec_claims(&["exp", "sub"]);
    validation
}

fn classify(kind: &ErrorKind) -> TokenError {
    match kind {
        ErrorKind::InvalidSignature => TokenError::SignatureInvalid,
        ErrorKind::ExpiredSignature => TokenError::Expired,
        _ => TokenError::Malformed,
    }
}

impl TokenService {
    /// 토큰을 검증하고 클레임을 돌려줍니다.
    ///
    /// # Errors
    ///
    /// * `TokenError::SignatureInvalid` - 다른 키로 서명되었거나 변조된 토큰
    /// * `TokenError::Expired` - 서명은 맞지만 만료된 토큰
    /// * `TokenError::Malformed` - 그 외 모든 구조적 결함 (`exp <= iat` 포함)
    pub fn validate(&self, token: &str, class: TokenClass) -> Result<Claims, TokenError> {
        self.validate_at(token, class, Utc::now())
    }

    /// 기준 시각을 지정해 토큰을 검증합니다.
    pub fn validate_at(
        &self,
        token: &str,
        class: TokenClass,
        now: DateTime<Utc>,
    ) -> Result<Claims, TokenError> {
        let result = self.check(token, class, now);

        let outcome = match &result {
            Ok(_) => TokenOutcome::Success,
            Err(e) => TokenOutcome::Rejected(e.code()),
        };
        self.observer().record(TOKEN_VALIDATED, class, outcome);

        result
    }

    fn check(&self, token: &str, class: TokenClass, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        let key = self.keys().key_for(class);

        let claims = decode::<Claims>(token, key.decoding_key(), &validation_rules())
            .map(|data| data.claims)
            .map_err(|e| classify(e.kind()))?;

        if claims.exp <= claims.iat {
            return Err(TokenError::Malformed);
        }

        if now.timestamp() > claims.exp {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }

    /// 액세스 토큰이 유효하고 주체가 `expected_subject` 와 같은지 확인합니다.
    ///
    /// 모든 실패는 `false` 로 접힙니다.
    pub fn is_access_token_valid(&self, token: &str, expected_subject: &str) -> bool {
        self.validate(token, TokenClass::Access)
            .map(|claims| claims.sub == expected_subject)
            .unwrap_or(false)
    }

    /// 리프레시 토큰이 리프레시 키로 서명되었고 만료되지 않았는지 확인합니다.
    pub fn is_refresh_token_valid(&self, token: &str) -> bool {
        self.validate(token, TokenClass::Refresh).is_ok()
    }

    /// 시계 차이 진단
    ///
    /// 어떤 판단에도 쓰이지 않는 관측용 신호입니다.
    pub fn has_clock_skew(claims: &Claims, now: DateTime<Utc>) -> bool {
        (claims.exp - now.timestamp()).abs() > CLOCK_SKEW_THRESHOLD_SECS
    }
}
