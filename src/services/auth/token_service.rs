//! JWT 토큰 발급 서비스 구현
//!
//! HS256 으로 서명된 액세스/리프레시 토큰을 발급합니다.
//! 검증은 [`token_validator`](super::token_validator), 클레임 추출은
//! [`claim_extractor`](super::claim_extractor) 에서 같은 서비스 타입에 구현됩니다.

use std::sync::Arc;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{encode, Algorithm, Header};
use serde_json::{Map, Value};
use crate::domain::entities::users::Identity;
use crate::domain::models::token::{AuthenticationResult, Claims, TokenClass};
use crate::errors::errors::AppError;
use super::key_provider::KeyProvider;
use super::token_audit::{LogTokenObserver, TokenObserver, TokenOutcome, TOKEN_ISSUED};

/// JWT 토큰 관리 서비스
///
/// 불변 키와 관측자만 보유하므로 여러 워커가 락 없이 공유합니다.
#[derive(Clone)]
pub struct TokenService {
    keys: Arc<KeyProvider>,
    observer: Arc<dyn TokenObserver>,
}

impl TokenService {
    pub fn new(keys: Arc<KeyProvider>) -> Self {
        Self::with_observer(keys, Arc::new(LogTokenObserver))
    }

    pub fn with_observer(keys: Arc<KeyProvider>, observer: Arc<dyn TokenObserver>) -> Self {
        Self { keys, observer }
    }

    pub(crate) fn keys(&self) -> &KeyProvider {
        &self.keys
    }

    pub(crate) fn observer(&self) -> &dyn TokenObserver {
        self.observer.as_ref()
    }

    /// 토큰 발급
    ///
    /// # Arguments
    ///
    /// * `subject` - `sub` 클레임 (사용자명)
    /// * `extra` - 추가 클레임 (액세스 토큰 전용)
    /// * `class` - 서명 키를 결정하는 토큰 종류
    /// * `ttl` - 유효 기간 (1초 이상, 초 단위로 절삭)
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - `ttl` 이 1초 미만, 리프레시 토큰에 추가 클레임 지정, 서명 실패
    pub fn issue(
        &self,
        subject: &str,
        extra: Map<String, Value>,
        class: TokenClass,
        ttl: Duration,
    ) -> Result<String, AppError> {
        self.issue_at(subject, extra, class, ttl, Utc::now())
    }

    /// 발급 시각을 지정해 토큰을 발급합니다.
    pub fn issue_at(
        &self,
        subject: &str,
        extra: Map<String, Value>,
        class: TokenClass,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> Result<String, AppError> {
        // exp 는 초 단위이므로 1초 미만이면 exp == iat 가 된다
        if ttl < Duration::seconds(1) {
            self.observer.record(TOKEN_ISSUED, class, TokenOutcome::Rejected("invalid_ttl"));
            return Err(AppError::InternalError("token ttl must be at least one second".to_string()));
        }

        if !extra.is_empty() && !class.allows_extra_claims() {
            self.observer.record(TOKEN_ISSUED, class, TokenOutcome::Rejected("extra_claims"));
            return Err(AppError::InternalError(format!(
                "{} tokens cannot carry extra claims",
                class.as_str()
            )));
        }

        let issued_at = now.timestamp();
        let claims = Claims::new(subject, issued_at, issued_at + ttl.num_seconds(), extra);
        let key = self.keys.key_for(class);

        match encode(&Header::new(Algorithm::HS256), &claims, key.encoding_key()) {
            Ok(token) => {
                self.observer.record(TOKEN_ISSUED, class, TokenOutcome::Success);
                Ok(token)
            }
            Err(e) => {
                self.observer.record(TOKEN_ISSUED, class, TokenOutcome::Rejected("encoding_failed"));
                Err(AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
            }
        }
    }

    /// 사용자를 위한 액세스 토큰 생성 (15분, 추가 클레임 없음)
    pub fn issue_access_token(&self, identity: &Identity) -> Result<String, AppError> {
        self.issue(
            &identity.username,
            Map::new(),
            TokenClass::Access,
            TokenClass::Access.default_ttl(),
        )
    }

    /// 사용자를 위한 리프레시 토큰 생성 (7일)
    pub fn issue_refresh_token(&self, identity: &Identity) -> Result<String, AppError> {
        self.issue(
            &identity.username,
            Map::new(),
            TokenClass::Refresh,
            TokenClass::Refresh.default_ttl(),
        )
    }

    /// 토큰 쌍 생성 (액세스 + 리프레시)
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let pair = token_service.issue_token_pair(&identity)?;
    /// HttpResponse::Ok().json(pair) // {"token": "...", "refreshToken": "..."}
    /// ```
    pub fn issue_token_pair(&self, identity: &Identity) -> Result<AuthenticationResult, AppError> {
        Ok(AuthenticationResult {
            access_token: self.issue_access_token(identity)?,
            refresh_token: self.issue_refresh_token(identity)?,
        })
    }
}
