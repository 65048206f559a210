//! # 인증 오케스트레이터
//!
//! 회원가입, 로그인, 토큰 갱신 흐름을 조합합니다.
//!
//! ```text
//! register ─► IdentityStore (중복 확인) ─► CredentialVerifier (해싱) ─► IdentityStore (저장) ─► TokenService
//! login    ─► CredentialVerifier (인증) ─► IdentityStore (재조회) ─► TokenService
//! refresh  ─► TokenService (리프레시 키 검증/주체 추출) ─► IdentityStore (재조회) ─► TokenService
//! ```
//!
//! 외부 협력자 호출은 연산당 한 번씩만 await 하며 재시도하지 않습니다.
//! 협력자 에러는 타입 그대로 전파됩니다.

use std::sync::Arc;
use crate::domain::dto::users::request::RegisterRequest;
use crate::domain::entities::users::Identity;
use crate::domain::models::token::{AuthenticationResult, TokenClass};
use crate::errors::errors::AppError;
use crate::repositories::users::IdentityStore;
use super::credential_verifier::CredentialVerifier;
use super::token_service::TokenService;

/// 인증 흐름 서비스
pub struct AuthenticationService {
    identity_store: Arc<dyn IdentityStore>,
    verifier: Arc<dyn CredentialVerifier>,
    tokens: Arc<TokenService>,
}

impl AuthenticationService {
    pub fn new(
        identity_store: Arc<dyn IdentityStore>,
        verifier: Arc<dyn CredentialVerifier>,
        tokens: Arc<TokenService>,
    ) -> Self {
        Self {
            identity_store,
            verifier,
            tokens,
        }
    }

    pub fn token_service(&self) -> &TokenService {
        &self.tokens
    }

    pub fn identity_store(&self) -> &dyn IdentityStore {
        self.identity_store.as_ref()
    }

    /// 회원가입
    ///
    /// 새 사용자는 `Role::User` 로 저장되고 즉시 토큰 쌍을 받습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::IdentityExists` - 사용자명이 이미 사용 중인 경우
    /// * `AppError::IdentityStoreError` - 저장소 실패
    /// * `AppError::InternalError` - 해싱 또는 토큰 서명 실패
    pub async fn register(&self, request: RegisterRequest) -> Result<AuthenticationResult, AppError> {
        let RegisterRequest {
            full_name,
            email,
            username,
            password,
        } = request;

        if self.identity_store.find_by_username(&username).await?.is_some() {
            log::info!("회원가입 거부 (중복 사용자명): {}", username);
            return Err(AppError::IdentityExists(username));
        }

        let password_hash = self.verifier.hash_password(&password)?;
        let identity = self
            .identity_store
            .save(Identity::new(full_name, email, username, password_hash))
            .await?;

        log::info!("회원가입 완료: {}", identity.username);
        self.tokens.issue_token_pair(&identity)
    }

    /// 로그인
    ///
    /// # Errors
    ///
    /// * `AppError::CredentialMismatch` - 사용자명 또는 비밀번호 불일치
    /// * `AppError::IdentityNotFound` - 인증 직후 사용자가 삭제된 경우
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthenticationResult, AppError> {
        if let Err(e) = self.verifier.authenticate(username, password).await {
            log::warn!("로그인 실패: {}", username);
            return Err(e);
        }

        let identity = self.load_identity(username).await?;

        log::info!("로그인 성공: {}", identity.username);
        self.tokens.issue_token_pair(&identity)
    }

    /// 토큰 갱신
    ///
    /// 새 액세스 토큰과 새 리프레시 토큰을 발급합니다.
    /// 기존 리프레시 토큰은 폐기되지 않고 자체 만료 시점까지 유효합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidRefreshToken` - 리프레시 키로 검증되지 않는 토큰
    /// * `AppError::IdentityNotFound` - 토큰 주체가 더 이상 존재하지 않는 경우
    pub async fn refresh(&self, refresh_token: &str) -> Result<AuthenticationResult, AppError> {
        let username = self
            .tokens
            .extract_claim(refresh_token, TokenClass::Refresh, |claims| claims.sub.clone())
            .map_err(|e| {
                log::debug!("리프레시 토큰 거부: {:?}", e);
                AppError::InvalidRefreshToken
            })?;

        let identity = self.load_identity(&username).await?;

        log::info!("토큰 갱신: {}", identity.username);
        self.tokens.issue_token_pair(&identity)
    }

    async fn load_identity(&self, username: &str) -> Result<Identity, AppError> {
        self.identity_store
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::IdentityNotFound(username.to_string()))
    }
}
