//! 자격 증명 검증기
//!
//! 사용자명/비밀번호 인증과 회원가입 시 비밀번호 해싱을 담당합니다.
//! 인증 코어는 [`CredentialVerifier`] 트레이트에만 의존하며,
//! 기본 구현([`BcryptCredentialVerifier`])은 bcrypt 와 [`IdentityStore`] 를 사용합니다.

use std::sync::Arc;
use async_trait::async_trait;
use crate::errors::errors::{AppError, AppResult, ErrorContext};
use crate::repositories::users::IdentityStore;

/// 자격 증명 검증 계약
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// 사용자명과 비밀번호를 확인합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::CredentialMismatch` - 사용자가 없거나 비밀번호가 틀린 경우 (구분하지 않음)
    /// * 저장소 에러는 그대로 전파
    async fn authenticate(&self, username: &str, password: &str) -> AppResult<()>;

    /// 평문 비밀번호를 저장용 해시로 변환합니다.
    fn hash_password(&self, password: &str) -> AppResult<String>;
}

/// bcrypt 기반 기본 검증기
pub struct BcryptCredentialVerifier {
    store: Arc<dyn IdentityStore>,
    cost: u32,
}

impl BcryptCredentialVerifier {
    /// # Arguments
    ///
    /// * `store` - 비밀번호 해시를 조회할 사용자 저장소
    /// * `cost` - bcrypt cost (`PasswordConfig::bcrypt_cost()`)
    pub fn new(store: Arc<dyn IdentityStore>, cost: u32) -> Self {
        Self { store, cost }
    }
}

#[async_trait]
impl CredentialVerifier for BcryptCredentialVerifier {
    async fn authenticate(&self, username: &str, password: &str) -> AppResult<()> {
        let identity = self
            .store
            .find_by_username(username)
            .await?
            .ok_or(AppError::CredentialMismatch)?;

        let verify_start = std::time::Instant::now();
        let is_valid = bcrypt::verify(password, &identity.password_hash)
            .context("비밀번호 검증 실패")?;
        log::debug!("Password verification took: {:?}", verify_start.elapsed());

        if !is_valid {
            return Err(AppError::CredentialMismatch);
        }

        Ok(())
    }

    fn hash_password(&self, password: &str) -> AppResult<String> {
        let hash_start = std::time::Instant::now();
        let password_hash = bcrypt::hash(password, self.cost)
            .with_context(|| format!("비밀번호 해싱 실패 (cost {})", self.cost))?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        Ok(password_hash)
    }
}
