//! # 사용자 저장소
//!
//! 인증 코어가 사용자 영속성 계층에 요구하는 최소 계약([`IdentityStore`])과
//! 단독 실행용 메모리 구현([`InMemoryIdentityStore`])을 제공합니다.
//!
//! 실제 영속성(데이터베이스, 캐시)은 이 트레이트 뒤에 숨는 외부 협력자입니다.
//! 인증 코어는 사용자명으로 조회하고 새 사용자를 저장하는 두 연산만 사용합니다.

use std::collections::HashMap;
use std::sync::RwLock;
use async_trait::async_trait;
use crate::domain::entities::users::Identity;
use crate::errors::errors::AppError;

/// 사용자 저장소 계약
///
/// 구현체의 I/O 실패는 `AppError::IdentityStoreError` 로 돌려주어야 합니다.
/// 호출자는 재시도하지 않고 그대로 전파합니다.
#[async_trait]
pub trait IdentityStore: Send + Sync {
    /// 사용자명으로 사용자 조회
    ///
    /// # Returns
    ///
    /// * `Ok(Some(Identity))` - 사용자를 찾은 경우
    /// * `Ok(None)` - 해당 사용자명이 없는 경우
    async fn find_by_username(&self, username: &str) -> Result<Option<Identity>, AppError>;

    /// 새 사용자 저장
    ///
    /// # Errors
    ///
    /// * `AppError::IdentityExists` - 같은 사용자명이 이미 저장된 경우
    async fn save(&self, identity: Identity) -> Result<Identity, AppError>;
}

/// 프로세스 메모리에 사용자를 보관하는 저장소
///
/// 사용자명을 키로 사용하므로 사용자명 유일성이 저장 시점에 원자적으로 보장됩니다.
#[derive(Default)]
pub struct InMemoryIdentityStore {
    identities: RwLock<HashMap<String, Identity>>,
}

impl InMemoryIdentityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 사용자 삭제
    ///
    /// 발급된 토큰은 그대로 남으므로, 삭제 후 갱신 요청은 `IdentityNotFound` 가 됩니다.
    pub fn remove(&self, username: &str) -> Result<Option<Identity>, AppError> {
        let mut identities = self
            .identities
            .write()
            .map_err(|_| AppError::IdentityStoreError("identity store lock poisoned".to_string()))?;

        Ok(identities.remove(username))
    }

    pub fn len(&self) -> usize {
        self.identities.read().map(|ids| ids.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl IdentityStore for InMemoryIdentityStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<Identity>, AppError> {
        let identities = self
            .identities
            .read()
            .map_err(|_| AppError::IdentityStoreError("identity store lock poisoned".to_string()))?;

        Ok(identities.get(username).cloned())
    }

    async fn save(&self, identity: Identity) -> Result<Identity, AppError> {
        let mut identities = self
            .identities
            .write()
            .map_err(|_| AppError::IdentityStoreError("identity store lock poisoned".to_string()))?;

        if identities.contains_key(&identity.username) {
            return Err(AppError::IdentityExists(identity.username));
        }

        identities.insert(identity.username.clone(), identity.clone());
        log::debug!("사용자 저장 완료: {}", identity.username);

        Ok(identity)
    }
}
