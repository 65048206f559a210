//! JWT 서명 키 제공자
//!
//! 액세스/리프레시 두 종류의 HMAC 키를 기동 시 한 번 해석하고,
//! 이후에는 불변 상태로 모든 요청이 공유합니다.
//!
//! ```rust,ignore
//! let keys = KeyProvider::initialize()?;          // main 에서 한 번
//! let key = keys.key_for(TokenClass::Refresh);    // 이후 어디서든
//! ```

use std::fmt;
use std::sync::Arc;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use jsonwebtoken::{DecodingKey, EncodingKey};
use once_cell::sync::OnceCell;
use crate::config::JwtConfig;
use crate::domain::models::token::TokenClass;
use crate::errors::errors::AppError;

/// HS256 에 필요한 최소 키 길이 (256비트)
pub const MIN_KEY_BYTES: usize = 32;

static KEY_PROVIDER: OnceCell<Arc<KeyProvider>> = OnceCell::new();

/// 토큰 종류별 서명 키
///
/// 키 바이트는 직렬화되지 않으며 디버그 출력에서도 가려집니다.
pub struct SigningKey {
    class: TokenClass,
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl SigningKey {
    fn from_bytes(class: TokenClass, bytes: &[u8]) -> Self {
        Self {
            class,
            encoding: EncodingKey::from_secret(bytes),
            decoding: DecodingKey::from_secret(bytes),
        }
    }

    pub fn class(&self) -> TokenClass {
        self.class
    }

    pub(crate) fn encoding_key(&self) -> &EncodingKey {
        &self.encoding
    }

    pub(crate) fn decoding_key(&self) -> &DecodingKey {
        &self.decoding
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("class", &self.class)
            .field("key", &"<redacted>")
            .finish()
    }
}

/// 서명 키 제공자
#[derive(Debug)]
pub struct KeyProvider {
    access: SigningKey,
    refresh: SigningKey,
}

impl KeyProvider {
    /// base64 로 인코딩된 두 비밀키로 제공자를 만듭니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigurationError` - base64 디코딩 실패 또는 256비트 미만의 키
    pub fn from_secrets(access_secret: &str, refresh_secret: &str) -> Result<Self, AppError> {
        let access = decode_secret(TokenClass::Access, access_secret)?;
        let refresh = decode_secret(TokenClass::Refresh, refresh_secret)?;

        Ok(Self {
            access: SigningKey::from_bytes(TokenClass::Access, &access),
            refresh: SigningKey::from_bytes(TokenClass::Refresh, &refresh),
        })
    }

    /// 환경 변수에서 비밀키를 읽어 제공자를 만듭니다.
    pub fn from_env() -> Result<Self, AppError> {
        let access = JwtConfig::access_signing_secret()?;
        let refresh = JwtConfig::refresh_signing_secret()?;
        Self::from_secrets(&access, &refresh)
    }

    /// 프로세스 전역 제공자를 초기화합니다.
    ///
    /// 이미 초기화되어 있으면 기존 인스턴스를 그대로 돌려줍니다.
    /// 실패하면 셀은 비어 있는 채로 남습니다.
    pub fn initialize() -> Result<Arc<Self>, AppError> {
        KEY_PROVIDER
            .get_or_try_init(|| {
                let provider = Self::from_env()?;
                log::info!("JWT 서명 키 초기화 완료");
                Ok(Arc::new(provider))
            })
            .cloned()
    }

    /// 초기화된 전역 제공자
    pub fn instance() -> Option<Arc<Self>> {
        KEY_PROVIDER.get().cloned()
    }

    pub fn key_for(&self, class: TokenClass) -> &SigningKey {
        match class {
            TokenClass::Access => &self.access,
            TokenClass::Refresh => &self.refresh,
        }
    }
}

fn decode_secret(class: TokenClass, secret: &str) -> Result<Vec<u8>, AppError> {
    let bytes = STANDARD.decode(secret.trim()).map_err(|_| {
        AppError::ConfigurationError(format!("{} signing secret is not valid base64", class.as_str()))
    })?;

    if bytes.len() < MIN_KEY_BYTES {
        return Err(AppError::ConfigurationError(format!(
            "{} signing secret must decode to at least {} bytes",
            class.as_str(),
            MIN_KEY_BYTES
        )));
    }

    Ok(bytes)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn secret(fill: u8) -> String {
        STANDARD.encode([fill; 32])
    }

    pub(crate) fn test_keys() -> Arc<KeyProvider> {
        Arc::new(KeyProvider::from_secrets(&secret(1), &secret(2)).unwrap())
    }

    #[test]
    fn test_keys_are_tagged_by_class() {
        let keys = test_keys();
        assert_eq!(keys.key_for(TokenClass::Access).class(), TokenClass::Access);
        assert_eq!(keys.key_for(TokenClass::Refresh).class(), TokenClass::Refresh);
    }

    #[test]
    fn test_invalid_base64_is_configuration_error() {
        let result = KeyProvider::from_secrets("not base64 !!!", &secret(2));
        assert!(matches!(result, Err(AppError::ConfigurationError(_))));
    }

    #[test]
    fn test_short_key_is_configuration_error() {
        let short = STANDARD.encode([7u8; 31]);
        let result = KeyProvider::from_secrets(&secret(1), &short);

        match result {
            Err(AppError::ConfigurationError(msg)) => assert!(msg.contains("refresh")),
            other => panic!("expected ConfigurationError, got {:?}", other),
        }
    }

    #[test]
    fn test_debug_output_redacts_key_material() {
        let raw = [0xABu8; 32];
        let keys = KeyProvider::from_secrets(&STANDARD.encode(raw), &secret(2)).unwrap();
        let debug = format!("{:?}", keys);

        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("171"));
        assert!(!debug.to_lowercase().contains("abab"));
    }
}
