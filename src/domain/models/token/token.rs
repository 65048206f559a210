//! JWT 클레임, 토큰 종류, 인증 결과
//!
//! RFC 7519 의 등록 클레임(`sub`, `iat`, `exp`)과 액세스 토큰에만 허용되는
//! 추가 클레임을 표현합니다.
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 토큰 종류
///
/// 서명 키 선택, 기본 만료 시간, 추가 클레임 허용 여부가 모두 이 값으로 결정됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    /// API 접근용 단기 토큰 (15분)
    Access,
    /// 토큰 갱신용 장기 토큰 (7일)
    Refresh,
}

impl TokenClass {
    pub fn default_ttl(&self) -> Duration {
        match self {
            TokenClass::Access => Duration::minutes(15),
            TokenClass::Refresh => Duration::days(7),
        }
    }

    /// 추가 클레임은 액세스 토큰에만 실을 수 있습니다.
    pub fn allows_extra_claims(&self) -> bool {
        matches!(self, TokenClass::Access)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenClass::Access => "access",
            TokenClass::Refresh => "refresh",
        }
    }
}

/// JWT 토큰의 클레임(Payload) 구조체
///
/// ## 클레임 구성
///
/// - `sub`: 토큰의 주체 (항상 사용자명, 내부 ID 가 아님)
/// - `iat`: 토큰 발급 시간 (Unix timestamp, 초)
/// - `exp`: 토큰 만료 시간 (Unix timestamp, 초)
/// - 그 외: 액세스 토큰에만 허용되는 추가 클레임
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Claims {
    /// 등록 클레임과 추가 클레임으로 클레임 집합을 만듭니다.
    ///
    /// 추가 클레임에 `sub`, `iat`, `exp` 가 들어 있으면 버려집니다.
    pub fn new(subject: &str, issued_at: i64, expires_at: i64, mut extra: Map<String, Value>) -> Self {
        for registered in ["sub", "iat", "exp"] {
            extra.remove(registered);
        }

        Self {
            sub: subject.to_string(),
            iat: issued_at,
            exp: expires_at,
            extra,
        }
    }

    pub fn subject(&self) -> &str {
        &self.sub
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.iat, 0).unwrap_or_default()
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_default()
    }
}

/// 클라이언트에게 전달되는 토큰 쌍
///
/// 응답 JSON 형식: `{ "token": "...", "refreshToken": "..." }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticationResult {
    /// 액세스 토큰
    #[serde(rename = "token")]
    pub access_token: String,
    /// 리프레시 토큰
    #[serde(rename = "refreshToken")]
    pub refresh_token: String,
}
