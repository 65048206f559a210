//! # Runtime Configuration Module
//!
//! 실행 환경, 비밀번호 해싱 비용, 서버 바인딩 주소 설정을 관리합니다.
//!
//! ```bash
//! export ENVIRONMENT="production"  # development, test, staging, production
//! export BCRYPT_COST="12"          # 4-15 범위
//! export HOST="127.0.0.1"
//! export PORT="8080"
//! ```

use std::env;

/// 실행 환경
///
/// bcrypt cost 처럼 환경마다 달라지는 기본값을 고르는 데 쓰입니다.
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 로컬 개발 (낮은 해싱 비용)
    Development,
    /// 자동화 테스트
    Test,
    /// 배포 전 검증용
    Staging,
    /// 운영 환경, 값을 알 수 없을 때의 기본값
    Production,
}

impl Environment {
    /// `ENVIRONMENT` 환경 변수에서 현재 환경을 읽습니다.
    ///
    /// # Returns
    ///
    /// 변수가 없거나 인식할 수 없는 값이면 `Environment::Production`
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// if Environment::current() == Environment::Development {
    ///     log::debug!("개발 모드로 실행중");
    /// }
    /// ```
    pub fn current() -> Self {
        env::var("ENVIRONMENT")
            .map(|value| Self::from_str(&value))
            .unwrap_or(Environment::Production)
    }

    /// 환경 이름을 해석합니다.
    ///
    /// # Arguments
    ///
    /// * `s` - 환경 이름 (대소문자 구분 없음, `dev`/`testing`/`stage` 같은 약칭 허용)
    ///
    /// # Returns
    ///
    /// 대응하는 `Environment`. 알 수 없는 이름은 `Production` 으로 취급합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 비밀번호 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// bcrypt cost 를 반환합니다.
    ///
    /// `BCRYPT_COST` 가 4-15 범위의 값이면 그대로 사용하고,
    /// 아니면 실행 환경별 기본값을 사용합니다.
    ///
    /// # Returns
    ///
    /// 4-15 범위의 cost 값
    ///
    /// # Environment Defaults
    ///
    /// - Development / Test: 4
    /// - Staging: 10
    /// - Production: 12
    pub fn bcrypt_cost() -> u32 {
        if let Ok(cost_str) = env::var("BCRYPT_COST") {
            if let Ok(cost) = cost_str.parse::<u32>() {
                if (4..=15).contains(&cost) {
                    return cost;
                }
            }
            log::warn!("BCRYPT_COST 값이 유효하지 않아 환경별 기본값을 사용합니다");
        }

        Self::bcrypt_cost_for_env(&Environment::current())
    }

    /// 주어진 환경의 기본 bcrypt cost
    ///
    /// # Arguments
    ///
    /// * `env` - 기본값을 조회할 실행 환경
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// HTTP 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// `PORT` 환경 변수, 없거나 숫자가 아니면 8080
    pub fn port() -> u16 {
        env::var("PORT")
            .ok()
            .and_then(|port| port.parse().ok())
            .unwrap_or(8080)
    }

    /// `HOST` 환경 변수, 기본값 `127.0.0.1`
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    /// `HttpServer::bind` 에 넘길 `host:port` 문자열
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}
