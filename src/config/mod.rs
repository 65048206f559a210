//! # Configuration Module
//!
//! 인증 코어의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`auth_config`] - JWT 서명 키 설정
//! - [`data_config`] - 실행 환경, 비밀번호 해싱, 서버 설정
//!
//! ## 설계 원칙
//!
//! - 민감한 정보(서명 키)는 환경 변수로만 제공하며 기본값이 없습니다
//! - 서명 키 설정이 잘못되면 서버는 요청을 받기 전에 종료됩니다
//! - 나머지 설정은 안전한 기본값을 가집니다
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 필수
//! export JWT_ACCESS_SIGNING_SECRET="base64-encoded-32-bytes-or-more"
//! export JWT_REFRESH_SIGNING_SECRET="another-base64-encoded-secret"
//!
//! # 선택
//! export ENVIRONMENT="production"
//! export BCRYPT_COST="12"
//! export HOST="127.0.0.1"
//! export PORT="8080"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
