//! # 인증 서비스 모듈
//!
//! 토큰 기반 인증 코어를 구성합니다.
//!
//! ```text
//! KeyProvider ─► TokenService (발급 / 검증 / 클레임 추출) ─► AuthenticationService
//!                     │
//!                     └─► TokenObserver (감사 이벤트)
//! ```
//!
//! - [`key_provider`] - 토큰 종류별 HMAC 서명 키
//! - [`token_service`] - 토큰 발급
//! - [`token_validator`] - 서명/만료 검증
//! - [`claim_extractor`] - 클레임 및 베어러 헤더 처리
//! - [`token_audit`] - 비밀 정보가 없는 감사 이벤트
//! - [`credential_verifier`] - 비밀번호 인증과 해싱
//! - [`authentication_service`] - 회원가입/로그인/갱신 흐름

pub mod key_provider;
pub mod token_service;
pub mod token_validator;
pub mod claim_extractor;
pub mod token_audit;
pub mod credential_verifier;
pub mod authentication_service;

pub use key_provider::{KeyProvider, SigningKey};
pub use token_service::TokenService;
pub use claim_extractor::extract_bearer_token;
pub use token_audit::{LogTokenObserver, TokenObserver, TokenOutcome};
pub use credential_verifier::{BcryptCredentialVerifier, CredentialVerifier};
pub use authentication_service::AuthenticationService;
