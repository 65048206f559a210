//! 대화형 어시스턴트 백엔드 인증 코어
//!
//! 다른 모든 API 를 보호하는 서명된 세션 자격 증명(JWT)을 발급, 검증, 갱신합니다.
//! 서버 측 세션 저장소 없이 상태 없는 요청 처리만으로 동작합니다.
//!
//! # Features
//!
//! - **서명 키 관리**: 액세스/리프레시 토큰별 HMAC 키, 기동 시 한 번 해석
//! - **토큰 발급/검증**: HS256, 액세스 15분, 리프레시 7일, 만료 유예 없음
//! - **인증 흐름**: 회원가입, 로그인, 토큰 갱신
//! - **베어러 인증 미들웨어**: `Authorization: Bearer <token>` 기반 요청 인증
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Handlers / MW   │ ← 요청 검증, 베어러 토큰 인증
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← KeyProvider → TokenService → AuthenticationService
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← IdentityStore (외부 협력자)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use chatbot_auth_backend::services::auth::{KeyProvider, TokenService};
//!
//! let keys = KeyProvider::initialize()?;
//! let tokens = TokenService::new(keys);
//! let pair = tokens.issue_token_pair(&identity)?;
//! ```

pub mod config;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod middlewares;
pub mod repositories;
pub mod routes;
pub mod services;
