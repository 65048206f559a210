//! # Domain Layer Module
//!
//! 인증 코어의 도메인 타입을 모아 둔 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - 사용자 엔티티 (Identity, Role)
//! ├── models    - 토큰 클레임, 토큰 종류, 인증 결과, 요청 인증 컨텍스트
//! └── dto       - HTTP 요청/응답 본문
//!      │
//!      ▼
//! Application Layer (services)
//!      │
//!      ▼
//! Infrastructure Layer (repositories)
//! ```
//!
//! 도메인 타입은 서비스나 저장소에 의존하지 않습니다.
//! 예외적으로 [`models::auth::AuthenticatedUser`] 는 actix-web 추출자를 구현합니다.

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::users::{Identity, Role};
pub use models::{AuthenticatedUser, AuthenticationResult, Claims, TokenClass};
