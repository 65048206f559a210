//! # Domain Models Module
//!
//! 영속되지 않는 값 객체들을 정의합니다.
//!
//! - [`token`] - JWT 클레임, 토큰 종류, 인증 결과(토큰 쌍)
//! - [`auth`] - 요청 단위 인증 컨텍스트와 미들웨어 인증 모드
//!
//! 엔티티([`crate::domain::entities`])와 달리 식별자가 없고 값 자체가 의미를 가집니다.
//! 발급된 토큰은 불변이며 서버는 토큰 상태를 저장하지 않습니다.

pub mod auth;
pub mod token;

pub use auth::{AuthMode, AuthenticatedUser, OptionalUser, RequiredRole};
pub use token::{AuthenticationResult, Claims, TokenClass};
