//! 애플리케이션 서비스 계층
//!
//! HTTP 핸들러와 미들웨어는 이 계층의 [`auth::AuthenticationService`] 와
//! [`auth::TokenService`] 만 사용합니다.

pub mod auth;
