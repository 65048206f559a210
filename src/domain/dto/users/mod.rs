//! 사용자 인증 관련 DTO
//!
//! - `request` - 회원가입, 로그인, 토큰 갱신 요청 본문
//! - `response` - 인증된 사용자 조회 응답

pub mod request;
pub mod response;

pub use request::{LoginRequest, RefreshTokenRequest, RegisterRequest};
pub use response::CurrentUserResponse;
