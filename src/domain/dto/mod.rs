//! # Data Transfer Objects (DTO) Module
//!
//! HTTP 경계에서 주고받는 요청/응답 본문을 정의합니다.
//!
//! 요청 DTO 는 `validator` 로 형식을 검증한 뒤에만 서비스 계층으로 전달됩니다.
//! 응답 DTO 에는 비밀번호 해시나 내부 식별자가 실리지 않습니다.
//!
//! ```rust,ignore
//! use validator::Validate;
//!
//! let request: LoginRequest = serde_json::from_str(body)?;
//! request.validate()?;
//! ```

pub mod users;

pub use users::{CurrentUserResponse, LoginRequest, RefreshTokenRequest, RegisterRequest};
