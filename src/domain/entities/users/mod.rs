//! Users Entity Module
//!
//! 인증 대상 사용자 엔티티([`Identity`])와 역할([`Role`])을 정의합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::{Identity, Role};
//!
//! let identity = Identity::new(
//!     "Alice Kim".to_string(),
//!     "alice@example.com".to_string(),
//!     "alice".to_string(),
//!     hashed_password,
//! );
//! assert_eq!(identity.role, Role::User);
//! ```

pub mod identity;

pub use identity::{Identity, Role};
