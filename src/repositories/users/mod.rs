//! 사용자 데이터 액세스 계층
//!
//! ```rust,ignore
//! use crate::repositories::users::{IdentityStore, InMemoryIdentityStore};
//!
//! let store = InMemoryIdentityStore::new();
//! let identity = store.find_by_username("alice").await?;
//! ```

pub mod user_repo;

pub use user_repo::{IdentityStore, InMemoryIdentityStore};
