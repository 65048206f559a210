//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 인증 코어는 [`users::IdentityStore`] 트레이트만 의존합니다.
//! 기본 구현은 메모리 기반이며, 실제 저장소는 같은 트레이트를 구현해 주입합니다.

pub mod users;
