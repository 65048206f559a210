//! HTTP 핸들러 모듈
//!
//! 요청 본문 검증과 서비스 호출, 응답 직렬화만 담당합니다.
//! 에러는 [`AppError`](crate::errors::AppError) 의 `ResponseError` 구현으로 HTTP 응답이 됩니다.

pub mod auth;
