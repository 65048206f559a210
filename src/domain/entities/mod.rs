//! # Domain Entities Module
//!
//! 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (사용자 엔티티)
//! ├── models/       ← 토큰 클레임, 인증 결과, 인증 컨텍스트
//! └── dto/          ← 요청 데이터 전송 객체
//! ```

pub mod users;
