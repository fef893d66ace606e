//! # Domain Entities
//!
//! 비즈니스의 핵심 개념을 나타내는 엔티티들입니다.
//!
//! - [`users`] - 사용자 계정 ([`users::User`])
//!
//! 엔티티는 저장 기술에 의존하지 않으며, 저장소 구현은
//! [`crate::repositories`] 트레이트 뒤에 숨겨집니다.

pub mod users;
