//! # Domain Models
//!
//! 엔티티는 아니지만 인증 프로토콜에 필요한 값 객체들입니다.
//!
//! - [`auth`] - 인증 미들웨어가 요청에 부착하는 [`auth::AuthenticatedUser`]
//! - [`token`] - 토큰 쌍([`token::TokenPair`])과 JWT 클레임

pub mod auth;
pub mod token;
