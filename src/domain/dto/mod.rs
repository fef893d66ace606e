//! # Data Transfer Objects
//!
//! HTTP 계층과 서비스 계층 사이의 계약을 정의하는 요청 객체들입니다.
//!
//! - [`users`] - 회원가입/로그인/프로필 수정 요청
//! - [`tokens`] - 토큰 갱신 요청

pub mod users;
pub mod tokens;

pub use users::request::{CredentialsRequest, SigninRequest, SignupRequest, UpdateDetailsRequest};
pub use tokens::TokensRequest;
