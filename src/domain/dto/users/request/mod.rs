//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환하고
//! `validator` 크레이트로 검증하는 요청 객체들입니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성 (실패 시 `AppError::ValidationError`)
//! 2. **형식 검증**: 필수 여부, 이메일, 길이, URL 규칙 (실패 시 `AppError::InvalidArguments`)
//!
//! 필수 필드는 `Option<String>`으로 선언하고 `required` 규칙을 붙입니다.
//! 이렇게 하면 누락된 필드도 다른 규칙 위반과 같은 필드 단위 에러로 보고됩니다.

pub mod auth_request;
pub mod details_request;

pub use auth_request::{CredentialsRequest, SigninRequest, SignupRequest};
pub use details_request::UpdateDetailsRequest;
