//! # Core Module
//!
//! 계정 서비스 전반에서 공유하는 핵심 타입을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입 정의
//! - **분류 함수**: `AppError::status()`로 에러 종류 → HTTP 상태 코드 매핑
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//! - **검증 통합**: `validator::ValidationErrors` → `AppError::InvalidArguments` 자동 변환
//!
//! 서비스 인스턴스는 전역 레지스트리 없이 [`crate::routes::RouterConfig`]를 통해
//! 명시적으로 주입됩니다.

pub mod errors;

pub use errors::*;
