//! 미들웨어 모듈
//!
//! 계정 API의 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 1. 타임아웃 미들웨어 (TimeoutMiddleware)
//! - 요청 전체에 하나의 처리 기한 적용
//! - 기한 초과 시 503 응답 후 진행 중인 처리 중단
//!
//! ### 2. 인증 미들웨어 (AuthMiddleware)
//! - Bearer 토큰 추출 및 `TokenService`를 통한 검증
//! - 사용자 정보를 request extension에 저장
//! - 실패 시 401 응답, 하위 핸들러는 호출되지 않음
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::web;
//! use crate::middlewares::{AuthMiddleware, TimeoutMiddleware};
//!
//! web::scope("/api/account")
//!     .wrap(TimeoutMiddleware::new(Duration::from_secs(5))?)
//!     .service(
//!         web::resource("/me")
//!             .wrap(AuthMiddleware::new(token_service.clone()))
//!             .route(web::get().to(me)),
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;
pub mod timeout_middleware;

// 미들웨어 재export
pub use auth_middleware::AuthMiddleware;
pub use timeout_middleware::TimeoutMiddleware;
