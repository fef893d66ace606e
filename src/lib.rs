//! 계정 서비스 HTTP 진입 계층
//!
//! 회원가입/로그인 요청을 토큰 쌍 발급으로 연결하고, 이후 요청을
//! 인증 미들웨어와 요청 처리 기한 아래에서 처리하는 Actix-web 기반 서비스입니다.
//!
//! # Features
//!
//! - **세션 발급**: 회원가입, 로그인, 리프레시 토큰 교체
//! - **JWT 인증**: Bearer 액세스 토큰 검증 미들웨어
//! - **처리 기한**: 요청 전체에 적용되는 타임아웃 미들웨어
//! - **명시적 의존성**: 협력 서비스는 `RouterConfig`로 주입 (전역 상태 없음)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← Timeout → [Auth] 미들웨어 체인
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 바인딩/검증, 응답 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← UserService, TokenService 트레이트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 사용자/리프레시 토큰 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use account_service::routes::{AccountRouter, RouterConfig};
//!
//! let router = AccountRouter::new(RouterConfig { /* ... */ })?;
//! let app = App::new().configure(|cfg| router.configure(cfg));
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
