//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 핸들러와 미들웨어는 이 모듈의 트레이트에만 의존하며, 구현체는
//! `main`에서 `Arc<dyn ...>`로 생성되어 라우터 설정을 통해 주입됩니다.
//!
//! # Features
//!
//! - 사용자 생명주기 관리 (가입, 로그인, 조회, 프로필 수정)
//! - JWT 액세스/리프레시 토큰 발급과 검증
//! - 리프레시 토큰 교체
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::services::{auth::TokenService, users::UserService};
//!
//! let user_service: Arc<dyn UserService> = Arc::new(AccountUserService::new(user_repo));
//! let token_service: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(JwtConfig::from_env(), token_repo));
//! ```

pub mod users;
pub mod auth;

#[cfg(test)]
pub mod mocks;
