//! 인증 토큰 서비스 모듈
//!
//! 세션 발급과 요청 인증에 쓰이는 [`TokenService`] 계약과
//! HMAC-SHA256 JWT 기반 기본 구현을 제공합니다.
//!
//! # Security
//!
//! - 액세스/리프레시 토큰은 서로 다른 서명 키 사용
//! - 리프레시 토큰은 한 번만 사용 가능 (갱신 시 이전 토큰 폐기)
//! - 만료 시간은 `JwtConfig`에서 관리
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{JwtTokenService, TokenService};
//!
//! let tokens = token_service.new_pair_from_user(&user, "").await?;
//! let identity = token_service.verify_token(&tokens.access_token).await?;
//! ```

use async_trait::async_trait;
use crate::core::errors::AppResult;
use crate::domain::entities::users::user::User;
use crate::domain::models::auth::AuthenticatedUser;
use crate::domain::models::token::{RefreshToken, TokenPair};

pub mod token_service;

pub use token_service::JwtTokenService;

/// 토큰 발급/검증 서비스 계약
#[async_trait]
pub trait TokenService: Send + Sync {
    /// 저장된 사용자에게 새 토큰 쌍을 발급합니다.
    ///
    /// `prior_token_id`가 비어 있지 않으면 해당 리프레시 토큰을 먼저 폐기합니다.
    /// 폐기할 토큰이 없으면 `AppError::AuthenticationError`를 반환합니다.
    async fn new_pair_from_user(&self, user: &User, prior_token_id: &str) -> AppResult<TokenPair>;

    /// 액세스 토큰을 검증하고 요청 주체를 돌려줍니다.
    async fn verify_token(&self, token: &str) -> AppResult<AuthenticatedUser>;

    /// 리프레시 토큰의 서명과 만료를 검증합니다.
    async fn validate_refresh_token(&self, token: &str) -> AppResult<RefreshToken>;
}
