//! 리프레시 토큰 관리 리포지토리 모듈
//!
//! 발급된 리프레시 토큰의 ID를 사용자별로 기록합니다.
//!
//! # Features
//!
//! - **토큰 교체**: 새 토큰 쌍 발급 시 이전 리프레시 토큰 기록 삭제
//! - **재사용 차단**: 이미 교체된 토큰으로 갱신 요청 시 인증 실패
//! - **TTL 관리**: 만료된 기록은 저장 시점에 정리
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::repositories::tokens::{InMemoryTokenRepository, TokenRepository};
//!
//! let token_repo = InMemoryTokenRepository::new();
//! token_repo.set_refresh_token(user_id, &jti, 259_200).await?;
//! token_repo.delete_refresh_token(user_id, &jti).await?;
//! ```

pub mod token_repository;

pub use token_repository::*;
