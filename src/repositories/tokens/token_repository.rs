use std::collections::HashMap;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;
use crate::core::errors::{AppError, AppResult};

/// 리프레시 토큰 저장소 계약
///
/// 유효한 리프레시 토큰은 `(user_id, token_id)` 쌍으로 기록됩니다.
/// 기록이 없는 토큰은 서명이 유효하더라도 이미 교체되었거나 로그아웃된 것으로 봅니다.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// 리프레시 토큰을 만료 시간(초)과 함께 저장합니다.
    async fn set_refresh_token(&self, user_id: Uuid, token_id: &str, ttl_secs: i64) -> AppResult<()>;

    /// 리프레시 토큰 기록을 삭제합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 기록이 없거나 이미 만료됨
    async fn delete_refresh_token(&self, user_id: Uuid, token_id: &str) -> AppResult<()>;
}

fn token_key(user_id: Uuid, token_id: &str) -> String {
    format!("{}:{}", user_id, token_id)
}

/// 프로세스 메모리 기반 리프레시 토큰 저장소
#[derive(Default)]
pub struct InMemoryTokenRepository {
    /// key: `"{user_id}:{token_id}"`, value: 만료 시각 (Unix timestamp)
    tokens: RwLock<HashMap<String, i64>>,
}

impl InMemoryTokenRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenRepository for InMemoryTokenRepository {
    async fn set_refresh_token(&self, user_id: Uuid, token_id: &str, ttl_secs: i64) -> AppResult<()> {
        if ttl_secs <= 0 {
            return Err(AppError::InternalError(format!(
                "리프레시 토큰 TTL은 0보다 커야 합니다: {}",
                ttl_secs
            )));
        }

        let now = Utc::now().timestamp();
        let mut tokens = self.tokens.write().await;
        // 만료된 기록은 저장 시점에 함께 정리
        tokens.retain(|_, expires_at| *expires_at > now);
        tokens.insert(token_key(user_id, token_id), now + ttl_secs);

        log::debug!("Refresh token 저장 완료 - user_id: {}, ttl: {}초", user_id, ttl_secs);
        Ok(())
    }

    async fn delete_refresh_token(&self, user_id: Uuid, token_id: &str) -> AppResult<()> {
        let now = Utc::now().timestamp();
        let removed = self.tokens.write().await.remove(&token_key(user_id, token_id));

        match removed {
            Some(expires_at) if expires_at > now => Ok(()),
            _ => {
                log::warn!(
                    "존재하지 않는 리프레시 토큰 삭제 시도 - user_id: {}, token_id: {}",
                    user_id,
                    token_id
                );
                Err(AppError::AuthenticationError(
                    "리프레시 토큰이 만료되었거나 유효하지 않습니다".to_string(),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_refresh_token_can_be_deleted_once() {
        let repo = InMemoryTokenRepository::new();
        let user_id = Uuid::new_v4();

        repo.set_refresh_token(user_id, "jti-1", 60).await.unwrap();

        assert!(repo.delete_refresh_token(user_id, "jti-1").await.is_ok());
        assert!(matches!(
            repo.delete_refresh_token(user_id, "jti-1").await,
            Err(AppError::AuthenticationError(_))
        ));
    }

    #[actix_web::test]
    async fn test_tokens_are_scoped_per_user() {
        let repo = InMemoryTokenRepository::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        repo.set_refresh_token(alice, "jti", 60).await.unwrap();

        assert!(repo.delete_refresh_token(bob, "jti").await.is_err());
        assert!(repo.delete_refresh_token(alice, "jti").await.is_ok());
    }

    #[actix_web::test]
    async fn test_zero_ttl_is_rejected() {
        let repo = InMemoryTokenRepository::new();
        assert!(repo.set_refresh_token(Uuid::new_v4(), "jti", 0).await.is_err());
    }
}
