//! JWT 토큰 관리 서비스 구현
//!
//! 액세스 토큰과 리프레시 토큰의 생성, 검증, 교체를 담당합니다.
//! 리프레시 토큰의 ID(jti)는 토큰 저장소에 기록되며, 기록이 남아 있는 동안만 유효합니다.

use std::sync::Arc;
use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;
use crate::{
    config::JwtConfig,
    core::errors::{AppError, AppResult},
    domain::entities::users::user::User,
    domain::models::auth::AuthenticatedUser,
    domain::models::token::{AccessClaims, RefreshClaims, RefreshToken, TokenPair},
    repositories::tokens::TokenRepository,
};
use super::TokenService;

/// HMAC-SHA256 JWT 토큰 서비스
///
/// 액세스 토큰(기본 15분)과 리프레시 토큰(기본 3일)을 서로 다른 키로 서명합니다.
pub struct JwtTokenService {
    config: JwtConfig,
    token_repo: Arc<dyn TokenRepository>,
}

impl JwtTokenService {
    pub fn new(config: JwtConfig, token_repo: Arc<dyn TokenRepository>) -> Self {
        Self { config, token_repo }
    }

    /// 사용자를 위한 JWT 액세스 토큰 생성
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 생성 실패 또는 사용자 ID 없음
    fn generate_access_token(&self, user_id: Uuid, email: &str) -> AppResult<String> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(self.config.expiration_secs);

        let claims = AccessClaims {
            sub: user_id.to_string(),
            email: email.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let encoding_key = EncodingKey::from_secret(self.config.secret.as_ref());
        encode(&Header::default(), &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// 새 jti를 가진 리프레시 토큰 생성
    ///
    /// 반환값은 `(jti, 서명된 토큰)`입니다.
    fn generate_refresh_token(&self, user_id: Uuid) -> AppResult<(String, String)> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(self.config.refresh_expiration_secs);
        let token_id = Uuid::new_v4().to_string();

        let claims = RefreshClaims {
            sub: user_id.to_string(),
            jti: token_id.clone(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let encoding_key = EncodingKey::from_secret(self.config.refresh_secret.as_ref());
        let token = encode(&Header::default(), &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("리프레시 토큰 생성 실패: {}", e)))?;

        Ok((token_id, token))
    }
}

fn decode_error(e: jsonwebtoken::errors::Error) -> AppError {
    match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
            AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
        }
        _ => {
            log::debug!("토큰 검증 실패: {}", e);
            AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string())
        }
    }
}

fn parse_subject(sub: &str) -> AppResult<Uuid> {
    Uuid::parse_str(sub)
        .map_err(|_| AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string()))
}

#[async_trait]
impl TokenService for JwtTokenService {
    async fn new_pair_from_user(&self, user: &User, prior_token_id: &str) -> AppResult<TokenPair> {
        let user_id = user
            .id
            .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?;

        // 이미 교체된 토큰이면 여기서 인증 실패
        if !prior_token_id.is_empty() {
            self.token_repo.delete_refresh_token(user_id, prior_token_id).await?;
        }

        let access_token = self.generate_access_token(user_id, &user.email)?;
        let (token_id, refresh_token) = self.generate_refresh_token(user_id)?;

        self.token_repo
            .set_refresh_token(user_id, &token_id, self.config.refresh_expiration_secs)
            .await?;

        log::debug!("토큰 쌍 발급 완료 - user_id: {}", user_id);
        Ok(TokenPair { access_token, refresh_token })
    }

    async fn verify_token(&self, token: &str) -> AppResult<AuthenticatedUser> {
        let decoding_key = DecodingKey::from_secret(self.config.secret.as_ref());

        let claims = decode::<AccessClaims>(token, &decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(decode_error)?;

        Ok(AuthenticatedUser {
            user_id: parse_subject(&claims.sub)?,
            email: claims.email,
        })
    }

    async fn validate_refresh_token(&self, token: &str) -> AppResult<RefreshToken> {
        let decoding_key = DecodingKey::from_secret(self.config.refresh_secret.as_ref());

        let claims = decode::<RefreshClaims>(token, &decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(decode_error)?;

        Ok(RefreshToken {
            id: claims.jti,
            user_id: parse_subject(&claims.sub)?,
            token: token.to_string(),
        })
    }
}
