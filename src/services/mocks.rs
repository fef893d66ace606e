//! 핸들러/미들웨어 테스트용 협력 서비스 스텁
//!
//! 두 스텁은 같은 [`CallLog`]를 공유할 수 있어 호출 순서까지 검증할 수 있습니다.

use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use uuid::Uuid;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::user::User;
use crate::domain::models::auth::AuthenticatedUser;
use crate::domain::models::token::{RefreshToken, TokenPair};
use super::auth::TokenService;
use super::users::UserService;

pub const VALID_ACCESS_TOKEN: &str = "valid-access-token";
pub const VALID_REFRESH_TOKEN: &str = "valid-refresh-token";
pub const PRIOR_TOKEN_ID: &str = "prior-token-id";

/// 호출된 메서드 이름을 순서대로 기록
#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
    fn record(&self, call: impl Into<String>) {
        self.0.lock().unwrap().push(call.into());
    }

    pub fn calls(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    pub fn count(&self, name: &str) -> usize {
        self.calls().iter().filter(|c| c.as_str() == name).count()
    }
}

pub struct StubUserService {
    pub log: CallLog,
    pub user_id: Uuid,
    pub failure: Option<AppError>,
}

impl StubUserService {
    pub fn new(log: CallLog) -> Self {
        Self { log, user_id: Uuid::new_v4(), failure: None }
    }

    pub fn failing(log: CallLog, err: AppError) -> Self {
        Self { failure: Some(err), ..Self::new(log) }
    }

    fn result(&self) -> AppResult<()> {
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl UserService for StubUserService {
    async fn signup(&self, user: &mut User) -> AppResult<()> {
        self.log.record("signup");
        self.result()?;
        user.id = Some(self.user_id);
        Ok(())
    }

    async fn signin(&self, user: &mut User) -> AppResult<()> {
        self.log.record("signin");
        self.result()?;
        user.id = Some(self.user_id);
        Ok(())
    }

    async fn get(&self, id: Uuid) -> AppResult<User> {
        self.log.record("get");
        self.result()?;
        Ok(User {
            id: Some(id),
            email: "stub@example.com".to_string(),
            password: "hash".to_string(),
            name: "Stub".to_string(),
            ..Default::default()
        })
    }

    async fn update_details(&self, _user: &mut User) -> AppResult<()> {
        self.log.record("update_details");
        self.result()
    }
}

pub struct StubTokenService {
    pub log: CallLog,
    pub failure: Option<AppError>,
    /// 마지막 `new_pair_from_user` 호출의 prior_token_id
    pub last_prior_token_id: Mutex<Option<String>>,
}

impl StubTokenService {
    pub fn new(log: CallLog) -> Self {
        Self { log, failure: None, last_prior_token_id: Mutex::new(None) }
    }

    pub fn failing(log: CallLog, err: AppError) -> Self {
        Self { failure: Some(err), ..Self::new(log) }
    }

    pub fn pair() -> TokenPair {
        TokenPair {
            access_token: "access-token".to_string(),
            refresh_token: "refresh-token".to_string(),
        }
    }

    pub fn identity() -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: Uuid::nil(),
            email: "stub@example.com".to_string(),
        }
    }
}

#[async_trait]
impl TokenService for StubTokenService {
    async fn new_pair_from_user(&self, _user: &User, prior_token_id: &str) -> AppResult<TokenPair> {
        self.log.record("new_pair_from_user");
        *self.last_prior_token_id.lock().unwrap() = Some(prior_token_id.to_string());
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(Self::pair()),
        }
    }

    async fn verify_token(&self, token: &str) -> AppResult<AuthenticatedUser> {
        self.log.record("verify_token");
        if token == VALID_ACCESS_TOKEN {
            Ok(Self::identity())
        } else {
            Err(AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string()))
        }
    }

    async fn validate_refresh_token(&self, token: &str) -> AppResult<RefreshToken> {
        self.log.record("validate_refresh_token");
        if token == VALID_REFRESH_TOKEN {
            Ok(RefreshToken {
                id: PRIOR_TOKEN_ID.to_string(),
                user_id: Uuid::nil(),
                token: token.to_string(),
            })
        } else {
            Err(AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string()))
        }
    }
}
