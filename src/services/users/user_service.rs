//! # 사용자 관리 서비스 구현
//!
//! 계정 생성, 로그인, 조회, 프로필 수정 등 사용자 생명주기의 비즈니스 로직입니다.
//!
//! ## 보안 설계
//!
//! - **bcrypt 해싱**: 환경별 cost (`PasswordConfig::bcrypt_cost`)로 평문 비밀번호를 해싱
//! - **솔트 자동 생성**: bcrypt가 해시마다 고유 솔트를 생성
//! - **실패 메시지 통일**: 존재하지 않는 이메일과 틀린 비밀번호를 같은 에러로 응답
//!
//! ```text
//! Handler ──▶ AccountUserService ──▶ dyn UserRepository
//!               • 비밀번호 해싱/검증
//!               • ID 부여
//! ```

use std::sync::Arc;
use async_trait::async_trait;
use actix_web::web;
use bcrypt::{hash, verify};
use uuid::Uuid;
use crate::{
    config::PasswordConfig,
    core::errors::{AppError, AppResult, ErrorContext},
    domain::entities::users::user::User,
    repositories::users::user_repo::UserRepository,
};
use super::UserService;

const INVALID_CREDENTIALS: &str = "잘못된 이메일 또는 비밀번호입니다";

/// bcrypt 기반 사용자 서비스
///
/// 저장소는 `Arc<dyn UserRepository>`로 주입되므로 여러 워커가 하나의 저장소를 공유합니다.
///
/// ```rust,ignore
/// let service = AccountUserService::new(Arc::new(InMemoryUserRepository::new()));
/// let mut user = User::new_local("john@example.com".into(), "secret1".into());
/// service.signup(&mut user).await?;
/// assert!(user.id.is_some());
/// ```
pub struct AccountUserService {
    /// 사용자 데이터 액세스 리포지토리
    user_repo: Arc<dyn UserRepository>,
    bcrypt_cost: u32,
}

impl AccountUserService {
    /// 현재 환경의 bcrypt cost로 서비스를 생성합니다.
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self::with_cost(user_repo, PasswordConfig::bcrypt_cost())
    }

    pub fn with_cost(user_repo: Arc<dyn UserRepository>, bcrypt_cost: u32) -> Self {
        Self { user_repo, bcrypt_cost }
    }
}

#[async_trait]
impl UserService for AccountUserService {
    async fn signup(&self, user: &mut User) -> AppResult<()> {
        let start_time = std::time::Instant::now();

        // bcrypt는 CPU 집약 작업이므로 blocking 스레드풀에서 실행
        let password = user.password.clone();
        let cost = self.bcrypt_cost;
        let password_hash = web::block(move || hash(password, cost))
            .await
            .context("비밀번호 해싱 작업 실패")?
            .context("비밀번호 해싱 실패")?;
        log::debug!("Password hashing took: {:?}", start_time.elapsed());

        let mut stored = user.clone();
        stored.id = Some(Uuid::new_v4());
        stored.password = password_hash;

        self.user_repo.create(&stored).await?;

        // 저장에 성공한 경우에만 호출자의 사용자에 ID를 반영
        user.id = stored.id;
        user.password = stored.password;

        log::info!("Total user creation took: {:?}", start_time.elapsed());
        Ok(())
    }

    async fn signin(&self, user: &mut User) -> AppResult<()> {
        let stored = self
            .user_repo
            .find_by_email(&user.email)
            .await?
            .ok_or_else(|| {
                log::warn!("존재하지 않는 이메일로 로그인 시도: {}", user.email);
                AppError::AuthenticationError(INVALID_CREDENTIALS.to_string())
            })?;

        let password = user.password.clone();
        let password_hash = stored.password.clone();
        let matches = web::block(move || verify(password, &password_hash))
            .await
            .context("비밀번호 검증 작업 실패")?
            .with_context(|| format!("비밀번호 검증 실패 - user_id: {:?}", stored.id))?;

        if !matches {
            log::warn!("비밀번호 불일치 - user_id: {:?}", stored.id);
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
        }

        *user = stored;
        Ok(())
    }

    async fn get(&self, id: Uuid) -> AppResult<User> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
    }

    async fn update_details(&self, user: &mut User) -> AppResult<()> {
        let id = user
            .id
            .ok_or_else(|| AppError::InternalError("수정할 사용자에 ID가 없습니다".to_string()))?;

        // 비밀번호와 이미지는 이 경로로 바뀌지 않음
        let mut stored = self.get(id).await?;
        stored.name = user.name.clone();
        stored.email = user.email.clone();
        stored.website = user.website.clone();

        self.user_repo.update(&stored).await?;
        *user = stored;
        Ok(())
    }
}
