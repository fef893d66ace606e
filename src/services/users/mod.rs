//! 사용자 관리 서비스 모듈
//!
//! 핸들러가 의존하는 [`UserService`] 계약과 bcrypt 기반 기본 구현을 제공합니다.
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱 (환경별 cost)
//! - 이메일 중복 방지 (저장소 제약)
//! - 로그인 실패 시 이메일/비밀번호 중 무엇이 틀렸는지 노출하지 않음
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::services::users::{AccountUserService, UserService};
//!
//! let user_service: Arc<dyn UserService> = Arc::new(AccountUserService::new(user_repo));
//! let mut user = User::new_local(email, password);
//! user_service.signup(&mut user).await?;
//! ```

use async_trait::async_trait;
use uuid::Uuid;
use crate::core::errors::AppResult;
use crate::domain::entities::users::user::User;

pub mod user_service;

pub use user_service::AccountUserService;

/// 사용자 계정 서비스 계약
///
/// `&mut User`를 받는 메서드는 성공 시 저장된 상태(ID, 프로필)를 인자에 반영합니다.
#[async_trait]
pub trait UserService: Send + Sync {
    /// 새 계정을 생성하고 `user.id`를 채웁니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 이미 가입된 이메일
    async fn signup(&self, user: &mut User) -> AppResult<()>;

    /// 이메일과 평문 비밀번호를 확인하고 저장된 사용자 정보로 `user`를 채웁니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 이메일 또는 비밀번호 불일치
    async fn signin(&self, user: &mut User) -> AppResult<()>;

    /// ID로 사용자를 조회합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 존재하지 않는 사용자
    async fn get(&self, id: Uuid) -> AppResult<User>;

    /// 이름, 이메일, 웹사이트를 갱신합니다.
    async fn update_details(&self, user: &mut User) -> AppResult<()>;
}
