//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층입니다.
//! 서비스는 [`UserRepository`] 트레이트에만 의존하며, 기본 구현인
//! [`InMemoryUserRepository`]는 프로세스 메모리에 사용자를 보관합니다.
//!
//! ## 특징
//!
//! - **이메일 유니크 제약**: 생성/수정 시 다른 사용자와 이메일이 겹치면 `ConflictError`
//! - **동시성 안전**: `tokio::sync::RwLock`으로 보호되어 여러 워커에서 공유 가능

use std::collections::HashMap;
use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::user::User;

/// 사용자 저장소 계약
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// ID가 채워진 사용자를 저장합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 같은 이메일의 사용자가 이미 존재
    /// * `AppError::InternalError` - ID가 없는 사용자
    async fn create(&self, user: &User) -> AppResult<()>;

    /// 기존 사용자를 덮어씁니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 ID의 사용자가 없음
    /// * `AppError::ConflictError` - 다른 사용자가 같은 이메일을 사용 중
    async fn update(&self, user: &User) -> AppResult<()>;
}

/// 프로세스 메모리 기반 사용자 저장소
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn email_taken(users: &HashMap<Uuid, User>, email: &str, except: Uuid) -> bool {
    users
        .values()
        .any(|u| u.id != Some(except) && u.email.eq_ignore_ascii_case(email))
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn create(&self, user: &User) -> AppResult<()> {
        let id = user
            .id
            .ok_or_else(|| AppError::InternalError("저장할 사용자에 ID가 없습니다".to_string()))?;

        // 중복 검사와 삽입을 같은 쓰기 잠금 안에서 수행
        let mut users = self.users.write().await;
        if email_taken(&users, &user.email, id) {
            return Err(AppError::ConflictError(format!(
                "이미 사용 중인 이메일입니다: {}",
                user.email
            )));
        }

        users.insert(id, user.clone());
        log::debug!("사용자 저장 완료 - ID: {}", id);
        Ok(())
    }

    async fn update(&self, user: &User) -> AppResult<()> {
        let id = user
            .id
            .ok_or_else(|| AppError::InternalError("수정할 사용자에 ID가 없습니다".to_string()))?;

        let mut users = self.users.write().await;
        if !users.contains_key(&id) {
            return Err(AppError::NotFound("사용자를 찾을 수 없습니다".to_string()));
        }
        if email_taken(&users, &user.email, id) {
            return Err(AppError::ConflictError(format!(
                "이미 사용 중인 이메일입니다: {}",
                user.email
            )));
        }

        users.insert(id, user.clone());
        Ok(())
    }
}
