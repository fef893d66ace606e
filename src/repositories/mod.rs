//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 저장소는 트레이트로 정의되고 서비스에는 `Arc<dyn ...>`로 주입됩니다.
//! 기본 구현은 프로세스 메모리를 사용하며, 다른 저장 기술로 교체해도
//! 서비스와 핸들러 코드는 바뀌지 않습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::{InMemoryUserRepository, UserRepository};
//!
//! let user_repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
//! let user = user_repo.find_by_email("user@example.com").await?;
//! ```

pub mod users;
pub mod tokens;

pub use users::{InMemoryUserRepository, UserRepository};
pub use tokens::{InMemoryTokenRepository, TokenRepository};
