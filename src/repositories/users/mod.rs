//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserRepository`](user_repo::UserRepository) 트레이트와 메모리 기반 구현을 제공합니다.

pub mod user_repo;

pub use user_repo::{InMemoryUserRepository, UserRepository};
