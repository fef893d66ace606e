//! # HTTP Request Handlers Module
//!
//! 계정 API의 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 핸들러는 요청을 바인딩/검증하고 협력 서비스를 호출한 뒤 결과를 HTTP 응답으로 변환합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   TimeoutMiddleware → [AuthMiddleware]
//! ├─────────────────────────────────────────────┤
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   dyn UserService / dyn TokenService            ← Service Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 에러 처리
//!
//! 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환합니다.
//! 협력 서비스의 에러는 `?`로 전파되고, `AppError`의 `ResponseError` 구현이
//! 상태 코드와 `{"error": ...}` 본문을 결정합니다.
//!
//! ## 모듈 구성
//!
//! - **`auth`**: 세션 발급 엔드포인트 (`/signup`, `/signin`, `/signout`, `/tokens`)
//! - **`users`**: 인증된 사용자 엔드포인트 (`/me`, `/image`, `/details`)

use std::sync::Arc;
use crate::services::{auth::TokenService, users::UserService};

pub mod auth;
pub mod users;

/// 핸들러가 공유하는 협력 서비스 묶음
///
/// `web::Data<AccountHandler>`로 등록되며, 워커 간에는 `Arc`만 복제됩니다.
#[derive(Clone)]
pub struct AccountHandler {
    pub user_service: Arc<dyn UserService>,
    pub token_service: Arc<dyn TokenService>,
}

impl AccountHandler {
    pub fn new(user_service: Arc<dyn UserService>, token_service: Arc<dyn TokenService>) -> Self {
        Self { user_service, token_service }
    }
}

/// 아직 구현되지 않은 엔드포인트의 고정 응답
pub(crate) fn placeholder(name: &str) -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(serde_json::json!({
        "hello": format!("it's {}", name)
    }))
}
