//! # Domain Layer Module
//!
//! 계정 서비스의 도메인 타입을 모아 둔 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - 사용자 엔티티 (User)
//! ├── dto       - HTTP 요청 DTO와 검증 규칙
//! └── models    - 토큰 쌍, JWT 클레임, 요청 범위 인증 정보
//!      │
//!      ▼
//! Service Layer (UserService, TokenService)
//!      │
//!      ▼
//! Repository Layer
//! ```

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::users::User;
pub use dto::{CredentialsRequest, SigninRequest, SignupRequest, TokensRequest, UpdateDetailsRequest};
pub use models::auth::AuthenticatedUser;
pub use models::token::{AccessClaims, RefreshClaims, RefreshToken, TokenPair};
