//! # Configuration Module
//!
//! 계정 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리하며,
//! 값이 없으면 개발 환경에서 안전한 기본값을 사용합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 비밀번호 해싱, 서버, Rate Limiting 설정
//! - [`auth_config`] - JWT 서명 키와 토큰 만료 시간
//! - [`api_config`] - 계정 API 기본 경로와 요청 처리 제한 시간
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # 계정 API
//! export ACCOUNT_API_URL="/api/account"
//! export HANDLER_TIMEOUT="5"
//!
//! # JWT 설정
//! export JWT_SECRET="your-super-secret-key"
//! export JWT_REFRESH_SECRET="your-refresh-secret"
//!
//! # 보안 설정
//! export ENVIRONMENT="production"  # development, test, staging, production
//! export BCRYPT_COST="12"          # 4-15 범위
//! ```
//!
//! 설정 값은 기동 시점에 한 번 읽혀 [`crate::routes::RouterConfig`]로 전달되며,
//! 잘못된 값(예: 0 이하의 타임아웃)은 요청 처리 전에 거부됩니다.

pub mod data_config;
pub mod auth_config;
pub mod api_config;

pub use data_config::*;
pub use auth_config::*;
pub use api_config::*;
