//! # Authentication Configuration Module
//!
//! JWT 액세스/리프레시 토큰 서명과 만료 시간 설정을 관리합니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_REFRESH_SECRET="another-secret-for-refresh-tokens"
//! export JWT_EXPIRATION_SECS="900"             # 액세스 토큰 (기본 15분)
//! export JWT_REFRESH_EXPIRATION_SECS="259200"  # 리프레시 토큰 (기본 3일)
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::JwtConfig;
//!
//! let token_service = JwtTokenService::new(
//!     JwtConfig::from_env(),
//!     Arc::new(InMemoryTokenRepository::new()),
//! );
//! ```

use std::env;

const DEFAULT_ACCESS_EXPIRATION_SECS: i64 = 15 * 60;
const DEFAULT_REFRESH_EXPIRATION_SECS: i64 = 3 * 24 * 60 * 60;

/// JWT 서명 및 만료 설정
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// 액세스 토큰 서명 키
    pub secret: String,
    /// 리프레시 토큰 서명 키
    pub refresh_secret: String,
    /// 액세스 토큰 유효 기간 (초)
    pub expiration_secs: i64,
    /// 리프레시 토큰 유효 기간 (초)
    pub refresh_expiration_secs: i64,
}

impl JwtConfig {
    /// 환경 변수에서 JWT 설정을 읽습니다.
    pub fn from_env() -> Self {
        Self {
            secret: Self::secret(),
            refresh_secret: Self::refresh_secret(),
            expiration_secs: Self::expiration_secs(),
            refresh_expiration_secs: Self::refresh_expiration_secs(),
        }
    }

    pub fn secret() -> String {
        env::var("JWT_SECRET").unwrap_or_else(|_| {
            log::warn!("JWT_SECRET not set, using default (not secure for production!)");
            "your-secret-key".to_string()
        })
    }

    pub fn refresh_secret() -> String {
        env::var("JWT_REFRESH_SECRET").unwrap_or_else(|_| {
            log::warn!("JWT_REFRESH_SECRET not set, using default (not secure for production!)");
            "your-refresh-secret-key".to_string()
        })
    }

    pub fn expiration_secs() -> i64 {
        positive_secs("JWT_EXPIRATION_SECS", DEFAULT_ACCESS_EXPIRATION_SECS)
    }

    pub fn refresh_expiration_secs() -> i64 {
        positive_secs("JWT_REFRESH_EXPIRATION_SECS", DEFAULT_REFRESH_EXPIRATION_SECS)
    }
}

fn positive_secs(key: &str, default: i64) -> i64 {
    env::var(key)
        .ok()
        .and_then(|value| value.parse::<i64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(default)
}
