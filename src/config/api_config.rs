//! 계정 API 라우팅 설정
//!
//! 라우트의 기본 경로와 요청 전체에 적용되는 처리 시간 제한을 읽습니다.
//!
//! ```bash
//! export ACCOUNT_API_URL="/api/account"
//! export HANDLER_TIMEOUT="5"   # 초 단위, 0 이하는 기동 시점에 거부
//! export ACCOUNT_API_MIDDLEWARE="true"  # false면 인증/타임아웃 미들웨어 생략
//! ```

use std::env;
use std::time::Duration;

use crate::core::errors::{AppError, AppResult};

const DEFAULT_BASE_URL: &str = "/api/account";
const DEFAULT_HANDLER_TIMEOUT_SECS: &str = "5";

pub struct AccountApiConfig;

impl AccountApiConfig {
    /// 모든 계정 라우트가 등록될 기본 경로
    pub fn base_url() -> String {
        env::var("ACCOUNT_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
    }

    /// `HANDLER_TIMEOUT` 환경 변수에서 요청 처리 제한 시간을 읽습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigurationError` - 숫자가 아니거나 0 이하인 경우
    pub fn handler_timeout() -> AppResult<Duration> {
        let raw = env::var("HANDLER_TIMEOUT")
            .unwrap_or_else(|_| DEFAULT_HANDLER_TIMEOUT_SECS.to_string());
        Self::parse_timeout_secs(&raw)
    }

    /// 인증/타임아웃 미들웨어 적용 여부 (기본값 true)
    pub fn enable_middleware() -> bool {
        env::var("ACCOUNT_API_MIDDLEWARE")
            .map(|v| Self::parse_flag(&v))
            .unwrap_or(true)
    }

    fn parse_flag(raw: &str) -> bool {
        !matches!(raw.trim().to_lowercase().as_str(), "false" | "0" | "no" | "off")
    }

    pub fn parse_timeout_secs(raw: &str) -> AppResult<Duration> {
        let secs = raw.trim().parse::<i64>().map_err(|e| {
            AppError::ConfigurationError(format!("HANDLER_TIMEOUT 파싱 실패 ({}): {}", raw, e))
        })?;

        if secs <= 0 {
            return Err(AppError::ConfigurationError(format!(
                "HANDLER_TIMEOUT은 0보다 커야 합니다: {}",
                secs
            )));
        }

        Ok(Duration::from_secs(secs as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timeout_secs() {
        assert_eq!(
            AccountApiConfig::parse_timeout_secs("5").unwrap(),
            Duration::from_secs(5)
        );
        assert_eq!(
            AccountApiConfig::parse_timeout_secs(" 12 ").unwrap(),
            Duration::from_secs(12)
        );
    }

    #[test]
    fn test_zero_and_negative_timeouts_are_rejected() {
        assert!(matches!(
            AccountApiConfig::parse_timeout_secs("0"),
            Err(AppError::ConfigurationError(_))
        ));
        assert!(matches!(
            AccountApiConfig::parse_timeout_secs("-3"),
            Err(AppError::ConfigurationError(_))
        ));
        assert!(matches!(
            AccountApiConfig::parse_timeout_secs("soon"),
            Err(AppError::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_parse_flag() {
        assert!(AccountApiConfig::parse_flag("true"));
        assert!(AccountApiConfig::parse_flag("1"));
        assert!(!AccountApiConfig::parse_flag("false"));
        assert!(!AccountApiConfig::parse_flag(" OFF "));
    }

    #[test]
    fn test_base_url_default() {
        if env::var("ACCOUNT_API_URL").is_err() {
            assert_eq!(AccountApiConfig::base_url(), "/api/account");
        }
    }
}
