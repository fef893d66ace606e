//! # Application Error Handling System
//!
//! 계정 서비스 HTTP 계층을 위한 통합 에러 처리 시스템입니다.
//! 모든 에러는 하나의 [`AppError`] 열거형으로 모이고, [`AppError::status`] 분류 함수가
//! 에러 종류를 HTTP 상태 코드로 매핑합니다.
//!
//! ## 응답 형식
//!
//! 클라이언트가 메시지 문자열이 아닌 에러 종류로 분기할 수 있도록
//! 모든 에러 응답은 동일한 JSON 형태를 가집니다.
//!
//! ```json
//! {
//!   "error": {
//!     "type": "CONFLICT",
//!     "message": "이미 사용 중인 이메일입니다: a@b.com"
//!   }
//! }
//! ```
//!
//! 입력 검증 실패의 경우 실패한 필드 목록이 추가됩니다.
//!
//! ```json
//! {
//!   "error": { "type": "BAD_REQUEST", "message": "Invalid request parameters. See invalid_args" },
//!   "invalid_args": [
//!     { "field": "password", "code": "length", "message": "비밀번호는 6-30자 사이여야 합니다" }
//!   ]
//! }
//! ```
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | ErrorKind | HTTP Status |
//! |----------|-----------|-------------|
//! | `ValidationError` / `InvalidArguments` | `BAD_REQUEST` | 400 Bad Request |
//! | `AuthenticationError` | `AUTHORIZATION` | 401 Unauthorized |
//! | `AuthorizationError` | `FORBIDDEN` | 403 Forbidden |
//! | `NotFound` | `NOT_FOUND` | 404 Not Found |
//! | `ConflictError` | `CONFLICT` | 409 Conflict |
//! | `ServiceUnavailable` | `SERVICE_UNAVAILABLE` | 503 Service Unavailable |
//! | `InternalError` / `ConfigurationError` | `INTERNAL` | 500 Internal Server Error |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! async fn signup(&self, user: &mut User) -> Result<(), AppError> {
//!     if self.user_repo.find_by_email(&user.email).await?.is_some() {
//!         return Err(AppError::ConflictError(
//!             format!("이미 사용 중인 이메일입니다: {}", user.email)
//!         ));
//!     }
//!     // ...
//!     Ok(())
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

/// 클라이언트에 노출되는 안정적인 에러 분류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    Authorization,
    BadRequest,
    Conflict,
    Forbidden,
    Internal,
    NotFound,
    ServiceUnavailable,
}

/// 검증에 실패한 요청 필드 하나
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvalidArgument {
    /// 필드 이름 (JSON 키)
    pub field: String,
    /// 실패한 검증 규칙 (`email`, `length`, `required` 등)
    pub code: String,
    /// 사람이 읽을 수 있는 메시지
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// 애플리케이션 전역 에러 타입
///
/// 계정 서비스에서 발생할 수 있는 모든 에러를 포괄합니다.
/// `actix_web::ResponseError`를 구현하므로 핸들러에서 `?`로 전파하면
/// 분류된 상태 코드와 표준 JSON 본문으로 자동 변환됩니다.
///
/// ## 에러 카테고리
///
/// - 요청 에러: `ValidationError`, `InvalidArguments` (협력 서비스 호출 전에 발생)
/// - 도메인 에러: `ConflictError`, `NotFound` (UserService가 발생)
/// - 보안 에러: `AuthenticationError`, `AuthorizationError`
/// - 미들웨어 에러: `ServiceUnavailable` (TimeoutMiddleware가 합성)
/// - 시스템 에러: `InternalError`, `ConfigurationError`
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// 요청 본문 자체가 잘못된 경우 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 필드 단위 검증 실패 (400 Bad Request)
    #[error("Invalid request parameters. See invalid_args")]
    InvalidArguments(Vec<InvalidArgument>),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409 Conflict)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족 에러 (403 Forbidden)
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 요청 처리 시간 초과 (503 Service Unavailable)
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// 설정 값 오류, 서버 기동 시점에 발생 (500 Internal Server Error)
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 에러의 분류를 반환합니다.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::ValidationError(_) | AppError::InvalidArguments(_) => ErrorKind::BadRequest,
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::ConflictError(_) => ErrorKind::Conflict,
            AppError::AuthenticationError(_) => ErrorKind::Authorization,
            AppError::AuthorizationError(_) => ErrorKind::Forbidden,
            AppError::ServiceUnavailable(_) => ErrorKind::ServiceUnavailable,
            AppError::ConfigurationError(_) | AppError::InternalError(_) => ErrorKind::Internal,
        }
    }

    /// 에러 분류에 대응하는 HTTP 상태 코드
    pub fn status(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
            ErrorKind::Authorization => StatusCode::UNAUTHORIZED,
            ErrorKind::Forbidden => StatusCode::FORBIDDEN,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 클라이언트에 전달되는 JSON 본문
    pub fn body(&self) -> serde_json::Value {
        let mut body = serde_json::json!({
            "error": {
                "type": self.kind(),
                "message": self.to_string(),
            }
        });

        if let AppError::InvalidArguments(args) = self {
            body["invalid_args"] = serde_json::json!(args);
        }

        body
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    /// HTTP 에러 응답을 생성합니다.
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status()).json(self.body())
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut args: Vec<InvalidArgument> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, field_errors)| {
                let field = field.to_string();
                field_errors.iter().map(move |e| InvalidArgument {
                    field: field.clone(),
                    code: e.code.to_string(),
                    message: e.message.as_ref().map(|m| m.to_string()),
                })
            })
            .collect();

        // HashMap 순회 순서와 무관하게 응답을 고정
        args.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.code.cmp(&b.code)));

        AppError::InvalidArguments(args)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
