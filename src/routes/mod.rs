//! API 라우트 설정 모듈
//!
//! 계정 API의 엔드포인트를 설정된 기본 경로 아래에 등록합니다.
//! 협력 서비스와 미들웨어 설정은 [`RouterConfig`] 하나로 전달되며 전역 상태는 없습니다.
//!
//! # Route Groups
//!
//! ## 인증 불필요
//! - `POST {base}/signup` - 회원가입
//! - `POST {base}/signin` - 로그인
//! - `POST {base}/signout` - 로그아웃
//! - `POST {base}/tokens` - 토큰 갱신
//!
//! ## 인증 필요 (Bearer 토큰)
//! - `GET {base}/me` - 현재 사용자 조회
//! - `POST {base}/image`, `DELETE {base}/image` - 프로필 이미지
//! - `PUT {base}/details` - 프로필 수정
//!
//! 모든 `{base}` 라우트에는 요청 처리 기한이 적용됩니다.
//! `enable_middleware`가 꺼져 있으면 두 미들웨어 모두 건너뜁니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let router = AccountRouter::new(RouterConfig {
//!     base_url: "/api/account".to_string(),
//!     user_service,
//!     token_service,
//!     timeout: Duration::from_secs(5),
//!     enable_middleware: true,
//! })?;
//!
//! let app = App::new().configure(|cfg| router.configure(cfg));
//! ```

use std::sync::Arc;
use std::time::Duration;
use actix_web::middleware::Condition;
use actix_web::{web, HttpResponse};
use serde_json::json;
use crate::core::errors::{AppError, AppResult};
use crate::handlers::{self, AccountHandler};
use crate::middlewares::{AuthMiddleware, TimeoutMiddleware};
use crate::services::{auth::TokenService, users::UserService};

/// 라우터 구성에 필요한 값 묶음
pub struct RouterConfig {
    /// 모든 계정 라우트의 기본 경로 (예: `/api/account`)
    pub base_url: String,
    pub user_service: Arc<dyn UserService>,
    pub token_service: Arc<dyn TokenService>,
    /// 요청 하나에 허용되는 최대 처리 시간
    pub timeout: Duration,
    /// 인증/타임아웃 미들웨어 적용 여부
    pub enable_middleware: bool,
}

/// 검증이 끝난 라우터 설정
///
/// 워커마다 `configure`가 호출되므로 `Clone`은 `Arc` 복제만 수행합니다.
#[derive(Clone)]
pub struct AccountRouter {
    base_url: String,
    handler: AccountHandler,
    timeout: TimeoutMiddleware,
    enable_middleware: bool,
}

impl AccountRouter {
    /// # Errors
    ///
    /// * `AppError::ConfigurationError` - 0초 타임아웃
    pub fn new(config: RouterConfig) -> AppResult<Self> {
        let timeout = TimeoutMiddleware::new(config.timeout)?;

        if !config.enable_middleware {
            log::warn!("계정 API 미들웨어가 비활성화되었습니다 (인증/타임아웃 미적용)");
        }

        Ok(Self {
            base_url: normalize_base_url(&config.base_url),
            handler: AccountHandler::new(config.user_service, config.token_service),
            timeout,
            enable_middleware: config.enable_middleware,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 헬스체크와 계정 라우트를 등록합니다.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        let enabled = self.enable_middleware;
        let auth = AuthMiddleware::new(self.handler.token_service.clone());

        cfg.service(health_check);

        cfg.service(
            web::scope(&self.base_url)
                .app_data(web::Data::new(self.handler.clone()))
                .app_data(json_config())
                .wrap(Condition::new(enabled, self.timeout))
                // 인증 불필요
                .route("/signup", web::post().to(handlers::auth::signup))
                .route("/signin", web::post().to(handlers::auth::signin))
                .route("/signout", web::post().to(handlers::auth::signout))
                .route("/tokens", web::post().to(handlers::auth::tokens))
                // 인증 필요
                .service(
                    web::resource("/me")
                        .wrap(Condition::new(enabled, auth.clone()))
                        .route(web::get().to(handlers::users::me)),
                )
                .service(
                    web::resource("/image")
                        .wrap(Condition::new(enabled, auth.clone()))
                        .route(web::post().to(handlers::users::image))
                        .route(web::delete().to(handlers::users::delete_image)),
                )
                .service(
                    web::resource("/details")
                        .wrap(Condition::new(enabled, auth))
                        .route(web::put().to(handlers::users::details)),
                ),
        );
    }
}

/// 앞에 `/`를 붙이고 뒤의 `/`는 제거합니다. 빈 값은 루트 경로입니다.
fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() || trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

/// JSON 바인딩 실패도 `{"error": ...}` 형태로 응답
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        log::debug!("요청 본문 파싱 실패 - {}: {}", req.path(), err);
        AppError::ValidationError(format!("요청 본문을 해석할 수 없습니다: {}", err)).into()
    })
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use actix_web::{body::to_bytes, http::StatusCode, test, App};
    use serde_json::Value;
    use crate::config::JwtConfig;
    use crate::repositories::{InMemoryTokenRepository, InMemoryUserRepository};
    use crate::services::auth::JwtTokenService;
    use crate::services::mocks::{CallLog, StubTokenService, StubUserService, VALID_ACCESS_TOKEN};
    use crate::services::users::AccountUserService;
    use super::*;

    fn router(log: &CallLog, enable_middleware: bool) -> AccountRouter {
        AccountRouter::new(RouterConfig {
            base_url: "api/account/".to_string(),
            user_service: Arc::new(StubUserService::new(log.clone())),
            token_service: Arc::new(StubTokenService::new(log.clone())),
            timeout: Duration::from_secs(5),
            enable_middleware,
        })
        .unwrap()
    }

    /// 실제 bcrypt/JWT 서비스와 인메모리 저장소로 구성한 라우터
    fn live_router() -> AccountRouter {
        let token_service = JwtTokenService::new(
            JwtConfig {
                secret: "access-secret".to_string(),
                refresh_secret: "refresh-secret".to_string(),
                expiration_secs: 900,
                refresh_expiration_secs: 3600,
            },
            Arc::new(InMemoryTokenRepository::new()),
        );

        AccountRouter::new(RouterConfig {
            base_url: "/api/account".to_string(),
            user_service: Arc::new(AccountUserService::with_cost(
                Arc::new(InMemoryUserRepository::new()),
                4,
            )),
            token_service: Arc::new(token_service),
            timeout: Duration::from_secs(5),
            enable_middleware: true,
        })
        .unwrap()
    }

    /// 미들웨어가 에러로 끝낸 요청도 서버가 렌더링하는 응답으로 변환
    async fn call(router: AccountRouter, req: test::TestRequest) -> (StatusCode, Value) {
        let app = test::init_service(App::new().configure(|cfg| router.configure(cfg))).await;

        match test::try_call_service(&app, req.to_request()).await {
            Ok(res) => {
                let status = res.status();
                (status, test::read_body_json(res).await)
            }
            Err(err) => {
                let res = err.error_response();
                let status = res.status();
                let bytes = to_bytes(res.into_body()).await.unwrap();
                (status, serde_json::from_slice(&bytes).unwrap())
            }
        }
    }

    #[actix_web::test]
    async fn test_zero_timeout_is_rejected() {
        let log = CallLog::default();

        let result = AccountRouter::new(RouterConfig {
            base_url: "/api/account".to_string(),
            user_service: Arc::new(StubUserService::new(log.clone())),
            token_service: Arc::new(StubTokenService::new(log)),
            timeout: Duration::ZERO,
            enable_middleware: true,
        });

        assert!(matches!(result, Err(AppError::ConfigurationError(_))));
    }

    #[actix_web::test]
    async fn test_normalize_base_url() {
        assert_eq!(normalize_base_url("/api/account"), "/api/account");
        assert_eq!(normalize_base_url("api/account/"), "/api/account");
        assert_eq!(normalize_base_url("/"), "");
        assert_eq!(normalize_base_url(""), "");
    }

    #[actix_web::test]
    async fn test_public_routes_need_no_token() {
        let log = CallLog::default();
        let req = test::TestRequest::post()
            .uri("/api/account/signup")
            .set_json(json!({ "email": "a@b.com", "password": "secret1" }));

        let (status, body) = call(router(&log, true), req).await;

        assert_eq!(status, StatusCode::CREATED);
        assert!(body["tokens"]["access"].is_string());
        assert_eq!(log.count("verify_token"), 0);
    }

    #[actix_web::test]
    async fn test_protected_routes_require_token() {
        let protected = [
            test::TestRequest::get().uri("/api/account/me"),
            test::TestRequest::post().uri("/api/account/image"),
            test::TestRequest::delete().uri("/api/account/image"),
            test::TestRequest::put()
                .uri("/api/account/details")
                .set_json(json!({ "email": "jane@example.com" })),
        ];

        for req in protected {
            let log = CallLog::default();

            let (status, body) = call(router(&log, true), req).await;

            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert_eq!(body["error"]["type"], "AUTHORIZATION");
            assert!(log.calls().is_empty());
        }
    }

    #[actix_web::test]
    async fn test_protected_route_with_valid_token() {
        let log = CallLog::default();
        let req = test::TestRequest::get()
            .uri("/api/account/me")
            .insert_header(("Authorization", format!("Bearer {}", VALID_ACCESS_TOKEN)));

        let (status, body) = call(router(&log, true), req).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user"]["email"], "stub@example.com");
        assert_eq!(log.calls(), vec!["verify_token", "get"]);
    }

    #[actix_web::test]
    async fn test_disabled_middleware_skips_verification() {
        let log = CallLog::default();
        let req = test::TestRequest::post().uri("/api/account/image");

        let (status, _) = call(router(&log, false), req).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(log.count("verify_token"), 0);
    }

    #[actix_web::test]
    async fn test_malformed_json_keeps_error_shape() {
        let log = CallLog::default();
        let req = test::TestRequest::post()
            .uri("/api/account/signup")
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{not json");

        let (status, body) = call(router(&log, true), req).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["type"], "BAD_REQUEST");
        assert!(log.calls().is_empty());
    }

    #[actix_web::test]
    async fn test_health_check() {
        let log = CallLog::default();

        let (status, body) = call(router(&log, true), test::TestRequest::get().uri("/health")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[actix_web::test]
    async fn test_session_lifecycle_with_real_services() {
        let router = live_router();
        let app = test::init_service(App::new().configure(|cfg| router.configure(cfg))).await;

        // 회원가입
        let req = test::TestRequest::post()
            .uri("/api/account/signup")
            .set_json(json!({ "email": "a@b.com", "password": "secret1" }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(res).await;
        let access = body["tokens"]["access"].as_str().unwrap().to_string();
        let first_refresh = body["tokens"]["refresh"].as_str().unwrap().to_string();

        // 발급된 액세스 토큰으로 AuthMiddleware 통과
        let req = test::TestRequest::get()
            .uri("/api/account/me")
            .insert_header(("Authorization", format!("Bearer {}", access)))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["user"]["email"], "a@b.com");
        assert!(body["user"].get("password").is_none());

        // 리프레시 토큰 교체
        let req = test::TestRequest::post()
            .uri("/api/account/tokens")
            .set_json(json!({ "refresh_token": first_refresh }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        let second_refresh = body["tokens"]["refresh"].as_str().unwrap().to_string();
        assert_ne!(second_refresh, first_refresh);

        // 교체된 토큰은 재사용 불가
        let req = test::TestRequest::post()
            .uri("/api/account/tokens")
            .set_json(json!({ "refresh_token": first_refresh }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

        // 새 토큰은 유효
        let req = test::TestRequest::post()
            .uri("/api/account/tokens")
            .set_json(json!({ "refresh_token": second_refresh }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_wrong_token_is_rejected_by_real_verifier() {
        let req = test::TestRequest::get()
            .uri("/api/account/me")
            .insert_header(("Authorization", "Bearer not.a.jwt"));

        let (status, body) = call(live_router(), req).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body["error"].is_object());
    }
}
