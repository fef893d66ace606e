//! 계정 서비스 메인 애플리케이션
//!
//! 설정을 읽어 협력 서비스를 구성하고, 계정 API 라우터를 등록한 Actix-web 서버를 구동합니다.

use std::io;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use account_service::config::{AccountApiConfig, JwtConfig, RateLimitConfig, ServerConfig};
use account_service::core::errors::AppError;
use account_service::repositories::{InMemoryTokenRepository, InMemoryUserRepository};
use account_service::routes::{AccountRouter, RouterConfig};
use account_service::services::auth::{JwtTokenService, TokenService};
use account_service::services::users::{AccountUserService, UserService};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 계정 서비스 시작중...");

    let router = build_router().map_err(|e| {
        error!("라우터 구성 실패: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e.to_string())
    })?;

    info!("✅ 계정 API가 {} 에 구성되었습니다", router.base_url());

    // HTTP 서버 시작
    start_http_server(router).await
}

/// 협력 서비스를 생성하고 라우터 설정을 검증합니다
///
/// # Errors
///
/// * `AppError::ConfigurationError` - 잘못된 `HANDLER_TIMEOUT`
fn build_router() -> Result<AccountRouter, AppError> {
    let user_service: Arc<dyn UserService> =
        Arc::new(AccountUserService::new(Arc::new(InMemoryUserRepository::new())));
    let token_service: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(
        JwtConfig::from_env(),
        Arc::new(InMemoryTokenRepository::new()),
    ));

    AccountRouter::new(RouterConfig {
        base_url: AccountApiConfig::base_url(),
        user_service,
        token_service,
        timeout: AccountApiConfig::handler_timeout()?,
        enable_middleware: AccountApiConfig::enable_middleware(),
    })
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(router: AccountRouter) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "Rate Limiting 설정이 올바르지 않습니다")
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        let router = router.clone();

        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(move |cfg| router.configure(cfg))
    })
        .bind(bind_address)?
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// CORS 설정을 구성합니다
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::AUTHORIZATION, header::ACCEPT, header::CONTENT_TYPE])
        .supports_credentials()
        .max_age(3600)
}
