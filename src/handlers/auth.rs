//! Authentication HTTP Handlers
//!
//! 세션 발급과 관련된 엔드포인트입니다. 모두 인증 없이 접근할 수 있습니다.
//!
//! # Endpoints
//!
//! - **회원가입**: `POST /signup` → 201 `{"tokens": {...}}`
//! - **로그인**: `POST /signin` → 200 `{"tokens": {...}}`
//! - **토큰 갱신**: `POST /tokens` → 200 `{"tokens": {...}}`
//! - **로그아웃**: `POST /signout` (고정 응답)
use actix_web::{web, HttpResponse};
use serde_json::json;
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::{SigninRequest, SignupRequest, TokensRequest};
use super::{placeholder, AccountHandler};

/// 회원가입 핸들러
///
/// 사용자 생성과 토큰 발급을 순서대로 수행합니다.
/// 사용자 생성이 실패하면 토큰 서비스는 호출되지 않습니다.
///
/// 토큰 발급만 실패한 경우 계정은 남아 있으며 응답에는 토큰이 포함되지 않습니다.
/// 클라이언트는 `/signin`으로 다시 세션을 발급받을 수 있습니다.
///
/// # Endpoint
/// `POST /signup`
pub async fn signup(
    handler: web::Data<AccountHandler>,
    payload: web::Json<SignupRequest>,
) -> Result<HttpResponse, AppError> {
    let payload = payload.into_inner();
    payload.validate()?;

    let mut user = payload.into_user();

    if let Err(err) = handler.user_service.signup(&mut user).await {
        log::error!("회원가입 실패 - 이메일: {}, 에러: {}", user.email, err);
        return Err(err);
    }

    let tokens = handler
        .token_service
        .new_pair_from_user(&user, "")
        .await
        .map_err(|err| {
            log::error!("신규 사용자 토큰 발급 실패 - ID: {:?}, 에러: {}", user.id, err);
            err
        })?;

    log::info!("회원가입 완료 - ID: {:?}", user.id);
    Ok(HttpResponse::Created().json(json!({ "tokens": tokens })))
}

/// 로컬 로그인 핸들러
///
/// # Endpoint
/// `POST /signin`
pub async fn signin(
    handler: web::Data<AccountHandler>,
    payload: web::Json<SigninRequest>,
) -> Result<HttpResponse, AppError> {
    let payload = payload.into_inner();
    payload.validate()?;

    let mut user = payload.into_user();

    if let Err(err) = handler.user_service.signin(&mut user).await {
        log::warn!("로그인 실패 - 이메일: {}, 에러: {}", user.email, err);
        return Err(err);
    }

    let tokens = handler
        .token_service
        .new_pair_from_user(&user, "")
        .await
        .map_err(|err| {
            log::error!("토큰 생성 실패 - ID: {:?}, 에러: {}", user.id, err);
            err
        })?;

    Ok(HttpResponse::Ok().json(json!({ "tokens": tokens })))
}

/// 토큰 갱신 핸들러
///
/// 리프레시 토큰을 검증한 뒤 새 토큰 쌍을 발급하고 이전 리프레시 토큰을 폐기합니다.
///
/// # Endpoint
/// `POST /tokens`
pub async fn tokens(
    handler: web::Data<AccountHandler>,
    payload: web::Json<TokensRequest>,
) -> Result<HttpResponse, AppError> {
    let payload = payload.into_inner();
    payload.validate()?;

    let raw = payload.refresh_token.unwrap_or_default();
    let refresh = handler.token_service.validate_refresh_token(&raw).await?;

    let user = handler.user_service.get(refresh.user_id).await?;

    let tokens = handler
        .token_service
        .new_pair_from_user(&user, &refresh.id)
        .await
        .map_err(|err| {
            log::warn!("토큰 갱신 실패 - user_id: {}, 에러: {}", refresh.user_id, err);
            err
        })?;

    Ok(HttpResponse::Ok().json(json!({ "tokens": tokens })))
}

/// 로그아웃 핸들러
///
/// # Endpoint
/// `POST /signout`
pub async fn signout() -> HttpResponse {
    placeholder("signout")
}
