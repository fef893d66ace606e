//! 인증된 사용자 핸들러
//!
//! 모든 엔드포인트는 `AuthMiddleware` 뒤에 등록되며
//! [`AuthenticatedUser`] 추출기로 요청 주체를 얻습니다.
use actix_web::{web, HttpResponse};
use serde_json::json;
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::{AuthenticatedUser, UpdateDetailsRequest};
use super::{placeholder, AccountHandler};

/// 현재 사용자 정보 조회
///
/// # Endpoint
/// `GET /me`
pub async fn me(
    handler: web::Data<AccountHandler>,
    identity: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let user = handler.user_service.get(identity.user_id).await.map_err(|err| {
        log::error!("사용자 조회 실패 - ID: {}, 에러: {}", identity.user_id, err);
        err
    })?;

    Ok(HttpResponse::Ok().json(json!({ "user": user })))
}

/// 프로필 상세 정보 수정
///
/// # Endpoint
/// `PUT /details`
pub async fn details(
    handler: web::Data<AccountHandler>,
    identity: AuthenticatedUser,
    payload: web::Json<UpdateDetailsRequest>,
) -> Result<HttpResponse, AppError> {
    let payload = payload.into_inner();
    payload.validate()?;

    let mut user = handler.user_service.get(identity.user_id).await?;
    payload.apply_to(&mut user);

    if let Err(err) = handler.user_service.update_details(&mut user).await {
        log::error!("프로필 수정 실패 - ID: {}, 에러: {}", identity.user_id, err);
        return Err(err);
    }

    Ok(HttpResponse::Ok().json(json!({ "user": user })))
}

/// # Endpoint
/// `POST /image`
pub async fn image() -> HttpResponse {
    placeholder("image")
}

/// # Endpoint
/// `DELETE /image`
pub async fn delete_image() -> HttpResponse {
    placeholder("deleteImage")
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use actix_web::{dev::Service, http::StatusCode, test, App, HttpMessage};
    use serde_json::Value;
    use crate::services::mocks::{CallLog, StubTokenService, StubUserService};
    use super::*;

    async fn send(
        user_service: StubUserService,
        req: test::TestRequest,
        authenticated: bool,
    ) -> (StatusCode, Value) {
        let log = user_service.log.clone();
        let handler = AccountHandler::new(
            Arc::new(user_service),
            Arc::new(StubTokenService::new(log)),
        );
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(handler))
                // AuthMiddleware 대신 검증된 주체를 직접 주입
                .wrap_fn(move |req, srv| {
                    if authenticated {
                        req.extensions_mut().insert(StubTokenService::identity());
                    }
                    srv.call(req)
                })
                .route("/me", web::get().to(me))
                .route("/details", web::put().to(details))
                .route("/image", web::post().to(image))
                .route("/image", web::delete().to(delete_image)),
        )
        .await;

        let res = test::call_service(&app, req.to_request()).await;
        let status = res.status();
        (status, test::read_body_json(res).await)
    }

    #[actix_web::test]
    async fn test_me_returns_user_without_password() {
        let log = CallLog::default();

        let (status, body) =
            send(StubUserService::new(log.clone()), test::TestRequest::get().uri("/me"), true).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user"]["email"], "stub@example.com");
        assert!(body["user"].get("password").is_none());
        assert_eq!(log.calls(), vec!["get"]);
    }

    #[actix_web::test]
    async fn test_me_without_identity_is_unauthorized() {
        let log = CallLog::default();

        let (status, _) =
            send(StubUserService::new(log.clone()), test::TestRequest::get().uri("/me"), false).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(log.calls().is_empty());
    }

    #[actix_web::test]
    async fn test_me_unknown_user() {
        let log = CallLog::default();
        let service = StubUserService::failing(log, AppError::NotFound("사용자를 찾을 수 없습니다".into()));

        let (status, body) = send(service, test::TestRequest::get().uri("/me"), true).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["type"], "NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_details_updates_profile() {
        let log = CallLog::default();
        let req = test::TestRequest::put().uri("/details").set_json(json!({
            "name": "Jane",
            "email": "jane@example.com",
            "website": "https://jane.dev"
        }));

        let (status, body) = send(StubUserService::new(log.clone()), req, true).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user"]["name"], "Jane");
        assert_eq!(body["user"]["email"], "jane@example.com");
        assert_eq!(log.calls(), vec!["get", "update_details"]);
    }

    #[actix_web::test]
    async fn test_details_invalid_payload() {
        let log = CallLog::default();
        let req = test::TestRequest::put()
            .uri("/details")
            .set_json(json!({ "email": "nope", "website": "not a url" }));

        let (status, body) = send(StubUserService::new(log.clone()), req, true).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let fields: Vec<&str> = body["invalid_args"]
            .as_array()
            .unwrap()
            .iter()
            .map(|arg| arg["field"].as_str().unwrap())
            .collect();
        assert_eq!(fields, vec!["email", "website"]);
        assert!(log.calls().is_empty());
    }

    #[actix_web::test]
    async fn test_image_placeholders() {
        let log = CallLog::default();

        let (status, body) =
            send(StubUserService::new(log.clone()), test::TestRequest::post().uri("/image"), true).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "hello": "it's image" }));

        let (status, body) =
            send(StubUserService::new(log.clone()), test::TestRequest::delete().uri("/image"), true).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "hello": "it's deleteImage" }));
        assert!(log.calls().is_empty());
    }
}
