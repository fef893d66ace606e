use std::future::{ready, Ready};
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::core::errors::AppError;

/// 액세스 토큰에서 추출된 요청 범위의 사용자 정보
///
/// `AuthMiddleware`가 검증에 성공하면 request extension에 저장하며,
/// 요청이 끝나면 함께 사라집니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID
    pub user_id: Uuid,

    /// 사용자 이메일
    pub email: String,
}

/// ActixWeb FromRequest trait 구현
///
/// 인증 미들웨어를 거치지 않은 요청에서는 401로 실패합니다.
impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "인증되지 않은 요청입니다".to_string()
            ))),
        }
    }
}
