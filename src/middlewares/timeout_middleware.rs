//! 요청 처리 기한 미들웨어
//!
//! 하위 서비스의 응답을 설정된 시간만큼만 기다립니다. 기한이 지나면 `AppError::ServiceUnavailable`을
//! 반환하고 진행 중이던 future를 drop하므로, 늦게 도착한 결과는 클라이언트에 전달되지 않습니다.
//! 에러 응답(503, `{"error": ...}`)은 `ResponseError` 구현이 렌더링합니다.
//!
//! 라우팅 전에 `HttpRequest`를 복제해 두면 스코프 매칭(`match_info_mut`)이 실패하므로
//! 로그에 필요한 값만 미리 꺼내 둡니다.
//!
//! 협력 서비스의 작업은 다음 `.await` 지점에서 중단되며, 이미 외부로 나간 요청이
//! 취소된다는 보장은 없습니다.

use std::future::{ready, Ready};
use std::time::Duration;

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error,
};
use futures_util::future::LocalBoxFuture;
use crate::core::errors::{AppError, AppResult};

/// 요청 전체에 하나의 처리 기한을 적용하는 미들웨어
#[derive(Debug, Clone, Copy)]
pub struct TimeoutMiddleware {
    duration: Duration,
}

impl TimeoutMiddleware {
    /// # Errors
    ///
    /// * `AppError::ConfigurationError` - 0초 기한
    pub fn new(duration: Duration) -> AppResult<Self> {
        if duration.is_zero() {
            return Err(AppError::ConfigurationError(
                "핸들러 타임아웃은 0보다 커야 합니다".to_string(),
            ));
        }
        Ok(Self { duration })
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl<S, B> Transform<S, ServiceRequest> for TimeoutMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = TimeoutMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TimeoutMiddlewareService {
            service,
            duration: self.duration,
        }))
    }
}

pub struct TimeoutMiddlewareService<S> {
    service: S,
    duration: Duration,
}

impl<S, B> Service<ServiceRequest> for TimeoutMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let duration = self.duration;
        let method = req.method().clone();
        let path = req.path().to_string();
        let fut = self.service.call(req);

        Box::pin(async move {
            match tokio::time::timeout(duration, fut).await {
                Ok(res) => res,
                Err(_) => {
                    log::warn!("요청 처리 시간 초과 ({:?}) - {} {}", duration, method, path);
                    Err(AppError::ServiceUnavailable(format!(
                        "요청 처리 시간이 {}초를 초과했습니다",
                        duration.as_secs_f64()
                    ))
                    .into())
                }
            }
        })
    }
}
