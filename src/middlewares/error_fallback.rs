//! 최후 에러 처리 미들웨어
//!
//! 인터셉터를 거치지 않고 애플리케이션 경계까지 올라온 에러를 잡아서
//! 클라이언트 종류에 맞는 응답으로 바꿉니다.
//!
//! | 요청 | 응답 |
//! |------|------|
//! | `X-Requested-With: XMLHttpRequest` | `{"resCode":"0000001","resMsg":<에러 메시지>}` |
//! | 그 밖의 요청 | 일반 HTML 에러 페이지 |
//!
//! 두 경우 모두 HTTP 상태 코드는 원래 에러의 것을 유지하며,
//! 에러가 붙지 않은 응답은 그대로 통과합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::middlewares::error_fallback_inner::ErrorFallbackService;

#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorFallback;

impl<S, B> Transform<S, ServiceRequest> for ErrorFallback
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = ErrorFallbackService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ErrorFallbackService {
            service: Rc::new(service),
        }))
    }
}
