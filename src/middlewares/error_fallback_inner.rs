use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::error::InternalError;
use actix_web::http::{Method, StatusCode};
use actix_web::http::header::ContentType;
use actix_web::{Error, HttpRequest, HttpResponse};
use futures_util::future::LocalBoxFuture;

use crate::domain::dto::{ResCode, WebDto};

const AJAX_HEADER: &str = "X-Requested-With";
const AJAX_HEADER_VALUE: &str = "XMLHttpRequest";

pub struct ErrorFallbackService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for ErrorFallbackService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        // 라우팅 중 HttpRequest 는 단독 소유여야 하므로 필요한 값만 복사
        let origin = RequestOrigin::capture(&req);

        Box::pin(async move {
            match service.call(req).await {
                Ok(res) => {
                    let fallback = res
                        .response()
                        .error()
                        .map(|err| render_fallback(&origin, err));

                    match fallback {
                        Some(response) => {
                            let (req, _) = res.into_parts();
                            Ok(ServiceResponse::new(req, response).map_into_right_body())
                        }
                        None => Ok(res.map_into_left_body()),
                    }
                }
                Err(err) => {
                    // 요청을 돌려받을 수 없으므로 렌더링한 응답을 에러에 실어 보냅니다
                    let response = render_fallback(&origin, &err);
                    Err(InternalError::from_response(err.to_string(), response).into())
                }
            }
        })
    }
}

/// 폴백 응답을 만드는 데 필요한 요청 정보
struct RequestOrigin {
    ajax: bool,
    method: Method,
    path: String,
}

impl RequestOrigin {
    fn capture(req: &ServiceRequest) -> Self {
        Self {
            ajax: is_ajax(req.request()),
            method: req.method().clone(),
            path: req.path().to_string(),
        }
    }
}

/// AJAX 요청 여부 (`X-Requested-With: XMLHttpRequest`, 대소문자 무시)
pub fn is_ajax(req: &HttpRequest) -> bool {
    req.headers()
        .get(AJAX_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(|v| v.eq_ignore_ascii_case(AJAX_HEADER_VALUE))
        .unwrap_or(false)
}

fn render_fallback(origin: &RequestOrigin, err: &Error) -> HttpResponse {
    let status = err.as_response_error().status_code();
    log::error!("처리되지 않은 예외: {} {} -> {} ({})", origin.method, origin.path, status, err);

    if origin.ajax {
        let mut dto = WebDto::<()>::new();
        dto.set_res_code(ResCode::SysError.code());
        dto.set_res_msg(err.to_string());
        HttpResponse::build(status)
            .content_type(ContentType::json())
            .body(dto.to_json())
    } else {
        HttpResponse::build(status)
            .content_type(ContentType::html())
            .body(error_page(status))
    }
}

fn error_page(status: StatusCode) -> String {
    let reason = status.canonical_reason().unwrap_or("Error");
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{code} {reason}</title></head>\n\
         <body>\n<h1>{code} {reason}</h1>\n<p>요청을 처리하는 중 오류가 발생했습니다.</p>\n</body>\n</html>\n",
        code = status.as_u16(),
        reason = reason,
    )
}
