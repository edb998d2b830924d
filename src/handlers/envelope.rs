//! 핸들러 인터셉터
//!
//! 각 핸들러 future 를 감싸서 실행하고, 결과를 HTTP 응답으로 정규화하는
//! 데코레이터입니다.
//!
//! | 핸들러 결과 | 응답 본문 |
//! |-------------|-----------|
//! | `Ok(비어있지 않은 문자열)` | 문자열 그대로 |
//! | `Ok(공백 문자열)` | 빈 봉투 `{}` |
//! | `Err(ServiceError::Domain)` | `{"resCode":<code>,"resMsg":<message>}` |
//! | 그 밖의 `Err` | `{"resCode":"0000001","resMsg":"系统异常"}` |
//!
//! 봉투는 핸들러가 스스로 응답을 만들지 못한 경우에만 사용됩니다.
//!
//! ```rust,ignore
//! #[get("/test")]
//! pub async fn test() -> HttpResponse {
//!     intercept("test", hello()).await
//! }
//!
//! async fn hello() -> AppResult<String> {
//!     Ok("hello test".to_string())
//! }
//! ```

use std::future::Future;

use actix_web::HttpResponse;
use actix_web::http::header::ContentType;

use crate::core::AppResult;
use crate::domain::dto::WebDto;
use crate::utils::string_utils::is_blank;

/// 인터셉터가 결정한 응답 본문
#[derive(Debug, Clone, PartialEq)]
pub enum InterceptedBody {
    /// 핸들러가 반환한 문자열
    Raw(String),
    /// 인터셉터가 만든 봉투 JSON
    Envelope(String),
}

impl InterceptedBody {
    pub fn into_response(self) -> HttpResponse {
        match self {
            InterceptedBody::Raw(body) => HttpResponse::Ok()
                .content_type(ContentType::plaintext())
                .body(body),
            InterceptedBody::Envelope(body) => HttpResponse::Ok()
                .content_type(ContentType::json())
                .body(body),
        }
    }
}

/// 핸들러 future 를 실행하고 결과를 응답으로 변환합니다.
pub async fn intercept<F>(name: &str, handler: F) -> HttpResponse
where
    F: Future<Output = AppResult<String>>,
{
    log::info!("인터셉터 실행: handler={}", name);
    resolve(handler.await).into_response()
}

/// 핸들러 결과로부터 응답 본문을 결정합니다.
pub fn resolve(result: AppResult<String>) -> InterceptedBody {
    let dto = match result {
        Ok(body) if !is_blank(&body) => return InterceptedBody::Raw(body),
        Ok(_) => WebDto::<()>::new(),
        Err(e) => {
            if e.is_domain() {
                log::error!("비즈니스 예외: {}", e);
            } else {
                log::error!("시스템 예외: {:?}", e);
            }
            e.to_envelope()
        }
    };
    InterceptedBody::Envelope(dto.to_json())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AppError, ServiceError};
    use actix_web::body::to_bytes;

    fn resolve_body(result: AppResult<String>) -> String {
        match resolve(result) {
            InterceptedBody::Raw(body) | InterceptedBody::Envelope(body) => body,
        }
    }

    #[test]
    fn test_non_blank_result_is_returned_verbatim() {
        assert_eq!(resolve_body(Ok("hello test".to_string())), "hello test");
    }

    #[test]
    fn test_blank_result_becomes_empty_envelope() {
        assert_eq!(
            resolve(Ok("   ".to_string())),
            InterceptedBody::Envelope("{}".to_string())
        );
        assert_eq!(resolve_body(Ok(String::new())), "{}");
    }

    #[test]
    fn test_domain_error_becomes_coded_envelope() {
        let result = Err(ServiceError::coded("X1", "bad input").into());
        assert_eq!(resolve_body(result), r#"{"resCode":"X1","resMsg":"bad input"}"#);
    }

    #[test]
    fn test_unrelated_error_becomes_system_envelope() {
        let result = Err(AppError::InternalError("database on fire".to_string()));
        let body = resolve_body(result);

        assert_eq!(body, r#"{"resCode":"0000001","resMsg":"系统异常"}"#);
        assert!(!body.contains("database on fire"));
    }

    #[actix_web::test]
    async fn test_intercept_builds_plain_text_response() {
        let response = intercept("hello", async { Ok::<_, AppError>("hello test".to_string()) }).await;

        assert_eq!(response.status(), actix_web::http::StatusCode::OK);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "text/plain; charset=utf-8"
        );
        let body = to_bytes(response.into_body()).await.unwrap();
        assert_eq!(body, "hello test");
    }

    #[actix_web::test]
    async fn test_intercept_builds_json_envelope_on_error() {
        let response = intercept("broken", async {
            Err::<String, AppError>(ServiceError::System.into())
        })
        .await;

        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );
        let body = to_bytes(response.into_body()).await.unwrap();
        assert_eq!(body, r#"{"resCode":"0000001","resMsg":"系统异常"}"#);
    }
}
