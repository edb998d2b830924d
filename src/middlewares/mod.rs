//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//! Spring Boot의 `@ControllerAdvice` 와 유사한 역할을 수행합니다.
//!
//! # 제공 미들웨어
//!
//! ### 1. 최후 에러 처리 (ErrorFallback)
//! - 애플리케이션 경계까지 올라온 에러를 응답으로 변환
//! - AJAX 요청에는 JSON 봉투, 브라우저 요청에는 HTML 에러 페이지
//! - 원래 에러의 HTTP 상태 코드 유지
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{App, HttpServer};
//! use crate::middlewares::ErrorFallback;
//!
//! HttpServer::new(|| {
//!     App::new()
//!         .wrap(ErrorFallback)
//!         .configure(configure_all_routes)
//! })
//! ```

pub mod error_fallback;
mod error_fallback_inner;

pub use error_fallback::ErrorFallback;
