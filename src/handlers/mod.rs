//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 모든 핸들러는 [`envelope::intercept`] 를 통해 실행되므로, 핸들러 본문은
//! `AppResult<String>` 만 반환하면 되고 에러를 응답으로 바꾸는 일은
//! 인터셉터가 맡습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   ErrorFallback 미들웨어 - 최후 에러 처리
//! ├─────────────────────────────────────────────┤
//!   Handlers (이 모듈) + intercept          ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   RedisManager - 캐시 파사드               ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   CacheCommands / RedisClient              ← Store Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - [`envelope`] - 핸들러 결과를 응답 본문으로 정규화하는 인터셉터
//! - [`sample`] - 샘플 엔드포인트 `GET /test`
//! - [`cache`] - 캐시 파사드 엔드포인트 `/api/v1/cache`

pub mod cache;
pub mod envelope;
pub mod sample;

pub use envelope::intercept;
