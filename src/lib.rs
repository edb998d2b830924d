//! 캐시 서비스 백엔드
//!
//! Redis 를 백엔드로 하는 타입 지정 캐시 파사드와,
//! 모든 핸들러 에러를 일관된 JSON 봉투로 바꾸는 에러 변환 계층을 제공합니다.
//!
//! # Features
//!
//! - **캐시 파사드**: 문자열, 해시, 집합, 리스트 연산과 만료 관리
//! - **인터셉터**: 핸들러 결과를 원문 또는 `{resCode, resMsg}` 봉투로 정규화
//! - **최후 에러 처리**: AJAX 요청은 JSON, 브라우저 요청은 HTML 에러 페이지
//! - **Rate Limiting / CORS**: 환경 변수 기반 설정
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /test, /health, /api/v1/cache
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  ErrorFallback  │ ← 경계까지 올라온 에러 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← intercept 로 감싼 요청 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  RedisManager   │ ← 캐시 파사드
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │      Redis      │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use cache_service_backend::caching::{RedisClient, RedisManager};
//!
//! let client = RedisClient::new("redis://localhost:6379").await?;
//! let cache = RedisManager::new(Arc::new(client));
//!
//! cache.hash_set("user:1", "name", "river", Some(600)).await?;
//! let visits = cache.increment("visits", 1).await?;
//! ```

pub mod core;
pub mod config;
pub mod caching;
pub mod domain;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
