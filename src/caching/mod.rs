//! 캐싱 계층 모듈
//!
//! Redis를 백엔드로 하는 타입 지정 캐시 파사드를 제공합니다.
//!
//! # 구성
//!
//! - [`commands`] - 저장소 원시 명령 trait ([`CacheCommands`])
//! - [`redis`] - `redis` 크레이트 기반 운영 구현체 ([`RedisClient`])
//! - [`manager`] - 로깅/에러 변환/만료 처리를 더한 파사드 ([`RedisManager`])
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::caching::{RedisClient, RedisManager};
//!
//! let client = RedisClient::new("redis://localhost:6379").await?;
//! let cache = RedisManager::new(Arc::new(client));
//!
//! cache.set("user:123", "river", Some(3600)).await?;
//! let name = cache.get("user:123").await?;
//! ```
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod commands;
pub mod manager;
pub mod redis;

#[cfg(test)]
pub(crate) mod mock;

pub use commands::CacheCommands;
pub use manager::RedisManager;
pub use self::redis::RedisClient;
