//! # Core Module
//!
//! 애플리케이션 전역에서 공유하는 에러 타입을 제공합니다.
//!
//! ## 에러 계층
//!
//! | 타입 | 발생 위치 | HTTP 경계에서의 표현 |
//! |------|-----------|----------------------|
//! | [`ServiceError::Domain`] | 비즈니스 규칙 위반 (예: 음수 증가값) | 호출자의 코드/메시지 그대로 |
//! | [`ServiceError::System`] | 캐시 쓰기 실패 등 예상치 못한 오류 | `0000001` / `系统异常` |
//! | [`AppError::RedisError`] | 읽기 전용 캐시 호출의 원본 오류 | `0000001` / `系统异常` |
//! | [`AppError::InternalError`] | 그 밖의 내부 오류 | `0000001` / `系统异常` |
//!
//! 에러는 두 지점에서만 변환됩니다.
//!
//! 1. 캐시 파사드 내부: 쓰기 연산의 Redis 오류 → [`ServiceError::System`]
//! 2. HTTP 경계: 남은 모든 에러 → [`WebDto`](crate::domain::dto::WebDto) 봉투
//!
//! ```rust,ignore
//! use crate::core::{AppResult, ServiceError};
//!
//! async fn handler() -> AppResult<String> {
//!     Err(ServiceError::coded("X1", "bad input").into())
//! }
//! ```

pub mod errors;

pub use errors::*;
