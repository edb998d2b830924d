//! # Cache HTTP Handlers
//!
//! 캐시 파사드의 문자열 연산을 HTTP 로 노출합니다.
//! 모든 핸들러는 [`intercept`] 로 감싸져 있으며, 성공 시 `000000` 봉투에
//! 결과를 `data` 로 담아 응답합니다.
//!
//! | 메서드 | 경로 | 연산 |
//! |--------|------|------|
//! | `GET` | `/api/v1/cache/{key}` | `get` |
//! | `PUT` | `/api/v1/cache/{key}?ttl=N` | `set` (본문이 값) |
//! | `DELETE` | `/api/v1/cache/{key}` | `delete` |
//! | `POST` | `/api/v1/cache/{key}/incr?delta=N` | `increment` |
//! | `POST` | `/api/v1/cache/{key}/decr?delta=N` | `decrement` |
//! | `GET` | `/api/v1/cache/{key}/ttl` | `get_expiry` |
//!
//! ```bash
//! curl -X PUT "http://localhost:8080/api/v1/cache/greeting?ttl=60" -d 'hello'
//! # {"resCode":"000000","resMsg":"成功","data":true}
//!
//! curl -X POST "http://localhost:8080/api/v1/cache/visits/incr?delta=-1"
//! # {"resMsg":"증가값은 0 이상이어야 합니다"}
//! ```

use actix_web::web::Bytes;
use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::Deserialize;

use super::envelope::intercept;
use crate::caching::RedisManager;
use crate::core::{AppResult, ErrorContext};
use crate::domain::dto::WebDto;
use crate::utils::string_utils::validate_required_string;

#[derive(Debug, Deserialize)]
pub struct TtlQuery {
    pub ttl: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct DeltaQuery {
    /// 생략 시 1
    pub delta: Option<i64>,
}

#[get("/{key}")]
pub async fn get_value(cache: web::Data<RedisManager>, key: web::Path<String>) -> HttpResponse {
    intercept("get_value", read_value(cache, key.into_inner())).await
}

#[put("/{key}")]
pub async fn put_value(
    cache: web::Data<RedisManager>,
    key: web::Path<String>,
    query: web::Query<TtlQuery>,
    body: Bytes,
) -> HttpResponse {
    intercept("put_value", write_value(cache, key.into_inner(), body, query.ttl)).await
}

#[delete("/{key}")]
pub async fn delete_value(cache: web::Data<RedisManager>, key: web::Path<String>) -> HttpResponse {
    intercept("delete_value", remove_value(cache, key.into_inner())).await
}

#[post("/{key}/incr")]
pub async fn increment_value(
    cache: web::Data<RedisManager>,
    key: web::Path<String>,
    query: web::Query<DeltaQuery>,
) -> HttpResponse {
    let delta = query.delta.unwrap_or(1);
    intercept("increment_value", add_delta(cache, key.into_inner(), delta)).await
}

#[post("/{key}/decr")]
pub async fn decrement_value(
    cache: web::Data<RedisManager>,
    key: web::Path<String>,
    query: web::Query<DeltaQuery>,
) -> HttpResponse {
    let delta = query.delta.unwrap_or(1);
    intercept("decrement_value", subtract_delta(cache, key.into_inner(), delta)).await
}

#[get("/{key}/ttl")]
pub async fn get_ttl(cache: web::Data<RedisManager>, key: web::Path<String>) -> HttpResponse {
    intercept("get_ttl", read_ttl(cache, key.into_inner())).await
}

async fn read_value(cache: web::Data<RedisManager>, key: String) -> AppResult<String> {
    let key = validate_required_string(&key, "key")?;
    let value = cache.get(&key).await?;
    Ok(WebDto::success_opt(value).to_json())
}

async fn write_value(
    cache: web::Data<RedisManager>,
    key: String,
    body: Bytes,
    ttl: Option<i64>,
) -> AppResult<String> {
    let key = validate_required_string(&key, "key")?;
    let value = String::from_utf8(body.to_vec())
        .with_context(|| format!("요청 본문 디코딩 실패: key={}", key))?;
    let stored = cache.set(&key, &value, ttl).await?;
    Ok(WebDto::success(stored).to_json())
}

async fn remove_value(cache: web::Data<RedisManager>, key: String) -> AppResult<String> {
    let key = validate_required_string(&key, "key")?;
    cache.delete(&[key]).await?;
    Ok(WebDto::success(true).to_json())
}

async fn add_delta(cache: web::Data<RedisManager>, key: String, delta: i64) -> AppResult<String> {
    let key = validate_required_string(&key, "key")?;
    let value = cache.increment(&key, delta).await?;
    Ok(WebDto::success(value).to_json())
}

async fn subtract_delta(cache: web::Data<RedisManager>, key: String, delta: i64) -> AppResult<String> {
    let key = validate_required_string(&key, "key")?;
    let value = cache.decrement(&key, delta).await?;
    Ok(WebDto::success(value).to_json())
}

async fn read_ttl(cache: web::Data<RedisManager>, key: String) -> AppResult<String> {
    let key = validate_required_string(&key, "key")?;
    let ttl = cache.get_expiry(&key).await?;
    Ok(WebDto::success_opt(ttl).to_json())
}
