//! # 캐시 파사드
//!
//! 문자열, 해시, 셋, 리스트 네 가지 값 형태와 공통 만료/존재/삭제 API를
//! 타입이 지정된 연산으로 제공합니다.
//!
//! ## 에러 정책
//!
//! | 연산 종류 | 저장소 에러 처리 |
//! |-----------|------------------|
//! | 쓰기 (`set`, `hash_set`, `set_add`, `list_push`, `delete` ...) | 로그 기록 후 [`ServiceError::System`] 으로 대체 |
//! | 읽기 (`get`, `exists`, `get_expiry`, `hash_get_all` ...) | 원본 `RedisError` 그대로 전달 |
//! | 검증 실패 (음수 증감값) | 코드 없는 [`ServiceError::Domain`] |
//!
//! ## 만료 시간
//!
//! 모든 쓰기 연산은 `ttl: Option<i64>` 를 받습니다. `None` 이나 0 이하의 값은
//! 만료 없음으로 처리됩니다.
//!
//! - 문자열 값은 `SET key value EX seconds` 로 값과 만료가 한 번에 기록됩니다.
//! - 해시/셋/리스트는 쓰기 후 `EXPIRE` 를 별도로 호출합니다. 두 명령 사이에
//!   실패하면 값은 만료 없이 남으며, 반환값으로는 이를 구분할 수 없습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let manager = RedisManager::new(Arc::new(RedisClient::new(&url).await?));
//!
//! manager.set("session:abc", "payload", Some(1800)).await?;
//! let count = manager.increment("visits", 1).await?;
//! manager.list_push("recent", &["a", "b"], Some(60)).await?;
//! ```

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use redis::{RedisError, RedisResult};

use super::commands::CacheCommands;
use crate::core::ServiceError;
use crate::utils::string_utils::truncate_for_log;

/// 저장소 에러를 로그로 남기고 시스템 에러로 대체합니다.
fn system_error(action: &'static str) -> impl FnOnce(RedisError) -> ServiceError {
    move |e| {
        log::error!("{} 실패: {}", action, e);
        ServiceError::System
    }
}

fn positive_ttl(ttl: Option<i64>) -> Option<i64> {
    ttl.filter(|seconds| *seconds > 0)
}

/// Redis 캐시 파사드
///
/// 주입된 클라이언트 핸들 외에는 상태를 가지지 않으므로 여러 요청에서
/// 동시에 공유해도 안전합니다.
#[derive(Clone)]
pub struct RedisManager {
    client: Arc<dyn CacheCommands>,
}

impl RedisManager {
    pub fn new(client: Arc<dyn CacheCommands>) -> Self {
        Self { client }
    }

    // ---------------------------------------------------------------
    // 만료 / 메타
    // ---------------------------------------------------------------

    /// 키의 만료 시간을 지정합니다.
    ///
    /// `seconds` 가 0 이하이면 기존 만료 시간을 제거합니다 (`PERSIST`).
    pub async fn set_expiry(&self, key: &str, seconds: i64) -> Result<bool, ServiceError> {
        log::info!("캐시 만료 시간 지정: key={}, time={}s", key, seconds);

        if seconds > 0 {
            self.client
                .expire(key, seconds)
                .await
                .map_err(system_error("캐시 만료 시간 지정"))?;
        } else {
            self.client
                .persist(key)
                .await
                .map_err(system_error("캐시 만료 시간 제거"))?;
        }
        Ok(true)
    }

    /// 키의 남은 만료 시간(초)을 조회합니다.
    ///
    /// 키가 없거나 만료 시간이 없으면 `None` 을 반환합니다.
    pub async fn get_expiry(&self, key: &str) -> RedisResult<Option<i64>> {
        let ttl = self.client.ttl(key).await?;
        Ok((ttl >= 0).then_some(ttl))
    }

    pub async fn exists(&self, key: &str) -> RedisResult<bool> {
        self.client.exists(key).await
    }

    /// 여러 키를 한 번에 삭제합니다. 빈 목록은 저장소를 호출하지 않습니다.
    pub async fn delete(&self, keys: &[String]) -> Result<(), ServiceError> {
        if keys.is_empty() {
            return Ok(());
        }
        log::info!("캐시 삭제: keys={:?}", keys);

        self.client
            .del(keys)
            .await
            .map_err(system_error("캐시 삭제"))?;
        Ok(())
    }

    // ---------------------------------------------------------------
    // 문자열
    // ---------------------------------------------------------------

    pub async fn get(&self, key: &str) -> RedisResult<Option<String>> {
        self.client.get(key).await
    }

    /// 문자열 값을 저장합니다.
    ///
    /// 양수 `ttl` 은 값과 같은 명령으로 기록됩니다.
    pub async fn set(&self, key: &str, value: &str, ttl: Option<i64>) -> Result<bool, ServiceError> {
        match positive_ttl(ttl) {
            Some(seconds) => {
                log::info!(
                    "캐시 저장 (만료 포함): key={}, value={}, time={}s",
                    key,
                    truncate_for_log(value),
                    seconds
                );
                self.client
                    .set_ex(key, value, seconds as u64)
                    .await
                    .map_err(system_error("캐시 저장 (만료 포함)"))?;
            }
            None => {
                log::info!("캐시 저장: key={}, value={}", key, truncate_for_log(value));
                self.client
                    .set(key, value)
                    .await
                    .map_err(system_error("캐시 저장"))?;
            }
        }
        Ok(true)
    }

    /// 값을 `delta` 만큼 증가시키고 증가 후 값을 반환합니다.
    pub async fn increment(&self, key: &str, delta: i64) -> Result<i64, ServiceError> {
        log::info!("캐시 증가: key={}, delta={}", key, delta);
        if delta < 0 {
            return Err(ServiceError::message("증가값은 0 이상이어야 합니다"));
        }

        self.client
            .incr_by(key, delta)
            .await
            .map_err(system_error("캐시 증가"))
    }

    /// 값을 `delta` 만큼 감소시키고 감소 후 값을 반환합니다.
    ///
    /// `delta` 는 감소량의 크기이므로 0 이상이어야 합니다.
    pub async fn decrement(&self, key: &str, delta: i64) -> Result<i64, ServiceError> {
        log::info!("캐시 감소: key={}, delta={}", key, delta);
        if delta < 0 {
            return Err(ServiceError::message("감소값은 0 이상이어야 합니다"));
        }

        self.client
            .incr_by(key, -delta)
            .await
            .map_err(system_error("캐시 감소"))
    }

    // ---------------------------------------------------------------
    // 해시
    // ---------------------------------------------------------------

    pub async fn hash_get(&self, key: &str, field: &str) -> RedisResult<Option<String>> {
        self.client.hget(key, field).await
    }

    pub async fn hash_get_all(&self, key: &str) -> RedisResult<HashMap<String, String>> {
        self.client.hget_all(key).await
    }

    /// 여러 필드를 한 번에 저장하고, 양수 `ttl` 이면 이어서 만료 시간을 지정합니다.
    pub async fn hash_set_all(
        &self,
        key: &str,
        map: &HashMap<String, String>,
        ttl: Option<i64>,
    ) -> Result<bool, ServiceError> {
        log::info!(
            "해시 저장: key={}, map={}, time={:?}",
            key,
            truncate_for_log(&format!("{:?}", map)),
            ttl
        );
        if map.is_empty() {
            log::debug!("저장할 필드가 없어 해시 저장을 건너뜁니다: key={}", key);
            return Ok(true);
        }

        let items: Vec<(String, String)> = map
            .iter()
            .map(|(field, value)| (field.clone(), value.clone()))
            .collect();
        self.client
            .hset_multiple(key, &items)
            .await
            .map_err(system_error("해시 저장"))?;
        self.expire_after_write(key, ttl).await?;
        Ok(true)
    }

    /// 해시에 필드 하나를 저장합니다. 해시가 없으면 새로 생성됩니다.
    ///
    /// 양수 `ttl` 은 해시 전체의 기존 만료 시간을 대체합니다.
    pub async fn hash_set(
        &self,
        key: &str,
        field: &str,
        value: &str,
        ttl: Option<i64>,
    ) -> Result<bool, ServiceError> {
        log::info!(
            "해시 필드 저장: key={}, field={}, value={}, time={:?}",
            key,
            field,
            truncate_for_log(value),
            ttl
        );

        self.client
            .hset(key, field, value)
            .await
            .map_err(system_error("해시 필드 저장"))?;
        self.expire_after_write(key, ttl).await?;
        Ok(true)
    }

    pub async fn hash_delete(&self, key: &str, fields: &[&str]) -> Result<i64, ServiceError> {
        if fields.is_empty() {
            return Ok(0);
        }
        log::info!("해시 필드 삭제: key={}, fields={:?}", key, fields);

        self.client
            .hdel(key, fields)
            .await
            .map_err(system_error("해시 필드 삭제"))
    }

    pub async fn hash_exists(&self, key: &str, field: &str) -> RedisResult<bool> {
        self.client.hexists(key, field).await
    }

    /// 해시 필드를 증가시킵니다. 필드가 없으면 0에서 시작합니다.
    pub async fn hash_increment(&self, key: &str, field: &str, amount: f64) -> Result<f64, ServiceError> {
        log::info!("해시 증가: key={}, field={}, by={}", key, field, amount);
        if !(amount >= 0.0) {
            return Err(ServiceError::message("증가값은 0 이상이어야 합니다"));
        }

        self.client
            .hincr_by_float(key, field, amount)
            .await
            .map_err(system_error("해시 증가"))
    }

    pub async fn hash_decrement(&self, key: &str, field: &str, amount: f64) -> Result<f64, ServiceError> {
        log::info!("해시 감소: key={}, field={}, by={}", key, field, amount);
        if !(amount >= 0.0) {
            return Err(ServiceError::message("감소값은 0 이상이어야 합니다"));
        }

        self.client
            .hincr_by_float(key, field, -amount)
            .await
            .map_err(system_error("해시 감소"))
    }

    // ---------------------------------------------------------------
    // 셋
    // ---------------------------------------------------------------

    pub async fn set_members(&self, key: &str) -> RedisResult<HashSet<String>> {
        self.client.smembers(key).await
    }

    pub async fn set_is_member(&self, key: &str, value: &str) -> RedisResult<bool> {
        self.client.sismember(key, value).await
    }

    /// 셋에 값을 추가하고 새로 추가된 개수를 반환합니다.
    pub async fn set_add(&self, key: &str, values: &[&str], ttl: Option<i64>) -> Result<i64, ServiceError> {
        log::info!("셋 추가: key={}, values={:?}, time={:?}", key, values, ttl);
        if values.is_empty() {
            return Ok(0);
        }

        let added = self
            .client
            .sadd(key, values)
            .await
            .map_err(system_error("셋 추가"))?;
        self.expire_after_write(key, ttl).await?;
        Ok(added)
    }

    pub async fn set_size(&self, key: &str) -> RedisResult<i64> {
        self.client.scard(key).await
    }

    pub async fn set_remove(&self, key: &str, values: &[&str]) -> Result<i64, ServiceError> {
        log::info!("셋 제거: key={}, values={:?}", key, values);
        if values.is_empty() {
            return Ok(0);
        }

        self.client
            .srem(key, values)
            .await
            .map_err(system_error("셋 제거"))
    }

    // ---------------------------------------------------------------
    // 리스트
    // ---------------------------------------------------------------

    /// 리스트 구간을 조회합니다. `end = -1` 은 마지막 요소까지를 의미합니다.
    pub async fn list_range(&self, key: &str, start: i64, end: i64) -> RedisResult<Vec<String>> {
        self.client.lrange(key, start, end).await
    }

    pub async fn list_size(&self, key: &str) -> RedisResult<i64> {
        self.client.llen(key).await
    }

    /// 인덱스로 리스트 요소를 조회합니다. 음수 인덱스는 끝에서부터 셉니다.
    pub async fn list_index(&self, key: &str, index: i64) -> RedisResult<Option<String>> {
        self.client.lindex(key, index).await
    }

    /// 리스트 끝에 하나 이상의 값을 추가합니다.
    pub async fn list_push(&self, key: &str, values: &[&str], ttl: Option<i64>) -> Result<bool, ServiceError> {
        log::info!(
            "리스트 추가: key={}, values={}, time={:?}",
            key,
            truncate_for_log(&format!("{:?}", values)),
            ttl
        );
        if values.is_empty() {
            return Ok(true);
        }

        self.client
            .rpush(key, values)
            .await
            .map_err(system_error("리스트 추가"))?;
        self.expire_after_write(key, ttl).await?;
        Ok(true)
    }

    pub async fn list_set_at(&self, key: &str, index: i64, value: &str) -> Result<bool, ServiceError> {
        log::info!(
            "리스트 요소 수정: key={}, index={}, value={}",
            key,
            index,
            truncate_for_log(value)
        );

        self.client
            .lset(key, index, value)
            .await
            .map_err(system_error("리스트 요소 수정"))?;
        Ok(true)
    }

    /// 값이 `value` 인 요소를 최대 `count` 개 제거합니다.
    ///
    /// 양수는 앞에서부터, 음수는 뒤에서부터, 0은 전부 제거합니다.
    pub async fn list_remove(&self, key: &str, count: i64, value: &str) -> Result<i64, ServiceError> {
        log::info!(
            "리스트 요소 제거: key={}, value={}, count={}",
            key,
            truncate_for_log(value),
            count
        );

        self.client
            .lrem(key, count, value)
            .await
            .map_err(system_error("리스트 요소 제거"))
    }

    async fn expire_after_write(&self, key: &str, ttl: Option<i64>) -> Result<(), ServiceError> {
        if let Some(seconds) = positive_ttl(ttl) {
            self.client
                .expire(key, seconds)
                .await
                .map_err(system_error("캐시 만료 시간 지정"))?;
        }
        Ok(())
    }
}
