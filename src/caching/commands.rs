//! 캐시 저장소 명령 인터페이스
//!
//! [`RedisManager`](super::manager::RedisManager) 가 사용하는 원시 명령 집합입니다.
//! 운영 환경에서는 [`RedisClient`](super::redis::RedisClient) 가 구현하며,
//! 테스트에서는 메모리 기반 대역으로 대체됩니다.
//!
//! 모든 명령은 문자열 키와 문자열 값을 다루고, 만료 시간은 초 단위입니다.
//! 각 메서드는 Redis 명령 하나에 대응합니다.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use redis::RedisResult;

#[async_trait]
pub trait CacheCommands: Send + Sync {
    /// `EXPIRE key seconds`
    async fn expire(&self, key: &str, seconds: i64) -> RedisResult<bool>;

    /// `PERSIST key`
    async fn persist(&self, key: &str) -> RedisResult<bool>;

    /// `TTL key` (키 없음: -2, 만료 없음: -1)
    async fn ttl(&self, key: &str) -> RedisResult<i64>;

    /// `EXISTS key`
    async fn exists(&self, key: &str) -> RedisResult<bool>;

    /// `DEL key [key ...]`
    async fn del(&self, keys: &[String]) -> RedisResult<i64>;

    /// `GET key`
    async fn get(&self, key: &str) -> RedisResult<Option<String>>;

    /// `SET key value`
    async fn set(&self, key: &str, value: &str) -> RedisResult<()>;

    /// `SET key value EX seconds`
    async fn set_ex(&self, key: &str, value: &str, seconds: u64) -> RedisResult<()>;

    /// `INCRBY key delta`
    async fn incr_by(&self, key: &str, delta: i64) -> RedisResult<i64>;

    /// `HGET key field`
    async fn hget(&self, key: &str, field: &str) -> RedisResult<Option<String>>;

    /// `HGETALL key`
    async fn hget_all(&self, key: &str) -> RedisResult<HashMap<String, String>>;

    /// `HSET key field value [field value ...]`
    async fn hset_multiple(&self, key: &str, items: &[(String, String)]) -> RedisResult<()>;

    /// `HSET key field value`
    async fn hset(&self, key: &str, field: &str, value: &str) -> RedisResult<()>;

    /// `HDEL key field [field ...]`
    async fn hdel(&self, key: &str, fields: &[&str]) -> RedisResult<i64>;

    /// `HEXISTS key field`
    async fn hexists(&self, key: &str, field: &str) -> RedisResult<bool>;

    /// `HINCRBYFLOAT key field amount`
    async fn hincr_by_float(&self, key: &str, field: &str, amount: f64) -> RedisResult<f64>;

    /// `SMEMBERS key`
    async fn smembers(&self, key: &str) -> RedisResult<HashSet<String>>;

    /// `SISMEMBER key member`
    async fn sismember(&self, key: &str, member: &str) -> RedisResult<bool>;

    /// `SADD key member [member ...]`
    async fn sadd(&self, key: &str, members: &[&str]) -> RedisResult<i64>;

    /// `SCARD key`
    async fn scard(&self, key: &str) -> RedisResult<i64>;

    /// `SREM key member [member ...]`
    async fn srem(&self, key: &str, members: &[&str]) -> RedisResult<i64>;

    /// `LRANGE key start stop`
    async fn lrange(&self, key: &str, start: i64, stop: i64) -> RedisResult<Vec<String>>;

    /// `LLEN key`
    async fn llen(&self, key: &str) -> RedisResult<i64>;

    /// `LINDEX key index`
    async fn lindex(&self, key: &str, index: i64) -> RedisResult<Option<String>>;

    /// `RPUSH key value [value ...]`
    async fn rpush(&self, key: &str, values: &[&str]) -> RedisResult<i64>;

    /// `LSET key index value`
    async fn lset(&self, key: &str, index: i64, value: &str) -> RedisResult<()>;

    /// `LREM key count value`
    async fn lrem(&self, key: &str, count: i64, value: &str) -> RedisResult<i64>;
}
