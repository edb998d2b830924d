//! # Redis 캐시 클라이언트 구현
//!
//! [`CacheCommands`] 의 운영 구현체입니다. 각 메서드는 Redis 명령 하나를
//! 그대로 전달하며, 로깅과 에러 변환은 상위의
//! [`RedisManager`](super::manager::RedisManager) 가 담당합니다.
//!
//! ## 연결 관리
//!
//! `redis::aio::ConnectionManager` 를 사용합니다. 내부적으로 멀티플렉싱된
//! 단일 연결을 공유하며, 연결이 끊어지면 다음 요청 시 자동으로 재연결합니다.
//! 클론 비용이 낮으므로 호출마다 복제하여 사용합니다.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client, RedisResult};

use super::commands::CacheCommands;

/// Redis 캐시 클라이언트 래퍼
///
/// ```rust,ignore
/// use crate::caching::redis::RedisClient;
///
/// let client = RedisClient::new("redis://localhost:6379").await?;
/// client.set_ex("session:abc", "payload", 3600).await?;
/// let value = client.get("session:abc").await?;
/// ```
#[derive(Clone)]
pub struct RedisClient {
    connection: ConnectionManager,
}

impl RedisClient {
    /// 새 Redis 클라이언트 인스턴스를 생성합니다.
    ///
    /// 생성 시 `PING` 명령으로 서버 가용성을 확인합니다.
    ///
    /// ## 에러 케이스
    ///
    /// - 잘못된 URL 형식
    /// - Redis 서버에 연결할 수 없는 경우
    /// - 인증 실패
    pub async fn new(redis_url: &str) -> RedisResult<Self> {
        let client = Client::open(redis_url)?;
        let mut connection = ConnectionManager::new(client).await?;

        // 연결 테스트 - PING 명령으로 서버 가용성 확인
        redis::cmd("PING").query_async::<()>(&mut connection).await?;

        log::info!("✅ Redis 연결 성공");

        Ok(Self { connection })
    }

    fn conn(&self) -> ConnectionManager {
        self.connection.clone()
    }
}

#[async_trait]
impl CacheCommands for RedisClient {
    async fn expire(&self, key: &str, seconds: i64) -> RedisResult<bool> {
        let mut conn = self.conn();
        conn.expire(key, seconds).await
    }

    async fn persist(&self, key: &str) -> RedisResult<bool> {
        let mut conn = self.conn();
        conn.persist(key).await
    }

    async fn ttl(&self, key: &str) -> RedisResult<i64> {
        let mut conn = self.conn();
        conn.ttl(key).await
    }

    async fn exists(&self, key: &str) -> RedisResult<bool> {
        let mut conn = self.conn();
        conn.exists(key).await
    }

    async fn del(&self, keys: &[String]) -> RedisResult<i64> {
        let mut conn = self.conn();
        conn.del(keys).await
    }

    async fn get(&self, key: &str) -> RedisResult<Option<String>> {
        let mut conn = self.conn();
        conn.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> RedisResult<()> {
        let mut conn = self.conn();
        conn.set(key, value).await
    }

    async fn set_ex(&self, key: &str, value: &str, seconds: u64) -> RedisResult<()> {
        let mut conn = self.conn();
        conn.set_ex(key, value, seconds).await
    }

    async fn incr_by(&self, key: &str, delta: i64) -> RedisResult<i64> {
        let mut conn = self.conn();
        conn.incr(key, delta).await
    }

    async fn hget(&self, key: &str, field: &str) -> RedisResult<Option<String>> {
        let mut conn = self.conn();
        conn.hget(key, field).await
    }

    async fn hget_all(&self, key: &str) -> RedisResult<HashMap<String, String>> {
        let mut conn = self.conn();
        conn.hgetall(key).await
    }

    async fn hset_multiple(&self, key: &str, items: &[(String, String)]) -> RedisResult<()> {
        let mut conn = self.conn();
        conn.hset_multiple(key, items).await
    }

    async fn hset(&self, key: &str, field: &str, value: &str) -> RedisResult<()> {
        let mut conn = self.conn();
        let _: i64 = conn.hset(key, field, value).await?;
        Ok(())
    }

    async fn hdel(&self, key: &str, fields: &[&str]) -> RedisResult<i64> {
        let mut conn = self.conn();
        conn.hdel(key, fields).await
    }

    async fn hexists(&self, key: &str, field: &str) -> RedisResult<bool> {
        let mut conn = self.conn();
        conn.hexists(key, field).await
    }

    async fn hincr_by_float(&self, key: &str, field: &str, amount: f64) -> RedisResult<f64> {
        let mut conn = self.conn();
        conn.hincr(key, field, amount).await
    }

    async fn smembers(&self, key: &str) -> RedisResult<HashSet<String>> {
        let mut conn = self.conn();
        conn.smembers(key).await
    }

    async fn sismember(&self, key: &str, member: &str) -> RedisResult<bool> {
        let mut conn = self.conn();
        conn.sismember(key, member).await
    }

    async fn sadd(&self, key: &str, members: &[&str]) -> RedisResult<i64> {
        let mut conn = self.conn();
        conn.sadd(key, members).await
    }

    async fn scard(&self, key: &str) -> RedisResult<i64> {
        let mut conn = self.conn();
        conn.scard(key).await
    }

    async fn srem(&self, key: &str, members: &[&str]) -> RedisResult<i64> {
        let mut conn = self.conn();
        conn.srem(key, members).await
    }

    async fn lrange(&self, key: &str, start: i64, stop: i64) -> RedisResult<Vec<String>> {
        let mut conn = self.conn();
        conn.lrange(key, start as isize, stop as isize).await
    }

    async fn llen(&self, key: &str) -> RedisResult<i64> {
        let mut conn = self.conn();
        conn.llen(key).await
    }

    async fn lindex(&self, key: &str, index: i64) -> RedisResult<Option<String>> {
        let mut conn = self.conn();
        conn.lindex(key, index as isize).await
    }

    async fn rpush(&self, key: &str, values: &[&str]) -> RedisResult<i64> {
        let mut conn = self.conn();
        conn.rpush(key, values).await
    }

    async fn lset(&self, key: &str, index: i64, value: &str) -> RedisResult<()> {
        let mut conn = self.conn();
        conn.lset(key, index as isize, value).await
    }

    async fn lrem(&self, key: &str, count: i64, value: &str) -> RedisResult<i64> {
        let mut conn = self.conn();
        conn.lrem(key, count as isize, value).await
    }
}
