//! 테스트용 메모리 캐시 대역
//!
//! Redis 명령 의미를 단순화하여 메모리에서 흉내 내고, 호출된 명령을
//! `"SET key value EX 60"` 같은 문자열로 기록합니다.
//! `fail_all` / `fail_command` 로 저장소 장애를 재현할 수 있습니다.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use redis::{ErrorKind, RedisError, RedisResult};

use super::commands::CacheCommands;

#[derive(Default)]
struct State {
    strings: HashMap<String, String>,
    hashes: HashMap<String, HashMap<String, String>>,
    sets: HashMap<String, HashSet<String>>,
    lists: HashMap<String, Vec<String>>,
    ttls: HashMap<String, i64>,
    calls: Vec<String>,
    failure: Option<Failure>,
}

struct Failure {
    command: Option<String>,
    detail: String,
}

impl State {
    fn contains(&self, key: &str) -> bool {
        self.strings.contains_key(key)
            || self.hashes.contains_key(key)
            || self.sets.contains_key(key)
            || self.lists.contains_key(key)
    }

    fn remove(&mut self, key: &str) -> bool {
        let existed = self.contains(key);
        self.strings.remove(key);
        self.hashes.remove(key);
        self.sets.remove(key);
        self.lists.remove(key);
        self.ttls.remove(key);
        existed
    }
}

#[derive(Default)]
pub(crate) struct RecordingCache {
    state: Mutex<State>,
}

impl RecordingCache {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// 이후 모든 명령을 실패시킵니다.
    pub(crate) fn fail_all(&self, detail: &str) {
        self.state.lock().unwrap().failure = Some(Failure {
            command: None,
            detail: detail.to_string(),
        });
    }

    /// 지정한 명령(예: `"EXPIRE"`)만 실패시킵니다.
    pub(crate) fn fail_command(&self, command: &str, detail: &str) {
        self.state.lock().unwrap().failure = Some(Failure {
            command: Some(command.to_string()),
            detail: detail.to_string(),
        });
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    pub(crate) fn clear_calls(&self) {
        self.state.lock().unwrap().calls.clear();
    }

    /// 명령을 기록하고 장애 설정에 해당하면 에러를 반환합니다.
    fn record(&self, state: &mut State, call: String) -> RedisResult<()> {
        let command = call.split_whitespace().next().unwrap_or_default().to_string();
        state.calls.push(call);

        match &state.failure {
            Some(failure) if failure.command.as_deref().is_none_or(|c| c == command) => {
                Err(RedisError::from((
                    ErrorKind::IoError,
                    "mock failure",
                    failure.detail.clone(),
                )))
            }
            _ => Ok(()),
        }
    }
}

fn response_error(message: &'static str) -> RedisError {
    RedisError::from((ErrorKind::ResponseError, message))
}

fn resolve_index(len: usize, index: i64) -> Option<usize> {
    let len = len as i64;
    let resolved = if index < 0 { len + index } else { index };
    (0..len).contains(&resolved).then_some(resolved as usize)
}

#[async_trait]
impl CacheCommands for RecordingCache {
    async fn expire(&self, key: &str, seconds: i64) -> RedisResult<bool> {
        let mut state = self.state.lock().unwrap();
        self.record(&mut state, format!("EXPIRE {} {}", key, seconds))?;
        if !state.contains(key) {
            return Ok(false);
        }
        if seconds <= 0 {
            state.remove(key);
        } else {
            state.ttls.insert(key.to_string(), seconds);
        }
        Ok(true)
    }

    async fn persist(&self, key: &str) -> RedisResult<bool> {
        let mut state = self.state.lock().unwrap();
        self.record(&mut state, format!("PERSIST {}", key))?;
        Ok(state.ttls.remove(key).is_some())
    }

    async fn ttl(&self, key: &str) -> RedisResult<i64> {
        let mut state = self.state.lock().unwrap();
        self.record(&mut state, format!("TTL {}", key))?;
        if !state.contains(key) {
            return Ok(-2);
        }
        Ok(state.ttls.get(key).copied().unwrap_or(-1))
    }

    async fn exists(&self, key: &str) -> RedisResult<bool> {
        let mut state = self.state.lock().unwrap();
        self.record(&mut state, format!("EXISTS {}", key))?;
        Ok(state.contains(key))
    }

    async fn del(&self, keys: &[String]) -> RedisResult<i64> {
        let mut state = self.state.lock().unwrap();
        self.record(&mut state, format!("DEL {}", keys.join(" ")))?;
        Ok(keys.iter().filter(|key| state.remove(key)).count() as i64)
    }

    async fn get(&self, key: &str) -> RedisResult<Option<String>> {
        let mut state = self.state.lock().unwrap();
        self.record(&mut state, format!("GET {}", key))?;
        Ok(state.strings.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> RedisResult<()> {
        let mut state = self.state.lock().unwrap();
        self.record(&mut state, format!("SET {} {}", key, value))?;
        state.remove(key);
        state.strings.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn set_ex(&self, key: &str, value: &str, seconds: u64) -> RedisResult<()> {
        let mut state = self.state.lock().unwrap();
        self.record(&mut state, format!("SET {} {} EX {}", key, value, seconds))?;
        state.remove(key);
        state.strings.insert(key.to_string(), value.to_string());
        state.ttls.insert(key.to_string(), seconds as i64);
        Ok(())
    }

    async fn incr_by(&self, key: &str, delta: i64) -> RedisResult<i64> {
        let mut state = self.state.lock().unwrap();
        self.record(&mut state, format!("INCRBY {} {}", key, delta))?;
        let current = match state.strings.get(key) {
            Some(value) => value
                .parse::<i64>()
                .map_err(|_| response_error("value is not an integer"))?,
            None => 0,
        };
        let next = current + delta;
        state.strings.insert(key.to_string(), next.to_string());
        Ok(next)
    }

    async fn hget(&self, key: &str, field: &str) -> RedisResult<Option<String>> {
        let mut state = self.state.lock().unwrap();
        self.record(&mut state, format!("HGET {} {}", key, field))?;
        Ok(state.hashes.get(key).and_then(|h| h.get(field)).cloned())
    }

    async fn hget_all(&self, key: &str) -> RedisResult<HashMap<String, String>> {
        let mut state = self.state.lock().unwrap();
        self.record(&mut state, format!("HGETALL {}", key))?;
        Ok(state.hashes.get(key).cloned().unwrap_or_default())
    }

    async fn hset_multiple(&self, key: &str, items: &[(String, String)]) -> RedisResult<()> {
        let mut state = self.state.lock().unwrap();
        let mut rendered: Vec<String> = items.iter().map(|(f, v)| format!("{} {}", f, v)).collect();
        rendered.sort();
        self.record(&mut state, format!("HSET {} {}", key, rendered.join(" ")))?;
        let hash = state.hashes.entry(key.to_string()).or_default();
        for (field, value) in items {
            hash.insert(field.clone(), value.clone());
        }
        Ok(())
    }

    async fn hset(&self, key: &str, field: &str, value: &str) -> RedisResult<()> {
        let mut state = self.state.lock().unwrap();
        self.record(&mut state, format!("HSET {} {} {}", key, field, value))?;
        state
            .hashes
            .entry(key.to_string())
            .or_default()
            .insert(field.to_string(), value.to_string());
        Ok(())
    }

    async fn hdel(&self, key: &str, fields: &[&str]) -> RedisResult<i64> {
        let mut state = self.state.lock().unwrap();
        self.record(&mut state, format!("HDEL {} {}", key, fields.join(" ")))?;
        let removed = match state.hashes.get_mut(key) {
            Some(hash) => fields.iter().filter(|f| hash.remove(**f).is_some()).count(),
            None => 0,
        };
        if state.hashes.get(key).is_some_and(|h| h.is_empty()) {
            state.remove(key);
        }
        Ok(removed as i64)
    }

    async fn hexists(&self, key: &str, field: &str) -> RedisResult<bool> {
        let mut state = self.state.lock().unwrap();
        self.record(&mut state, format!("HEXISTS {} {}", key, field))?;
        Ok(state.hashes.get(key).is_some_and(|h| h.contains_key(field)))
    }

    async fn hincr_by_float(&self, key: &str, field: &str, amount: f64) -> RedisResult<f64> {
        let mut state = self.state.lock().unwrap();
        self.record(&mut state, format!("HINCRBYFLOAT {} {} {}", key, field, amount))?;
        let hash = state.hashes.entry(key.to_string()).or_default();
        let current = match hash.get(field) {
            Some(value) => value
                .parse::<f64>()
                .map_err(|_| response_error("hash value is not a float"))?,
            None => 0.0,
        };
        let next = current + amount;
        hash.insert(field.to_string(), next.to_string());
        Ok(next)
    }

    async fn smembers(&self, key: &str) -> RedisResult<HashSet<String>> {
        let mut state = self.state.lock().unwrap();
        self.record(&mut state, format!("SMEMBERS {}", key))?;
        Ok(state.sets.get(key).cloned().unwrap_or_default())
    }

    async fn sismember(&self, key: &str, member: &str) -> RedisResult<bool> {
        let mut state = self.state.lock().unwrap();
        self.record(&mut state, format!("SISMEMBER {} {}", key, member))?;
        Ok(state.sets.get(key).is_some_and(|s| s.contains(member)))
    }

    async fn sadd(&self, key: &str, members: &[&str]) -> RedisResult<i64> {
        let mut state = self.state.lock().unwrap();
        self.record(&mut state, format!("SADD {} {}", key, members.join(" ")))?;
        let set = state.sets.entry(key.to_string()).or_default();
        Ok(members.iter().filter(|m| set.insert(m.to_string())).count() as i64)
    }

    async fn scard(&self, key: &str) -> RedisResult<i64> {
        let mut state = self.state.lock().unwrap();
        self.record(&mut state, format!("SCARD {}", key))?;
        Ok(state.sets.get(key).map_or(0, |s| s.len() as i64))
    }

    async fn srem(&self, key: &str, members: &[&str]) -> RedisResult<i64> {
        let mut state = self.state.lock().unwrap();
        self.record(&mut state, format!("SREM {} {}", key, members.join(" ")))?;
        let removed = match state.sets.get_mut(key) {
            Some(set) => members.iter().filter(|m| set.remove(**m)).count(),
            None => 0,
        };
        if state.sets.get(key).is_some_and(|s| s.is_empty()) {
            state.remove(key);
        }
        Ok(removed as i64)
    }

    async fn lrange(&self, key: &str, start: i64, stop: i64) -> RedisResult<Vec<String>> {
        let mut state = self.state.lock().unwrap();
        self.record(&mut state, format!("LRANGE {} {} {}", key, start, stop))?;
        let Some(list) = state.lists.get(key) else {
            return Ok(Vec::new());
        };
        let len = list.len() as i64;
        let start = if start < 0 { (len + start).max(0) } else { start };
        let stop = if stop < 0 { len + stop } else { stop.min(len - 1) };
        if start > stop || start >= len {
            return Ok(Vec::new());
        }
        Ok(list[start as usize..=stop as usize].to_vec())
    }

    async fn llen(&self, key: &str) -> RedisResult<i64> {
        let mut state = self.state.lock().unwrap();
        self.record(&mut state, format!("LLEN {}", key))?;
        Ok(state.lists.get(key).map_or(0, |l| l.len() as i64))
    }

    async fn lindex(&self, key: &str, index: i64) -> RedisResult<Option<String>> {
        let mut state = self.state.lock().unwrap();
        self.record(&mut state, format!("LINDEX {} {}", key, index))?;
        Ok(state
            .lists
            .get(key)
            .and_then(|list| resolve_index(list.len(), index).map(|i| list[i].clone())))
    }

    async fn rpush(&self, key: &str, values: &[&str]) -> RedisResult<i64> {
        let mut state = self.state.lock().unwrap();
        self.record(&mut state, format!("RPUSH {} {}", key, values.join(" ")))?;
        let list = state.lists.entry(key.to_string()).or_default();
        list.extend(values.iter().map(|v| v.to_string()));
        Ok(list.len() as i64)
    }

    async fn lset(&self, key: &str, index: i64, value: &str) -> RedisResult<()> {
        let mut state = self.state.lock().unwrap();
        self.record(&mut state, format!("LSET {} {} {}", key, index, value))?;
        let list = state
            .lists
            .get_mut(key)
            .ok_or_else(|| response_error("no such key"))?;
        let position = resolve_index(list.len(), index).ok_or_else(|| response_error("index out of range"))?;
        list[position] = value.to_string();
        Ok(())
    }

    async fn lrem(&self, key: &str, count: i64, value: &str) -> RedisResult<i64> {
        let mut state = self.state.lock().unwrap();
        self.record(&mut state, format!("LREM {} {} {}", key, count, value))?;
        let Some(list) = state.lists.get_mut(key) else {
            return Ok(0);
        };
        let limit = if count == 0 { usize::MAX } else { count.unsigned_abs() as usize };
        let mut removed = 0usize;
        if count >= 0 {
            list.retain(|item| {
                if removed < limit && item == value {
                    removed += 1;
                    false
                } else {
                    true
                }
            });
        } else {
            let mut kept: Vec<String> = Vec::with_capacity(list.len());
            for item in list.drain(..).rev() {
                if removed < limit && item == value {
                    removed += 1;
                } else {
                    kept.push(item);
                }
            }
            kept.reverse();
            *list = kept;
        }
        if list.is_empty() {
            state.remove(key);
        }
        Ok(removed as i64)
    }
}
