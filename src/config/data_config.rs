//! 서버 및 저장소 설정 관리 모듈
//!
//! 실행 환경, 서버 바인딩, Redis 접속, Rate Limiting, CORS 설정을 관리합니다.

use std::env;

use log::{error, info};

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// 환경별 기본 로그 필터
    pub fn default_log_filter(&self) -> &'static str {
        match self {
            Environment::Development | Environment::Test => "debug,actix_web=debug",
            Environment::Staging | Environment::Production => "info,actix_web=info",
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정 (기본값: 8080)
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정 (기본값: "127.0.0.1")
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    /// `host:port` 형식의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// Redis 접속 설정
pub struct RedisConfig;

impl RedisConfig {
    pub const DEFAULT_URL: &'static str = "redis://localhost:6379";

    /// Redis 접속 URL (`REDIS_URL`, 기본값: `redis://localhost:6379`)
    pub fn url() -> String {
        env::var("REDIS_URL").unwrap_or_else(|_| Self::DEFAULT_URL.to_string())
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    const DEFAULT_PER_SECOND: u64 = 100;
    const DEFAULT_BURST_SIZE: u32 = 200;

    /// 환경변수에서 Rate Limiting 설정을 로드합니다
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    ///
    /// ```bash
    /// # .env.dev (개발 환경)
    /// RATE_LIMIT_PER_SECOND=20
    /// RATE_LIMIT_BURST_SIZE=40
    /// ```
    pub fn load() -> Self {
        let config = Self::from_values(
            env::var("RATE_LIMIT_PER_SECOND").ok().as_deref(),
            env::var("RATE_LIMIT_BURST_SIZE").ok().as_deref(),
        );
        info!("Rate Limiting 설정 로드됨: {:?}", config);
        config
    }

    /// 문자열 값으로부터 설정을 만듭니다. 파싱에 실패하면 기본값을 사용합니다.
    pub fn from_values(per_second: Option<&str>, burst_size: Option<&str>) -> Self {
        let per_second = match per_second {
            Some(raw) => raw.trim().parse::<u64>().unwrap_or_else(|e| {
                error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 {} 사용", e, Self::DEFAULT_PER_SECOND);
                Self::DEFAULT_PER_SECOND
            }),
            None => Self::DEFAULT_PER_SECOND,
        };

        let burst_size = match burst_size {
            Some(raw) => raw.trim().parse::<u32>().unwrap_or_else(|e| {
                error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 {} 사용", e, Self::DEFAULT_BURST_SIZE);
                Self::DEFAULT_BURST_SIZE
            }),
            None => Self::DEFAULT_BURST_SIZE,
        };

        Self { per_second, burst_size }
    }
}

/// CORS 허용 오리진 설정
pub struct CorsConfig;

impl CorsConfig {
    const DEFAULT_ORIGINS: &'static str =
        "http://localhost:3000,http://127.0.0.1:3000,http://localhost:8080,http://127.0.0.1:8080";

    /// 허용 오리진 목록 (`CORS_ALLOWED_ORIGINS`, 쉼표 구분)
    pub fn allowed_origins() -> Vec<String> {
        let raw = env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| Self::DEFAULT_ORIGINS.to_string());
        Self::parse_origins(&raw)
    }

    pub fn parse_origins(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }
}
