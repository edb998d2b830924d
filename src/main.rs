//! 캐시 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다.
//! Redis 연결을 설정하고 캐시 파사드를 핸들러에 주입합니다.

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};

use cache_service_backend::caching::{RedisClient, RedisManager};
use cache_service_backend::config::{CorsConfig, Environment, RateLimitConfig, RedisConfig, ServerConfig};
use cache_service_backend::middlewares::ErrorFallback;
use cache_service_backend::routes::configure_all_routes;
use cache_service_backend::utils::display_terminal::{
    print_boxed_title, print_step_complete, print_step_start, print_sub_task,
};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    let env_file = load_env_file();
    let environment = Environment::current();
    init_logging(&environment);

    print_boxed_title("CACHE SERVICE BACKEND");
    info!("🚀 캐시 서비스 시작중... (environment: {:?}, {})", environment, env_file);

    // 캐시 저장소 초기화
    let cache = initialize_cache().await?;

    // HTTP 서버 시작
    start_http_server(cache).await
}

/// Redis 에 연결하고 캐시 파사드를 생성합니다
///
/// 연결 실패는 `io::Error` 로 변환되어 프로세스가 종료 코드와 함께 끝납니다.
async fn initialize_cache() -> io::Result<web::Data<RedisManager>> {
    print_step_start(1, "Connecting to Redis");

    let redis_url = RedisConfig::url();
    let client = RedisClient::new(&redis_url).await.map_err(|e| {
        error!("Redis 연결 실패: {}", e);
        io::Error::other(format!("Redis 연결 실패: {}", e))
    })?;

    print_sub_task("url", &redis_url);
    print_step_complete(1, "Connecting to Redis", "connected");

    Ok(web::Data::new(RedisManager::new(Arc::new(client))))
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화, 최후 에러 처리 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(cache: web::Data<RedisManager>) -> io::Result<()> {
    print_step_start(2, "Starting HTTP server");

    let bind_address = ServerConfig::bind_address();

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::load();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("Rate Limiting 설정이 올바르지 않습니다 (0 값 불가)"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let allowed_origins = CorsConfig::allowed_origins();
    if allowed_origins.is_empty() {
        warn!("CORS 허용 오리진이 비어 있습니다. 교차 출처 요청은 모두 거부됩니다");
    }

    let server = HttpServer::new(move || {
        App::new()
            .app_data(cache.clone())
            // Rate Limiting 미들웨어 (라우트에 가장 가깝게 적용)
            .wrap(Governor::new(&governor_conf))
            // 최후 에러 처리
            .wrap(ErrorFallback)
            .wrap(configure_cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            // 라우트 설정
            .configure(configure_all_routes)
    })
    .bind(&bind_address)?
    .workers(4);

    print_step_complete(2, "Starting HTTP server", "listening");
    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Cache API: http://{}/api/v1/cache/{{key}}", bind_address);

    server.run().await
}

/// 환경별 설정 파일을 로드합니다
///
/// 로깅 초기화 전에 호출되므로 결과는 문자열로 돌려주고 호출자가 기록합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// ```bash
/// PROFILE=prod cargo run
/// ```
fn load_env_file() -> String {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let file = match profile.as_str() {
        "prod" => ".env.prod",
        "dev" => ".env.dev",
        _ => ".env",
    };

    let loaded = if file == ".env" {
        dotenv().is_ok()
    } else {
        dotenv::from_filename(file).is_ok()
    };

    if loaded {
        format!("profile={}, {} 파일 로드 됨", profile, file)
    } else {
        format!("profile={}, {} 파일 없음", profile, file)
    }
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG` 가 없으면 실행 환경별 기본 필터를 사용합니다.
///
/// ```bash
/// RUST_LOG=cache_service_backend::caching=debug cargo run
/// ```
fn init_logging(environment: &Environment) {
    env_logger::init_from_env(Env::default().default_filter_or(environment.default_log_filter()));
}

/// CORS 설정을 구성합니다
///
/// `CORS_ALLOWED_ORIGINS` 에 지정된 오리진만 허용합니다.
/// AJAX 판별에 쓰이는 `X-Requested-With` 헤더도 허용 목록에 포함됩니다.
fn configure_cors(allowed_origins: &[String]) -> Cors {
    let cors = allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin));

    cors
        // 허용할 HTTP 메서드
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        // 허용할 헤더
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::HeaderName::from_static("x-requested-with"),
        ])
        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
