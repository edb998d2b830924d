//! API 라우트 설정 모듈
//!
//! 헬스체크, 샘플 엔드포인트, 캐시 API 를 애플리케이션에 등록합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new()
//!     .app_data(web::Data::new(cache))
//!     .configure(configure_all_routes);
//! ```

use crate::handlers;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    cfg.service(handlers::sample::hello_test);

    configure_cache_routes(cfg);
}

/// 캐시 관련 라우트를 설정합니다
///
/// `web::Data<RedisManager>` 가 앱 데이터로 등록되어 있어야 합니다.
///
/// # Available Routes
///
/// - `GET /api/v1/cache/{key}` - 값 조회
/// - `PUT /api/v1/cache/{key}?ttl=N` - 값 저장 (본문이 값)
/// - `DELETE /api/v1/cache/{key}` - 키 삭제
/// - `POST /api/v1/cache/{key}/incr?delta=N` - 정수 증가
/// - `POST /api/v1/cache/{key}/decr?delta=N` - 정수 감소
/// - `GET /api/v1/cache/{key}/ttl` - 남은 만료 시간 조회
///
/// # Examples
///
/// ```bash
/// curl -X PUT "http://localhost:8080/api/v1/cache/greeting?ttl=60" -d 'hello'
/// curl http://localhost:8080/api/v1/cache/greeting/ttl
/// ```
pub fn configure_cache_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/cache")
            // 더 구체적인 경로를 먼저 등록
            .service(handlers::cache::get_ttl)
            .service(handlers::cache::increment_value)
            .service(handlers::cache::decrement_value)
            .service(handlers::cache::get_value)
            .service(handlers::cache::put_value)
            .service(handlers::cache::delete_value),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "cache_service_backend",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00+00:00",
///   "features": {
///     "cache": "Redis",
///     "error_handling": "intercept + ErrorFallback"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "cache": "Redis",
            "error_handling": "intercept + ErrorFallback"
        }
    }))
}
