//! 동작 확인용 핸들러

use actix_web::{HttpResponse, get};

use super::envelope::intercept;
use crate::core::AppResult;

/// 고정 문자열을 반환하는 확인용 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/test
/// # hello test
/// ```
#[get("/test")]
pub async fn hello_test() -> HttpResponse {
    intercept("hello_test", hello()).await
}

async fn hello() -> AppResult<String> {
    log::info!("hello test");
    Ok("hello test".to_string())
}
