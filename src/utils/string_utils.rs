//! # 문자열 유틸리티
//!
//! 문자열 처리와 관련된 공통 유틸리티 함수들입니다.

use crate::core::ServiceError;

/// 로그에 남길 값의 최대 문자 수
pub const LOG_PREVIEW_LIMIT: usize = 256;

/// 문자열이 비어 있거나 공백만으로 이루어져 있는지 검사합니다.
///
/// ```rust,ignore
/// assert!(is_blank(""));
/// assert!(is_blank(" \t\n"));
/// assert!(!is_blank(" a "));
/// ```
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// 로그 출력용으로 값을 축약합니다.
///
/// [`LOG_PREVIEW_LIMIT`] 문자를 넘으면 잘라내고 전체 길이를 덧붙입니다.
/// 문자 단위로 자르므로 멀티바이트 문자가 깨지지 않습니다.
pub fn truncate_for_log(value: &str) -> String {
    let total = value.chars().count();
    if total <= LOG_PREVIEW_LIMIT {
        return value.to_string();
    }
    let preview: String = value.chars().take(LOG_PREVIEW_LIMIT).collect();
    format!("{}...({} chars)", preview, total)
}

/// 필수 문자열 필드 검증 및 정리
///
/// 빈 문자열이나 공백만 있는 경우 도메인 에러를 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 반환합니다.
///
/// # 인자
/// * `value` - 검증할 문자열
/// * `field_name` - 필드명 (에러 메시지용)
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, ServiceError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::message(format!("{}은(는) 필수입니다", field_name)));
    }
    Ok(trimmed.to_string())
}
