//! 공통 응답 봉투와 결과 코드 카탈로그

use serde::Serialize;

/// 고정 결과 코드 카탈로그
///
/// 도메인 에러는 임의의 코드를 가질 수 있지만, 성공과 시스템 에러는
/// 항상 아래의 고정 쌍으로 응답합니다.
///
/// | 변형 | resCode | resMsg |
/// |------|---------|--------|
/// | `Success` | `000000` | 成功 |
/// | `SysError` | `0000001` | 系统异常 |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResCode {
    Success,
    SysError,
}

impl ResCode {
    pub fn code(&self) -> &'static str {
        match self {
            ResCode::Success => "000000",
            ResCode::SysError => "0000001",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ResCode::Success => "成功",
            ResCode::SysError => "系统异常",
        }
    }
}

/// 응답 봉투
///
/// 필드는 setter 로 명시적으로 설정된 경우에만 JSON 에 나타납니다.
/// 필드 순서는 `resCode`, `resMsg`, `total`, `totalPages`, `data` 로 고정입니다.
///
/// # Examples
///
/// ```rust,ignore
/// let mut dto = WebDto::<String>::new();
/// dto.set_res_enum(ResCode::Success);
/// dto.set_data("hello".to_string());
///
/// assert_eq!(
///     dto.to_json(),
///     r#"{"resCode":"000000","resMsg":"成功","data":"hello"}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebDto<T = serde_json::Value> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub res_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub res_msg: Option<String>,

    /// 전체 레코드 수
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Default for WebDto<T> {
    fn default() -> Self {
        Self {
            res_code: None,
            res_msg: None,
            total: None,
            total_pages: None,
            data: None,
        }
    }
}

impl<T: Serialize> WebDto<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 성공 코드와 데이터를 담은 봉투를 생성합니다.
    pub fn success(data: T) -> Self {
        let mut dto = Self::new();
        dto.set_res_enum(ResCode::Success);
        dto.set_data(data);
        dto
    }

    /// 값이 있을 때만 `data` 를 채우는 성공 봉투를 생성합니다.
    ///
    /// `None` 은 `"data":null` 이 아니라 필드 생략으로 직렬화됩니다.
    pub fn success_opt(data: Option<T>) -> Self {
        let mut dto = Self::new();
        dto.set_res_enum(ResCode::Success);
        if let Some(data) = data {
            dto.set_data(data);
        }
        dto
    }

    pub fn set_res_code(&mut self, code: impl Into<String>) {
        self.res_code = Some(code.into());
    }

    pub fn set_res_msg(&mut self, message: impl Into<String>) {
        self.res_msg = Some(message.into());
    }

    pub fn set_total(&mut self, total: i64) {
        self.total = Some(total);
    }

    pub fn set_total_pages(&mut self, total_pages: i32) {
        self.total_pages = Some(total_pages);
    }

    pub fn set_data(&mut self, data: T) {
        self.data = Some(data);
    }

    /// 카탈로그의 코드와 메시지를 한 번에 설정합니다.
    pub fn set_res_enum(&mut self, res_code: ResCode) {
        self.set_res_code(res_code.code());
        self.set_res_msg(res_code.message());
    }

    /// 봉투를 JSON 문자열로 직렬화합니다.
    ///
    /// 데이터 직렬화에 실패하면 데이터를 제외한 시스템 에러 봉투를 반환합니다.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            log::error!("응답 봉투 직렬화 실패: {}", e);
            let mut fallback = WebDto::<()>::new();
            fallback.set_res_enum(ResCode::SysError);
            // 데이터 없는 봉투는 항상 직렬화됩니다
            serde_json::to_string(&fallback).unwrap_or_default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_dto_serializes_to_empty_object() {
        let dto = WebDto::<String>::new();
        assert_eq!(dto.to_json(), "{}");
    }

    #[test]
    fn test_only_set_fields_are_emitted() {
        let mut dto = WebDto::<String>::new();
        dto.set_res_code("X1");
        dto.set_res_msg("bad input");

        assert_eq!(dto.to_json(), r#"{"resCode":"X1","resMsg":"bad input"}"#);
    }

    #[test]
    fn test_field_order_and_pagination() {
        let mut dto = WebDto::<Vec<String>>::new();
        dto.set_data(vec!["a".to_string()]);
        dto.set_total_pages(3);
        dto.set_total(25);
        dto.set_res_enum(ResCode::Success);

        assert_eq!(
            dto.to_json(),
            r#"{"resCode":"000000","resMsg":"成功","total":25,"totalPages":3,"data":["a"]}"#
        );
    }

    #[test]
    fn test_sys_error_catalog_entry() {
        let mut dto = WebDto::<()>::new();
        dto.set_res_enum(ResCode::SysError);

        assert_eq!(dto.to_json(), r#"{"resCode":"0000001","resMsg":"系统异常"}"#);
    }

    #[test]
    fn test_success_constructor() {
        let dto = WebDto::success(42i64);
        assert_eq!(dto.res_code.as_deref(), Some("000000"));
        assert_eq!(dto.res_msg.as_deref(), Some("成功"));
        assert_eq!(dto.data, Some(42));
    }

    #[test]
    fn test_success_opt_omits_missing_data() {
        assert_eq!(
            WebDto::success_opt(None::<String>).to_json(),
            r#"{"resCode":"000000","resMsg":"成功"}"#
        );
        assert_eq!(
            WebDto::success_opt(Some(60_i64)).to_json(),
            r#"{"resCode":"000000","resMsg":"成功","data":60}"#
        );
    }
}
