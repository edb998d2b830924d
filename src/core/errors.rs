//! # Application Error Handling System
//!
//! 서비스 계층의 [`ServiceError`] 와 HTTP 경계의 [`AppError`] 를 정의합니다.
//!
//! `ServiceError` 는 두 가지 변형만 가집니다.
//!
//! - **Domain**: 호출자가 의미를 알 수 있는 비즈니스 실패. 선택적 코드,
//!   필수 메시지, 필드별 메시지 맵, 원인 에러를 담습니다.
//! - **System**: 예상하지 못한 실패. 원본 정보는 로그에만 남고 응답에는
//!   항상 고정 코드/메시지가 사용됩니다.
//!
//! `AppError` 는 핸들러가 반환하는 에러 타입이며, `actix_web::ResponseError` 를
//! 구현하여 인터셉터를 거치지 않은 경우에도 같은 봉투 형식으로 응답합니다.

use std::collections::HashMap;

use actix_web::http::StatusCode;
use thiserror::Error;

use crate::domain::dto::{ResCode, WebDto};

type BoxedCause = Box<dyn std::error::Error + Send + Sync>;

/// 서비스 계층 에러
///
/// # 예제
///
/// ```rust,ignore
/// // 코드 없는 검증 에러
/// return Err(ServiceError::message("증가값은 0 이상이어야 합니다"));
///
/// // 코드와 필드 메시지를 가진 에러
/// let mut fields = HashMap::new();
/// fields.insert("email".to_string(), "이메일 형식이 아닙니다".to_string());
/// return Err(ServiceError::with_field_errors("V001", "입력값 오류", fields));
/// ```
#[derive(Error, Debug)]
pub enum ServiceError {
    /// 비즈니스 규칙 위반
    #[error("{message}")]
    Domain {
        code: Option<String>,
        message: String,
        field_errors: Option<HashMap<String, String>>,
        #[source]
        cause: Option<BoxedCause>,
    },

    /// 시스템 에러 (고정 코드/메시지)
    #[error("系统异常")]
    System,
}

impl ServiceError {
    /// 코드 없이 메시지만 가진 도메인 에러를 생성합니다.
    pub fn message(message: impl Into<String>) -> Self {
        ServiceError::Domain {
            code: None,
            message: message.into(),
            field_errors: None,
            cause: None,
        }
    }

    /// 코드와 메시지를 가진 도메인 에러를 생성합니다.
    pub fn coded(code: impl Into<String>, message: impl Into<String>) -> Self {
        ServiceError::Domain {
            code: Some(code.into()),
            message: message.into(),
            field_errors: None,
            cause: None,
        }
    }

    /// 하위 원인 에러를 감싼 도메인 에러를 생성합니다.
    pub fn with_cause(
        code: Option<String>,
        message: impl Into<String>,
        cause: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        ServiceError::Domain {
            code,
            message: message.into(),
            field_errors: None,
            cause: Some(Box::new(cause)),
        }
    }

    /// 필드별 메시지 맵을 가진 검증 에러를 생성합니다.
    pub fn with_field_errors(
        code: impl Into<String>,
        message: impl Into<String>,
        field_errors: HashMap<String, String>,
    ) -> Self {
        ServiceError::Domain {
            code: Some(code.into()),
            message: message.into(),
            field_errors: Some(field_errors),
            cause: None,
        }
    }

    /// 결과 코드 카탈로그 항목으로부터 에러를 생성합니다.
    pub fn from_res_code(res_code: ResCode) -> Self {
        match res_code {
            ResCode::SysError => ServiceError::System,
            other => ServiceError::coded(other.code(), other.message()),
        }
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            ServiceError::Domain { code, .. } => code.as_deref(),
            ServiceError::System => Some(ResCode::SysError.code()),
        }
    }

    pub fn res_msg(&self) -> &str {
        match self {
            ServiceError::Domain { message, .. } => message,
            ServiceError::System => ResCode::SysError.message(),
        }
    }

    pub fn field_errors(&self) -> Option<&HashMap<String, String>> {
        match self {
            ServiceError::Domain { field_errors, .. } => field_errors.as_ref(),
            ServiceError::System => None,
        }
    }

    pub fn is_system(&self) -> bool {
        matches!(self, ServiceError::System)
    }
}

/// HTTP 경계 에러 타입
///
/// 핸들러는 `AppResult<String>` 을 반환하고, 인터셉터
/// ([`intercept`](crate::handlers::envelope::intercept)) 가 이를 봉투로 변환합니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 서비스 계층 에러 (도메인/시스템)
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// 읽기 전용 캐시 호출에서 그대로 전달된 Redis 에러
    #[error("Redis error: {0}")]
    RedisError(#[from] redis::RedisError),

    /// 내부 서버 에러
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 에러를 응답 봉투로 변환합니다.
    ///
    /// 도메인 에러만 자신의 코드와 메시지를 노출하고,
    /// 나머지는 모두 고정 시스템 에러 쌍으로 대체됩니다.
    /// 도메인 에러에 코드가 없으면 `resCode` 는 생략됩니다.
    pub fn to_envelope(&self) -> WebDto<()> {
        let mut dto = WebDto::new();
        match self {
            AppError::Service(ServiceError::Domain { code, message, .. }) => {
                if let Some(code) = code {
                    dto.set_res_code(code.as_str());
                }
                dto.set_res_msg(message.as_str());
            }
            _ => dto.set_res_enum(ResCode::SysError),
        }
        dto
    }

    pub fn is_domain(&self) -> bool {
        matches!(self, AppError::Service(ServiceError::Domain { .. }))
    }
}

impl actix_web::ResponseError for AppError {
    /// 봉투 형식의 HTTP 에러 응답을 생성합니다.
    ///
    /// - 도메인 에러 → 400 Bad Request
    /// - 나머지 → 500 Internal Server Error
    fn status_code(&self) -> StatusCode {
        if self.is_domain() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .content_type("application/json")
            .body(self.to_envelope().to_json())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// let body = String::from_utf8(bytes.to_vec()).context("요청 본문 디코딩 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
