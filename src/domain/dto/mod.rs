//! 데이터 전송 객체 (DTO)
//!
//! 모든 컨트롤러 응답은 [`WebDto`] 봉투 형태를 따릅니다.
//!
//! ```json
//! {"resCode":"000000","resMsg":"成功","data":"value"}
//! ```
//!
//! 설정되지 않은 필드는 JSON 에서 생략됩니다 (`null` 로 직렬화되지 않음).

pub mod web_dto;

pub use web_dto::{ResCode, WebDto};
