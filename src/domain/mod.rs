//! # Domain Layer
//!
//! HTTP 경계에서 주고받는 응답 모델을 정의합니다.
//!
//! 이 서비스에는 영속 엔티티가 없습니다. 캐시 키와 값은 모두 문자열이며
//! 호출자가 직접 생성하고 삭제하기 때문에, 도메인 계층은 응답 봉투
//! ([`dto::WebDto`])와 고정 결과 코드 카탈로그([`dto::ResCode`])만 가집니다.

pub mod dto;
