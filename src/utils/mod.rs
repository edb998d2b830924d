//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 공백 검사, 로그용 문자열 축약, 필수값 검증
//! - [`display_terminal`] - 시작 배너 등 터미널 출력 포맷팅 함수들

pub mod string_utils;
pub mod display_terminal;
