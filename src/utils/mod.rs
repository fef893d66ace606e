//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 요청 문자열 필드 정리 및 역직렬화 헬퍼

pub mod string_utils;
