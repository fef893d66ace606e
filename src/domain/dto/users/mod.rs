//! # 사용자 DTO 모듈
//!
//! 사용자 도메인의 HTTP 요청 데이터 전송 객체입니다.
//! 응답은 핸들러에서 엔티티를 직접 직렬화하며, [`crate::domain::entities::users::User`]의
//! 비밀번호 필드는 직렬화 대상에서 제외되어 있습니다.

pub mod request;

