//! JWT 토큰 클레임 구조체와 발급되는 토큰 쌍
//!
//! 액세스 토큰과 리프레시 토큰은 서로 다른 클레임과 서명 키를 사용합니다.
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 액세스 토큰의 클레임
///
/// 인증 미들웨어가 요청마다 검증하므로 최소한의 사용자 식별 정보만 담습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    /// 토큰의 주체 (사용자 ID)
    pub sub: String,
    /// 사용자 이메일
    pub email: String,
    /// 토큰 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// 토큰 만료 시간 (Unix timestamp)
    pub exp: i64,
}

/// 리프레시 토큰의 클레임
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshClaims {
    /// 토큰의 주체 (사용자 ID)
    pub sub: String,
    /// 토큰 고유 ID. 토큰 교체 시 "이전 토큰 ID"로 사용됨
    pub jti: String,
    pub iat: i64,
    pub exp: i64,
}

/// 검증이 끝난 리프레시 토큰
#[derive(Debug, Clone, PartialEq)]
pub struct RefreshToken {
    /// 토큰 고유 ID (jti)
    pub id: String,
    /// 토큰이 발급된 사용자
    pub user_id: Uuid,
    /// 서명된 원본 토큰 문자열
    pub token: String,
}

/// 한 세션에 대해 함께 발급되는 토큰 쌍
///
/// 두 토큰이 모두 만들어진 경우에만 값이 존재합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenPair {
    /// 액세스 토큰 (API 접근용 단기 토큰)
    #[serde(rename = "access")]
    pub access_token: String,
    /// 리프레시 토큰 (토큰 갱신용 장기 토큰)
    #[serde(rename = "refresh")]
    pub refresh_token: String,
}
