use serde::Deserialize;
use validator::Validate;
use crate::utils::string_utils::deserialize_optional_string;

/// 토큰 갱신 요청 DTO (`POST /tokens`)
#[derive(Debug, Default, Deserialize, Validate)]
pub struct TokensRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(required(message = "리프레시 토큰이 필요합니다"))]
    pub refresh_token: Option<String>,
}
