//! # 문자열 유틸리티
//!
//! 요청 DTO 역직렬화 시 문자열 필드를 정리하는 공통 함수들입니다.

use serde::Deserialize;

/// 선택적 문자열 필드 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 Some 옵션으로 반환합니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::clean_optional_string;
///
/// assert_eq!(clean_optional_string(Some("  a@b.com  ".to_string())), Some("a@b.com".to_string()));
/// assert_eq!(clean_optional_string(Some("   ".to_string())), None);
/// assert_eq!(clean_optional_string(None), None);
/// ```
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// 빈 문자열이나 공백만 있는 문자열을 None으로 바꾸므로,
/// `validator`의 `required` 규칙이 "키 없음"과 "빈 값"을 같은 누락으로 취급하게 됩니다.
/// 키 자체가 없는 경우를 위해 `#[serde(default)]`와 함께 사용합니다.
///
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct DetailsRequest {
///     #[serde(default, deserialize_with = "deserialize_optional_string")]
///     website: Option<String>,
/// }
///
/// // JSON: {"website": "  https://a.dev  "} → Some("https://a.dev")
/// // JSON: {"website": ""} → None
/// // JSON: {} → None
/// ```
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}
