//! 사용자 프로필 수정 요청 DTO
use serde::Deserialize;
use validator::Validate;
use crate::domain::entities::users::user::User;
use crate::utils::string_utils::deserialize_optional_string;

/// 프로필 상세 정보 수정 요청 (`PUT /details`)
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateDetailsRequest {
    /// 표시 이름 (선택, 최대 50자)
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 50, message = "이름은 50자 이하여야 합니다"))]
    pub name: Option<String>,

    /// 이메일 (필수)
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(
        required(message = "이메일을 입력해주세요"),
        email(message = "유효한 이메일 주소를 입력해주세요")
    )]
    pub email: Option<String>,

    /// 개인 웹사이트 (선택, URL 형식)
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(url(message = "유효한 URL을 입력해주세요"))]
    pub website: Option<String>,
}

impl UpdateDetailsRequest {
    /// 검증된 값을 기존 사용자 엔티티에 덮어씁니다.
    pub fn apply_to(self, user: &mut User) {
        user.name = self.name.unwrap_or_default();
        user.email = self.email.unwrap_or_default();
        user.website = self.website.unwrap_or_default();
    }
}
