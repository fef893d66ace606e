//! 인증 요청관련 DTO
//!
//! 회원가입과 로그인 요청은 같은 `{email, password}` 형태와 검증 규칙을 공유합니다.
use serde::Deserialize;
use validator::Validate;
use crate::domain::entities::users::user::User;
use crate::utils::string_utils::deserialize_optional_string;

/// 이메일/비밀번호 요청 구조체
///
/// 필드가 누락되어도 역직렬화는 성공하고, 누락은 `required` 검증 에러로 보고됩니다.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CredentialsRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(
        required(message = "이메일을 입력해주세요"),
        email(message = "유효한 이메일 주소를 입력해주세요")
    )]
    pub email: Option<String>,

    #[serde(default)]
    #[validate(
        required(message = "비밀번호를 입력해주세요"),
        length(min = 6, max = 30, message = "비밀번호는 6-30자 사이여야 합니다")
    )]
    pub password: Option<String>,
}

/// 회원가입 요청 (`POST /signup`)
pub type SignupRequest = CredentialsRequest;

/// 로컬 로그인 요청 (`POST /signin`)
pub type SigninRequest = CredentialsRequest;

impl CredentialsRequest {
    /// 검증을 통과한 요청을 ID 없는 사용자 엔티티로 변환합니다.
    pub fn into_user(self) -> User {
        User::new_local(
            self.email.unwrap_or_default(),
            self.password.unwrap_or_default(),
        )
    }
}
