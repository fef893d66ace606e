//! User Entity Implementation
//!
//! 계정 서비스의 사용자 엔티티입니다.
//! 식별자는 UserService가 생성 시점에 부여하며, 비밀번호는 응답으로 직렬화되지 않습니다.

use serde::Serialize;
use uuid::Uuid;

/// 사용자 엔티티
///
/// 핸들러는 `id`가 없는 상태로 생성하여 `UserService::signup`에 넘기고,
/// 서비스는 저장에 성공하면 `id`를 채워 돌려줍니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct User {
    /// 사용자 고유 ID (생성 요청 시점에는 None)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// 비밀번호. 핸들러에서는 평문, 저장소에서는 bcrypt 해시. 절대 직렬화되지 않음
    #[serde(skip_serializing)]
    pub password: String,
    /// 표시 이름
    pub name: String,
    /// 프로필 이미지 URL
    pub image_url: String,
    /// 개인 웹사이트
    pub website: String,
}

impl User {
    /// 이메일/비밀번호로 새 로컬 사용자 생성 (ID 없음)
    pub fn new_local(email: String, password: String) -> Self {
        Self {
            email,
            password,
            ..Default::default()
        }
    }
}
