use serde::{Deserialize, Serialize};
use crate::domain::entities::users::Role;
use crate::domain::models::auth::AuthenticatedUser;

/// 현재 인증된 사용자 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUserResponse {
    pub username: String,
    pub role: Role,
}

impl From<AuthenticatedUser> for CurrentUserResponse {
    fn from(user: AuthenticatedUser) -> Self {
        let AuthenticatedUser { username, role } = user;
        Self { username, role }
    }
}
