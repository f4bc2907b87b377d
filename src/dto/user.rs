use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct UserDto {
    pub username: String,
    pub name: String,
    pub avatar_url: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UsersDto {
    pub users: Vec<UserDto>,
}
