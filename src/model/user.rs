use crate::dto::user::UserDto;

/// A catalogue user. Users are seeded externally and never created or
/// modified through this API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub name: String,
    pub avatar_url: String,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            username: entity.username,
            name: entity.name,
            avatar_url: entity.avatar_url,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            username: self.username,
            name: self.name,
            avatar_url: self.avatar_url,
        }
    }
}
