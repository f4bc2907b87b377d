use crate::dto::category::CategoryDto;

/// Board-game category reference data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub slug: String,
    pub description: String,
}

impl Category {
    pub fn from_entity(entity: entity::category::Model) -> Self {
        Self {
            slug: entity.slug,
            description: entity.description,
        }
    }

    pub fn into_dto(self) -> CategoryDto {
        CategoryDto {
            slug: self.slug,
            description: self.description,
        }
    }
}
