use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct CategoryDto {
    pub slug: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CategoriesDto {
    pub categories: Vec<CategoryDto>,
}
