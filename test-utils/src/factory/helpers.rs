//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// Ensures each factory-created entity gets a unique identifier to prevent
/// collisions within a test database.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a review with all its dependencies.
///
/// Convenience method that creates a category, a user (as review owner), and
/// a review in one call, all with default values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((category, user, review))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_review_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::category::Model,
        entity::user::Model,
        entity::review::Model,
    ),
    DbErr,
> {
    let category = crate::factory::category::create_category(db).await?;
    let user = crate::factory::user::create_user(db).await?;
    let review = crate::factory::review::create_review(db, &category.slug, &user.username).await?;

    Ok((category, user, review))
}
