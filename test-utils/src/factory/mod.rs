//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for
//! customization and a `create_*` convenience function for quick default
//! creation. Factories that reference other entities take the referenced
//! keys as constructor arguments, since foreign keys are enforced even in
//! the in-memory test database.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let category = factory::create_category(&db).await?;
//! let user = factory::create_user(&db).await?;
//! let review = factory::create_review(&db, &category.slug, &user.username).await?;
//! let comment = factory::create_comment(&db, review.review_id, &user.username).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! use test_utils::factory::review::ReviewFactory;
//!
//! let review = ReviewFactory::new(&db, "dexterity", "bainesface")
//!     .title("Jenga")
//!     .votes(5)
//!     .build()
//!     .await?;
//! ```

pub mod category;
pub mod comment;
pub mod helpers;
pub mod review;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use category::create_category;
pub use comment::create_comment;
pub use review::create_review;
pub use user::create_user;
