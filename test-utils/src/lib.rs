//! Shared testing utilities for the board-game review catalogue.
//!
//! Provides a builder pattern for creating test contexts with in-memory
//! SQLite databases, per-entity factories for concise test data creation,
//! and a seeded catalogue fixture for end-to-end route tests.
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn lists_categories() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(entity::prelude::Category)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
