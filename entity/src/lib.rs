//! Database entity models for the board-game review catalogue.
//!
//! Each module defines one SeaORM entity mirroring a table created by the
//! `migration` crate. Relations between entities are declared here so that
//! joins (e.g. the review comment count aggregate) and schema generation in
//! tests work from a single definition.

pub mod prelude;

pub mod category;
pub mod comment;
pub mod review;
pub mod user;
