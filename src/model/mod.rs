//! Domain models and operation parameter types.
//!
//! Domain models are converted from entity models at the repository boundary
//! and transformed to DTOs at the controller boundary, keeping database and
//! wire-format concerns out of the middle of the request flow.

pub mod category;
pub mod comment;
pub mod review;
pub mod user;
