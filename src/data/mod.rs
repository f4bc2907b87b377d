//! Database repository layer for all domain entities.
//!
//! Repositories hold a reference to the database connection and perform all
//! queries and writes, converting entity models to domain models at the
//! boundary. Expected domain failures (unknown review, unknown comment,
//! unknown comment author) are returned as typed `AppError` outcomes carrying
//! the exact status and message for the wire; unexpected `DbErr` values
//! propagate unchanged for the error layer to map to a generic 500.
//! Repositories never log.

pub mod category;
pub mod comment;
pub mod review;
pub mod user;

#[cfg(test)]
mod test;
