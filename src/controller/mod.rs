//! HTTP request handlers.
//!
//! One handler per route. Each handler extracts and validates request
//! parameters (id path segments are parsed explicitly so malformed ids never
//! reach the database), delegates to the data layer, and wraps the result in
//! the resource-named JSON envelope with a fixed status code. Failures flow
//! back as `AppError` and are translated to wire responses by the error
//! layer.

pub mod category;
pub mod comment;
pub mod review;
pub mod user;

#[cfg(test)]
mod test;
