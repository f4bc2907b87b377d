//! Wire-format request and response bodies.
//!
//! Success bodies wrap the resource in a named JSON property (`categories`,
//! `reviews`, `review`, `comments`, `comment`, `users`); error bodies are
//! always `{ "msg": <fixed string> }`. Request DTOs use `Option` fields so
//! incomplete payloads are validated by the controllers instead of being
//! rejected by serde, and unknown fields are ignored.

pub mod api;
pub mod category;
pub mod comment;
pub mod review;
pub mod user;
