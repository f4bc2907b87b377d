//! Seeded fixtures for end-to-end tests.

pub mod catalogue;

pub use catalogue::{seed_catalogue, SeededCatalogue};
