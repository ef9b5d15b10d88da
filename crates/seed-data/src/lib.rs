//! Deterministic example facility generation.
//!
//! This crate produces reproducible public-facility fixtures for demos and
//! tests. A [`SeedConfig`] names a seed value, a facility count, and a map
//! centre; [`generate_facilities`] expands it into plain facility seeds with
//! positions scattered around the centre. The same configuration always
//! produces identical output.
//!
//! The crate is intentionally free of domain dependencies: it emits plain
//! data structures that the application converts into validated domain
//! entities at its own boundary.

mod config;
mod error;
mod generator;

pub use config::SeedConfig;
pub use error::{ConfigError, GenerationError};
pub use generator::{FacilitySeed, generate_facilities};
