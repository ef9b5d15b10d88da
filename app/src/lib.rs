//! Application core for the public sanitary facility finder.
//!
//! Users browse facilities on a map or list, filter by amenities, read and
//! submit reviews, and post community opinions; administrators add
//! facilities. This crate holds everything below the presentation layer:
//! validated domain entities, the pure facility query engine, immutable
//! application-shell state with reducer-style transitions, and the
//! authentication ports the UI talks to. Rendering, map tiles, audio
//! capture, and the real OTP backend remain external collaborators.

pub mod domain;
#[cfg(feature = "seed-data")]
pub mod seeding;
pub mod state;
pub mod telemetry;
