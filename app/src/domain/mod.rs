//! Domain primitives and aggregates.
//!
//! Purpose: define strongly typed domain entities used by the application
//! shell and presentation layer. Keep types immutable and document
//! invariants and serialisation contracts (serde) in each type's Rustdoc.
//!
//! Public surface:
//! - Geographic value objects ([`Position`], distance helpers).
//! - Facility, review, and community-opinion aggregates.
//! - The pure facility query engine ([`query()`], [`filter()`],
//!   [`sort_by_distance()`]).
//! - Authentication primitives and driving ports.

pub mod auth;
pub mod error;
pub mod facility;
pub mod geo;
pub mod opinion;
pub mod ports;
pub mod query;
pub mod review;

pub use self::auth::{Actor, AuthValidationError, EmailAddress, LoginCredentials, OtpCode};
pub use self::error::{ErrorCode, ShellError};
pub use self::facility::{Facility, FacilityDraft, FacilityValidationError};
pub use self::geo::{GeoValidationError, Position, directions_url, format_distance};
pub use self::opinion::{CommunityOpinion, OpinionDraft, OpinionValidationError, Reaction};
pub use self::query::{FacilityWithDistance, FilterCriteria, filter, query, sort_by_distance};
pub use self::review::{Review, ReviewDraft, ReviewStatus, ReviewValidationError};

/// Convenient result alias for shell-facing operations.
pub type ShellResult<T> = Result<T, ShellError>;
