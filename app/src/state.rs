//! Immutable application-shell state and its transition services.
//!
//! The UI's global mutable state (facility list, community board, filter
//! criteria, selection, session actor) is modelled as an explicit immutable
//! [`AppState`] passed to and returned from pure transitions. Collections
//! are cloned on write and never mutated in place; the single UI event loop
//! owns the current snapshot, so no locking discipline is needed.
//!
//! Operations that stamp identities and timestamps live on small services
//! that carry an injected clock, keeping every transition deterministic
//! under test.

mod app_state;
mod community;
mod directory;


pub use app_state::AppState;
pub use community::CommunityBoardService;
pub use directory::{FacilityDirectoryService, FacilityForm};
