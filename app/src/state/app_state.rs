//! The immutable application-state snapshot.

use serde_json::json;
use uuid::Uuid;

use crate::domain::auth::Actor;
use crate::domain::error::ShellError;
use crate::domain::facility::Facility;
use crate::domain::geo::Position;
use crate::domain::opinion::{CommunityOpinion, search_opinions};
use crate::domain::query::{FacilityWithDistance, FilterCriteria, query};

/// One immutable snapshot of everything the shell renders from.
///
/// Transitions return a new snapshot; the previous one stays valid. The
/// selection is normalised to a facility id so review submissions never
/// leave a stale detail view behind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    facilities: Vec<Facility>,
    opinions: Vec<CommunityOpinion>,
    filters: FilterCriteria,
    selected_facility: Option<Uuid>,
    user_position: Option<Position>,
    actor: Actor,
}

impl AppState {
    /// Creates the initial state around a facility collection.
    pub fn new(facilities: Vec<Facility>) -> Self {
        Self {
            facilities,
            ..Self::default()
        }
    }

    /// The owned facility collection, input order preserved.
    pub fn facilities(&self) -> &[Facility] {
        self.facilities.as_slice()
    }

    /// The community board, newest opinion first.
    pub fn opinions(&self) -> &[CommunityOpinion] {
        self.opinions.as_slice()
    }

    /// The active filter criteria.
    pub fn filters(&self) -> &FilterCriteria {
        &self.filters
    }

    /// The device position, when geolocation delivered one.
    pub fn user_position(&self) -> Option<Position> {
        self.user_position
    }

    /// The session actor.
    pub fn actor(&self) -> Actor {
        self.actor
    }

    /// The currently selected facility, if the selection is still valid.
    pub fn selected_facility(&self) -> Option<&Facility> {
        let id = self.selected_facility?;
        self.facilities.iter().find(|facility| facility.id() == id)
    }

    /// Installs an authenticated actor.
    pub fn login(&self, actor: Actor) -> Self {
        Self {
            actor,
            ..self.clone()
        }
    }

    /// Reverts the session to a guest.
    pub fn logout(&self) -> Self {
        Self {
            actor: Actor::Guest,
            ..self.clone()
        }
    }

    /// Replaces the filter criteria.
    pub fn set_filters(&self, filters: FilterCriteria) -> Self {
        Self {
            filters,
            ..self.clone()
        }
    }

    /// Replaces the device position; `None` clears it.
    pub fn set_user_position(&self, position: Option<Position>) -> Self {
        Self {
            user_position: position,
            ..self.clone()
        }
    }

    /// Selects the facility with `id` for the detail view.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError`] with [`crate::domain::ErrorCode::NotFound`]
    /// when no facility carries that id.
    pub fn select_facility(&self, id: Uuid) -> Result<Self, ShellError> {
        if !self.facilities.iter().any(|facility| facility.id() == id) {
            return Err(ShellError::not_found("facility not found")
                .with_details(json!({ "facilityId": id })));
        }
        Ok(Self {
            selected_facility: Some(id),
            ..self.clone()
        })
    }

    /// Closes the detail view.
    pub fn clear_selection(&self) -> Self {
        Self {
            selected_facility: None,
            ..self.clone()
        }
    }

    /// The filtered, distance-ordered, distance-annotated projection the
    /// list and map render.
    pub fn visible_facilities(&self) -> Vec<FacilityWithDistance> {
        query(&self.facilities, &self.filters, self.user_position)
    }

    /// Community opinions matching `term`, newest first.
    pub fn search_opinions(&self, term: &str) -> Vec<CommunityOpinion> {
        search_opinions(&self.opinions, term)
    }

    /// Replaces the facility collection.
    pub(super) fn with_facilities(&self, facilities: Vec<Facility>) -> Self {
        Self {
            facilities,
            ..self.clone()
        }
    }

    /// Replaces the community board.
    pub(super) fn with_opinions(&self, opinions: Vec<CommunityOpinion>) -> Self {
        Self {
            opinions,
            ..self.clone()
        }
    }
}
