//! Facility directory transitions: adding facilities and submitting reviews.

use std::sync::Arc;

use mockable::Clock;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use super::app_state::AppState;
use crate::domain::ShellResult;
use crate::domain::error::ShellError;
use crate::domain::facility::{Facility, FacilityDraft};
use crate::domain::geo::Position;
use crate::domain::review::{Review, ReviewDraft};

/// Form payload for adding a facility, as captured by the admin dialog.
///
/// The identifier and an empty review list are stamped on by the service;
/// the form never supplies them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct FacilityForm {
    /// Display name.
    pub name: String,
    /// Location picked on the map.
    pub position: Position,
    /// Whether the facility charges an entry fee.
    pub paid: bool,
    /// Fee label, accepted only when `paid` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    /// Hygiene rating in `[1, 5]`.
    pub hygiene_rating: f32,
    /// Wheelchair accessibility flag.
    pub wheelchair_accessible: bool,
    /// Sanitary products availability flag.
    pub sanitary_products: bool,
    /// Showers availability flag.
    pub showers: bool,
}

/// Service applying facility-directory transitions to [`AppState`].
#[derive(Clone)]
pub struct FacilityDirectoryService {
    clock: Arc<dyn Clock>,
}

impl FacilityDirectoryService {
    /// Creates the service with the given clock.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use app::state::FacilityDirectoryService;
    /// use mockable::DefaultClock;
    ///
    /// let service = FacilityDirectoryService::new(Arc::new(DefaultClock));
    /// # let _ = service;
    /// ```
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Adds a facility to the directory.
    ///
    /// Administrators only. The new facility receives a fresh identifier
    /// and starts with no reviews.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError`] with
    /// [`crate::domain::ErrorCode::Forbidden`] for non-admin actors and
    /// [`crate::domain::ErrorCode::InvalidRequest`] when the form fails
    /// domain validation.
    pub fn add_facility(
        &self,
        state: &AppState,
        form: FacilityForm,
    ) -> ShellResult<AppState> {
        if !state.actor().is_admin() {
            return Err(ShellError::forbidden(
                "only administrators can add facilities",
            ));
        }

        let facility = Facility::new(FacilityDraft {
            id: Uuid::new_v4(),
            name: form.name,
            position: form.position,
            paid: form.paid,
            price: form.price,
            hygiene_rating: form.hygiene_rating,
            wheelchair_accessible: form.wheelchair_accessible,
            sanitary_products: form.sanitary_products,
            showers: form.showers,
            reviews: Vec::new(),
        })
        .map_err(|error| ShellError::invalid_request(error.to_string()))?;

        info!(facility_id = %facility.id(), name = facility.name(), "facility added");

        let mut facilities = state.facilities().to_vec();
        facilities.push(facility);
        Ok(state.with_facilities(facilities))
    }

    /// Submits a review for the facility with `facility_id`.
    ///
    /// The review is prepended (newest first). Administrators publish
    /// immediately; everyone else lands in the moderation queue.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError`] with
    /// [`crate::domain::ErrorCode::NotFound`] when the facility does not
    /// exist and [`crate::domain::ErrorCode::InvalidRequest`] when the
    /// draft fails domain validation.
    pub fn submit_review(
        &self,
        state: &AppState,
        facility_id: Uuid,
        draft: ReviewDraft,
    ) -> ShellResult<AppState> {
        if !state
            .facilities()
            .iter()
            .any(|facility| facility.id() == facility_id)
        {
            return Err(ShellError::not_found("facility not found")
                .with_details(json!({ "facilityId": facility_id })));
        }

        let review = Review::submit(draft, state.actor(), self.clock.utc())
            .map_err(|error| ShellError::invalid_request(error.to_string()))?;

        info!(
            %facility_id,
            review_id = %review.id,
            status = ?review.status,
            "review submitted"
        );

        let facilities = state
            .facilities()
            .iter()
            .map(|facility| {
                if facility.id() == facility_id {
                    facility.with_review(review.clone())
                } else {
                    facility.clone()
                }
            })
            .collect();
        Ok(state.with_facilities(facilities))
    }
}
