//! Community board transitions: posting opinions and reacting to them.

use std::sync::Arc;

use mockable::Clock;
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use super::app_state::AppState;
use crate::domain::ShellResult;
use crate::domain::error::ShellError;
use crate::domain::opinion::{CommunityOpinion, OpinionDraft, Reaction};

/// Service applying community-board transitions to [`AppState`].
#[derive(Clone)]
pub struct CommunityBoardService {
    clock: Arc<dyn Clock>,
}

impl CommunityBoardService {
    /// Creates the service with the given clock.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Posts a new opinion to the top of the board.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError`] with
    /// [`crate::domain::ErrorCode::InvalidRequest`] when the draft fails
    /// domain validation.
    pub fn post_opinion(
        &self,
        state: &AppState,
        draft: OpinionDraft,
    ) -> ShellResult<AppState> {
        let opinion = CommunityOpinion::post(draft, self.clock.utc())
            .map_err(|error| ShellError::invalid_request(error.to_string()))?;

        info!(opinion_id = %opinion.id, author = %opinion.user_name, "opinion posted");

        let mut opinions = state.opinions().to_vec();
        opinions.insert(0, opinion);
        Ok(state.with_opinions(opinions))
    }

    /// Applies `reaction` to the opinion with `opinion_id`.
    ///
    /// Toggle semantics: repeating a reaction retracts it, switching moves
    /// the count.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError`] with
    /// [`crate::domain::ErrorCode::NotFound`] when the opinion does not
    /// exist.
    pub fn react(
        &self,
        state: &AppState,
        opinion_id: Uuid,
        reaction: Reaction,
    ) -> ShellResult<AppState> {
        if !state
            .opinions()
            .iter()
            .any(|opinion| opinion.id == opinion_id)
        {
            return Err(ShellError::not_found("opinion not found")
                .with_details(json!({ "opinionId": opinion_id })));
        }

        let opinions = state
            .opinions()
            .iter()
            .map(|opinion| {
                if opinion.id == opinion_id {
                    opinion.react(reaction)
                } else {
                    opinion.clone()
                }
            })
            .collect();
        Ok(state.with_opinions(opinions))
    }
}
