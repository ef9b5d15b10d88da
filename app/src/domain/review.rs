//! Facility review entity and its submission lifecycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use super::auth::Actor;

/// Validation errors returned by review constructors.
#[derive(Debug, Clone, PartialEq)]
pub enum ReviewValidationError {
    /// A required text field was blank once trimmed.
    EmptyField {
        /// Name of the offending field.
        field: &'static str,
    },
    /// Rating fell outside `[1, 5]`.
    InvalidRating {
        /// The rejected value.
        rating: f32,
    },
    /// The audio clip reference was not a parseable URL.
    InvalidAudioUrl {
        /// The rejected input.
        value: String,
    },
}

impl std::fmt::Display for ReviewValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField { field } => write!(f, "{field} must not be empty"),
            Self::InvalidRating { rating } => {
                write!(f, "rating must be between 1.0 and 5.0 (got {rating})")
            }
            Self::InvalidAudioUrl { value } => {
                write!(f, "audio clip reference is not a valid URL: {value}")
            }
        }
    }
}

impl std::error::Error for ReviewValidationError {}

/// Moderation state of a review.
///
/// Reviews are created `Approved` when submitted by an administrator and
/// `Pending` otherwise; no further transitions happen in this layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    /// Awaiting moderation; hidden from public listings.
    Pending,
    /// Visible in public listings.
    Approved,
    /// Rejected by moderation; hidden from public listings.
    Rejected,
}

/// Input payload for [`Review::submit`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct ReviewDraft {
    /// Display name of the reviewer.
    pub user_name: String,
    /// Rating in `[1, 5]`.
    pub rating: f32,
    /// Free-text comment.
    pub comment: String,
    /// Optional reference to a recorded audio clip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
}

/// A review attached to a facility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Review {
    /// Unique review identifier.
    pub id: Uuid,
    /// Display name of the reviewer.
    pub user_name: String,
    /// Rating in `[1, 5]`.
    pub rating: f32,
    /// Submission time, UTC.
    pub date: DateTime<Utc>,
    /// Free-text comment.
    pub comment: String,
    /// Optional reference to a recorded audio clip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    /// Moderation state.
    pub status: ReviewStatus,
}

impl Review {
    /// Validates a draft and creates the review a submission produces.
    ///
    /// The identifier is freshly generated, the timestamp comes from the
    /// caller's clock, and the moderation status derives from the actor:
    /// administrators publish immediately, everyone else lands in the
    /// moderation queue.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewValidationError`] if a text field is blank, the
    /// rating is out of range, or the audio reference is not a URL.
    pub fn submit(
        draft: ReviewDraft,
        actor: Actor,
        now: DateTime<Utc>,
    ) -> Result<Self, ReviewValidationError> {
        let user_name = validate_non_empty(draft.user_name, "review.user_name")?;
        let comment = validate_non_empty(draft.comment, "review.comment")?;

        if !(1.0..=5.0).contains(&draft.rating) {
            return Err(ReviewValidationError::InvalidRating {
                rating: draft.rating,
            });
        }

        if let Some(raw) = &draft.audio_url
            && Url::parse(raw).is_err()
        {
            return Err(ReviewValidationError::InvalidAudioUrl { value: raw.clone() });
        }

        let status = if actor.is_admin() {
            ReviewStatus::Approved
        } else {
            ReviewStatus::Pending
        };

        Ok(Self {
            id: Uuid::new_v4(),
            user_name,
            rating: draft.rating,
            date: now,
            comment,
            audio_url: draft.audio_url,
            status,
        })
    }

    /// Whether the review is visible in public listings.
    pub fn is_approved(&self) -> bool {
        self.status == ReviewStatus::Approved
    }
}

fn validate_non_empty(
    value: String,
    field: &'static str,
) -> Result<String, ReviewValidationError> {
    if value.trim().is_empty() {
        return Err(ReviewValidationError::EmptyField { field });
    }
    Ok(value)
}
