//! Community opinion entity with like/dislike reactions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation errors returned by the opinion constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpinionValidationError {
    /// A required text field was blank once trimmed.
    EmptyField {
        /// Name of the offending field.
        field: &'static str,
    },
}

impl std::fmt::Display for OpinionValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField { field } => write!(f, "{field} must not be empty"),
        }
    }
}

impl std::error::Error for OpinionValidationError {}

/// A reaction the current user can attach to an opinion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reaction {
    /// Agreement.
    Like,
    /// Disagreement.
    Dislike,
}

/// Input payload for [`CommunityOpinion::post`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct OpinionDraft {
    /// Display name of the author.
    pub user_name: String,
    /// Free-text opinion body.
    pub content: String,
}

/// A community opinion with aggregate reaction counts.
///
/// `user_reaction` records what the current user chose, so reacting twice
/// with the same reaction retracts it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct CommunityOpinion {
    /// Unique opinion identifier.
    pub id: Uuid,
    /// Display name of the author.
    pub user_name: String,
    /// Free-text opinion body.
    pub content: String,
    /// Posting time, UTC.
    pub date: DateTime<Utc>,
    /// Aggregate like count.
    pub likes: u32,
    /// Aggregate dislike count.
    pub dislikes: u32,
    /// The current user's own reaction, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_reaction: Option<Reaction>,
}

impl CommunityOpinion {
    /// Validates a draft and creates a freshly posted opinion.
    ///
    /// # Errors
    ///
    /// Returns [`OpinionValidationError`] when the author name or content
    /// is blank.
    pub fn post(draft: OpinionDraft, now: DateTime<Utc>) -> Result<Self, OpinionValidationError> {
        if draft.user_name.trim().is_empty() {
            return Err(OpinionValidationError::EmptyField {
                field: "opinion.user_name",
            });
        }
        if draft.content.trim().is_empty() {
            return Err(OpinionValidationError::EmptyField {
                field: "opinion.content",
            });
        }

        Ok(Self {
            id: Uuid::new_v4(),
            user_name: draft.user_name,
            content: draft.content,
            date: now,
            likes: 0,
            dislikes: 0,
            user_reaction: None,
        })
    }

    /// Returns a copy with `reaction` applied.
    ///
    /// Any previous reaction is withdrawn from the counters first. Choosing
    /// the same reaction again toggles it off; choosing the other reaction
    /// moves the count across.
    pub fn react(&self, reaction: Reaction) -> Self {
        let mut updated = self.clone();

        match updated.user_reaction {
            Some(Reaction::Like) => updated.likes = updated.likes.saturating_sub(1),
            Some(Reaction::Dislike) => updated.dislikes = updated.dislikes.saturating_sub(1),
            None => {}
        }

        if updated.user_reaction == Some(reaction) {
            updated.user_reaction = None;
        } else {
            match reaction {
                Reaction::Like => updated.likes += 1,
                Reaction::Dislike => updated.dislikes += 1,
            }
            updated.user_reaction = Some(reaction);
        }

        updated
    }
}

/// Filters opinions by a case-insensitive search term and orders the result
/// newest first.
///
/// The term matches against both the author name and the opinion body. An
/// empty term keeps every opinion.
pub fn search_opinions(opinions: &[CommunityOpinion], term: &str) -> Vec<CommunityOpinion> {
    let needle = term.to_lowercase();
    let mut matching: Vec<CommunityOpinion> = opinions
        .iter()
        .filter(|opinion| {
            opinion.content.to_lowercase().contains(&needle)
                || opinion.user_name.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect();
    matching.sort_by(|a, b| b.date.cmp(&a.date));
    matching
}
