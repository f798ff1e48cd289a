use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use phonehub_core::FeedbackId;

/// How helpful the user found the recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    NotHelpful,
    SomewhatHelpful,
    #[default]
    VeryHelpful,
    ExtremelyHelpful,
}

impl Rating {
    pub fn label(self) -> &'static str {
        match self {
            Rating::NotHelpful => "Not helpful",
            Rating::SomewhatHelpful => "Somewhat helpful",
            Rating::VeryHelpful => "Very helpful",
            Rating::ExtremelyHelpful => "Extremely helpful",
        }
    }
}

/// A submitted feedback entry. Stored with the session, never read back by
/// the recommendation engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feedback {
    pub id: FeedbackId,
    pub rating: Rating,
    pub comment: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

impl Feedback {
    /// Blank comments are dropped.
    pub fn new(rating: Rating, comment: Option<String>, submitted_at: DateTime<Utc>) -> Self {
        let comment = comment
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        Self {
            id: FeedbackId::new(),
            rating,
            comment,
            submitted_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rating_is_very_helpful() {
        assert_eq!(Rating::default(), Rating::VeryHelpful);
        assert_eq!(Rating::default().label(), "Very helpful");
    }

    #[test]
    fn blank_comment_is_dropped() {
        let fb = Feedback::new(Rating::NotHelpful, Some("   ".into()), Utc::now());
        assert_eq!(fb.comment, None);

        let fb = Feedback::new(Rating::NotHelpful, Some(" more Pixels please ".into()), Utc::now());
        assert_eq!(fb.comment.as_deref(), Some("more Pixels please"));
    }

    #[test]
    fn rating_wire_names() {
        let r: Rating = serde_json::from_str("\"extremely_helpful\"").unwrap();
        assert_eq!(r, Rating::ExtremelyHelpful);
    }
}
