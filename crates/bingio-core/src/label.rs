//! Mood and viewing-context labels.
//!
//! These are the two slots the assistant fills in over the course of a chat.
//! Variant order matters: the detector walks its keyword tables in the order
//! the labels are declared here, and the first match wins.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// The mood a user has expressed for the current session.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Mood {
    Happy,
    Nostalgic,
    Relaxed,
    Sad,
    Stressed,
    Energetic,
}

/// Who the user is watching with.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ViewingContext {
    Alone,
    Friends,
    Family,
    Partner,
    StudyBreak,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_mood_displays_snake_case() {
        assert_eq!(Mood::Happy.to_string(), "happy");
        assert_eq!(Mood::Nostalgic.to_string(), "nostalgic");
    }

    #[test]
    fn test_context_displays_snake_case() {
        assert_eq!(ViewingContext::StudyBreak.to_string(), "study_break");
        assert_eq!(ViewingContext::Alone.to_string(), "alone");
    }

    #[test]
    fn test_labels_parse_from_snake_case() {
        assert_eq!(Mood::from_str("stressed").unwrap(), Mood::Stressed);
        assert_eq!(
            ViewingContext::from_str("study_break").unwrap(),
            ViewingContext::StudyBreak
        );
    }
}
