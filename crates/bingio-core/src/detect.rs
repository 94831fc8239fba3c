//! Keyword-based mood and context detection.
//!
//! Detection is intentionally simple and deterministic: lowercase the input,
//! walk a fixed table of (label, keywords) pairs in declared order, and
//! return the first label whose keyword occurs as a substring. The tables
//! are ordered slices rather than maps so the tie-break is reproducible.

use crate::label::{Mood, ViewingContext};

/// Trigger substrings per mood, checked in this order.
pub static MOOD_KEYWORDS: &[(Mood, &[&str])] = &[
    (Mood::Happy, &["happy", "upbeat", "good", "great", "joy", "excited"]),
    (Mood::Nostalgic, &["nostalgic", "nostalgia", "memories", "remember"]),
    (Mood::Relaxed, &["relax", "relaxed", "chill", "calm", "laid back", "lazy"]),
    (Mood::Sad, &["sad", "down", "depressed", "blue", "tear"]),
    (Mood::Stressed, &["stress", "stressed", "anxious", "overwhelmed"]),
    (Mood::Energetic, &["energetic", "hyped", "hyper"]),
];

/// Trigger substrings per viewing context, checked in this order.
pub static CONTEXT_KEYWORDS: &[(ViewingContext, &[&str])] = &[
    (ViewingContext::Alone, &["alone", "solo", "by myself"]),
    (ViewingContext::Friends, &["friends", "group", "with friends", "mates", "squad"]),
    (ViewingContext::Family, &["family", "parents", "siblings"]),
    (ViewingContext::Partner, &["partner", "girlfriend", "boyfriend", "date"]),
    (ViewingContext::StudyBreak, &["study", "exam", "break", "study break"]),
];

/// Detects the mood expressed in free text, if any.
///
/// Matching is case-insensitive and substring-based. The first mood in
/// [`MOOD_KEYWORDS`] with any matching keyword wins.
pub fn detect_mood(text: &str) -> Option<Mood> {
    let normalized = text.to_lowercase();
    MOOD_KEYWORDS
        .iter()
        .find(|(_, keys)| keys.iter().any(|k| normalized.contains(k)))
        .map(|(mood, _)| *mood)
}

/// Detects the viewing context expressed in free text, if any.
pub fn detect_context(text: &str) -> Option<ViewingContext> {
    let normalized = text.to_lowercase();
    CONTEXT_KEYWORDS
        .iter()
        .find(|(_, keys)| keys.iter().any(|k| normalized.contains(k)))
        .map(|(context, _)| *context)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_mood_without_context() {
        assert_eq!(detect_mood("I'm feeling nostalgic tonight"), Some(Mood::Nostalgic));
        assert_eq!(detect_context("I'm feeling nostalgic tonight"), None);
    }

    #[test]
    fn test_detection_is_case_insensitive() {
        assert_eq!(detect_mood("HAPPY"), Some(Mood::Happy));
        assert_eq!(detect_mood("happy"), Some(Mood::Happy));
        assert_eq!(detect_context("With My FAMILY"), Some(ViewingContext::Family));
    }

    #[test]
    fn test_first_matching_mood_wins_in_table_order() {
        // Contains both a happy and a sad keyword; happy is declared first.
        assert_eq!(detect_mood("happy but also sad"), Some(Mood::Happy));
        assert_eq!(detect_mood("sad yet happy"), Some(Mood::Happy));
    }

    #[test]
    fn test_multi_word_keywords_match() {
        assert_eq!(detect_context("watching by myself"), Some(ViewingContext::Alone));
        assert_eq!(detect_mood("feeling laid back today"), Some(Mood::Relaxed));
    }

    #[test]
    fn test_unrecognized_text_matches_nothing() {
        assert_eq!(detect_mood("surprise me"), None);
        assert_eq!(detect_context("surprise me"), None);
    }

    #[test]
    fn test_every_label_has_keywords() {
        for (_, keys) in MOOD_KEYWORDS {
            assert!(!keys.is_empty());
        }
        for (_, keys) in CONTEXT_KEYWORDS {
            assert!(!keys.is_empty());
        }
    }
}
