//! The static recommendation catalog.
//!
//! Three curated picks per mood plus a default list for sessions where the
//! mood never resolved. The catalog is immutable static data; any number of
//! sessions can read it concurrently without synchronization.

use serde::Serialize;
use strum::Display;

use crate::label::{Mood, ViewingContext};

/// Upper bound on the number of picks in a single reply.
pub const MAX_PICKS: usize = 3;

/// Whether an entry is a film or a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum MediaType {
    Movie,
    Series,
}

/// A single curated entry: a title, its media type, and a one-line
/// emotional rationale for why it fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub title: &'static str,
    pub media_type: MediaType,
    pub rationale: &'static str,
}

const fn pick(title: &'static str, media_type: MediaType, rationale: &'static str) -> Recommendation {
    Recommendation {
        title,
        media_type,
        rationale,
    }
}

static HAPPY_PICKS: [Recommendation; 3] = [
    pick("The Intern", MediaType::Movie, "Warm, easygoing, and charming — gentle laughs."),
    pick("Brooklyn Nine-Nine", MediaType::Series, "Light, silly, perfect to relax with friends."),
    pick("Pitch Perfect", MediaType::Movie, "Catchy music, big laughs — great group watch."),
];

static NOSTALGIC_PICKS: [Recommendation; 3] = [
    pick("The Princess Bride", MediaType::Movie, "Classic romantic-adventure that warms the heart."),
    pick("Cinema Paradiso", MediaType::Movie, "Tender, nostalgic ode to movies and memory."),
    pick("The Wonder Years", MediaType::Series, "Coming-of-age warmth and nostalgia."),
];

static RELAXED_PICKS: [Recommendation; 3] = [
    pick("Chef", MediaType::Movie, "Slow, comforting, food + travel vibes."),
    pick("Parks and Recreation", MediaType::Series, "Wholesome comedy with gentle humour."),
    pick("About Time", MediaType::Movie, "Warm, reflective, low-pressure romance."),
];

static SAD_PICKS: [Recommendation; 3] = [
    pick("Manchester by the Sea", MediaType::Movie, "Heavy but emotionally honest; catharsis."),
    pick("The Pursuit of Happyness", MediaType::Movie, "Heartfelt resilience and hope."),
    pick("This Is Us", MediaType::Series, "Emotional family drama with depth."),
];

static STRESSED_PICKS: [Recommendation; 3] = [
    pick("Brooklyn Nine-Nine", MediaType::Series, "Light, fast, and reliably funny."),
    pick("The Grand Budapest Hotel", MediaType::Movie, "Stylish, visually pleasing — distracting delight."),
    pick("How I Met Your Mother", MediaType::Series, "Comfort sitcom with short episodes."),
];

static ENERGETIC_PICKS: [Recommendation; 3] = [
    pick("Baby Driver", MediaType::Movie, "High-energy, music-driven thrill ride."),
    pick("Money Heist", MediaType::Series, "Adrenaline-packed, binge-friendly."),
    pick("Scott Pilgrim vs. The World", MediaType::Movie, "Fast-paced, visually playful, infectious energy."),
];

static DEFAULT_PICKS: [Recommendation; 3] = [
    pick("The Good Place", MediaType::Series, "Quirky, uplifting, and clever."),
    pick("La La Land", MediaType::Movie, "Musical, emotional, and visually lovely."),
    pick("Chef", MediaType::Movie, "Comforting and pleasant for many moods."),
];

/// Returns the curated list for a mood.
pub fn mood_picks(mood: Mood) -> &'static [Recommendation] {
    match mood {
        Mood::Happy => &HAPPY_PICKS,
        Mood::Nostalgic => &NOSTALGIC_PICKS,
        Mood::Relaxed => &RELAXED_PICKS,
        Mood::Sad => &SAD_PICKS,
        Mood::Stressed => &STRESSED_PICKS,
        Mood::Energetic => &ENERGETIC_PICKS,
    }
}

/// Looks up picks for the given mood and context.
///
/// Falls back to the default list when the mood is unset. A `Friends`
/// context stably moves entries whose rationale mentions "comedy" to the
/// front; this is a cosmetic reordering, not a filter, and relative order is
/// otherwise preserved. The result never exceeds [`MAX_PICKS`] entries.
pub fn picks_for(
    mood: Option<Mood>,
    context: Option<ViewingContext>,
) -> Vec<&'static Recommendation> {
    let base = mood.map(mood_picks).unwrap_or(&DEFAULT_PICKS);
    let mut picks: Vec<&'static Recommendation> = base.iter().collect();

    if context == Some(ViewingContext::Friends) {
        let (comedy, rest): (Vec<_>, Vec<_>) = picks
            .into_iter()
            .partition(|p| p.rationale.to_lowercase().contains("comedy"));
        picks = comedy;
        picks.extend(rest);
    }

    picks.truncate(MAX_PICKS);
    picks
}

/// Formats picks as numbered transcript lines.
pub fn render_numbered(picks: &[&Recommendation]) -> Vec<String> {
    picks
        .iter()
        .enumerate()
        .map(|(idx, p)| format!("{}. {} ({}) — {}", idx + 1, p.title, p.media_type, p.rationale))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_mood_has_three_complete_picks() {
        for mood in Mood::iter() {
            let picks = mood_picks(mood);
            assert_eq!(picks.len(), 3, "mood {mood} should have 3 picks");
            for p in picks {
                assert!(!p.title.is_empty());
                assert!(!p.rationale.is_empty());
            }
        }
    }

    #[test]
    fn test_happy_lookup_returns_configured_entries() {
        let picks = picks_for(Some(Mood::Happy), None);
        let titles: Vec<_> = picks.iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["The Intern", "Brooklyn Nine-Nine", "Pitch Perfect"]);
    }

    #[test]
    fn test_unset_mood_falls_back_to_default() {
        let picks = picks_for(None, None);
        assert_eq!(picks[0].title, "The Good Place");
        assert_eq!(picks.len(), 3);
    }

    #[test]
    fn test_friends_context_moves_comedy_to_front() {
        // "Wholesome comedy" is the second relaxed pick; friends brings it first.
        let picks = picks_for(Some(Mood::Relaxed), Some(ViewingContext::Friends));
        assert_eq!(picks[0].title, "Parks and Recreation");
        // Remaining entries keep their relative order.
        assert_eq!(picks[1].title, "Chef");
        assert_eq!(picks[2].title, "About Time");
    }

    #[test]
    fn test_friends_reorder_keeps_length_without_comedy_entries() {
        // No stressed rationale mentions "comedy"; order and length are unchanged.
        let picks = picks_for(Some(Mood::Stressed), Some(ViewingContext::Friends));
        let titles: Vec<_> = picks.iter().map(|p| p.title).collect();
        assert_eq!(
            titles,
            vec!["Brooklyn Nine-Nine", "The Grand Budapest Hotel", "How I Met Your Mother"]
        );
    }

    #[test]
    fn test_non_friends_context_does_not_reorder() {
        let plain = picks_for(Some(Mood::Relaxed), Some(ViewingContext::Family));
        assert_eq!(plain[0].title, "Chef");
    }

    #[test]
    fn test_render_numbered_lines() {
        let picks = picks_for(Some(Mood::Energetic), None);
        let lines = render_numbered(&picks);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("1. Baby Driver (Movie) — "));
        assert!(lines[1].contains("Money Heist (Series)"));
    }
}
