//! The turn-by-turn dialogue policy.
//!
//! Given one user utterance and the current slot state, the policy produces
//! the assistant's replies for the turn and mutates the state in place. The
//! rules run in a fixed precedence:
//!
//! 1. ownership question: fixed attribution reply, state untouched
//! 2. help question: fixed capability reply, state untouched
//! 3. acknowledge any detected mood/context slot (overwriting or re-noting)
//! 4. nothing detected: recommend if both slots are set, otherwise ask for
//!    whatever is missing
//! 5. something detected and both slots now set: a recommendation reply that
//!    is delivered after a short delay, so it follows the acknowledgments
//! 6. otherwise a generic movie-or-series fallback
//!
//! The policy itself is synchronous and pure apart from the state mutation;
//! scheduling the deferred reply is the caller's concern.

use crate::catalog::{self, Recommendation};
use crate::detect::{detect_context, detect_mood};
use crate::session::SessionState;

/// Phrases that trigger the fixed attribution reply.
const OWNER_TRIGGERS: &[&str] = &["who is your owner", "owner"];

/// Phrases that trigger the capability description.
const HELP_TRIGGERS: &[&str] = &["help", "what can you do"];

const OWNER_REPLY: &str = "I was created by Granth & Nikita for the BINGIO project.";

const HELP_REPLY: &str = "I recommend movies and series based on your current mood and who \
                          you're watching with. Tell me how you're feeling and who's watching \
                          with you.";

const ASK_CONTEXT: &str = "Nice. Who are you watching with — friends, family, partner, or alone?";

const ASK_MOOD: &str = "Great. How are you feeling right now — upbeat, nostalgic, relaxed, sad, etc.?";

const ASK_BOTH: &str = "Could you tell me (1) how you're feeling right now (happy, nostalgic, \
                        stressed, relaxed, etc.) and (2) who you're watching with (alone, \
                        friends, family, partner)?";

const FALLBACK: &str = "Thanks — noted. Do you want a movie or a series right now?";

/// What one turn of dialogue produced.
///
/// `replies` are emitted immediately, in order. `deferred`, when present, is
/// a recommendation that should be delivered after the configured delay.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TurnOutcome {
    pub replies: Vec<String>,
    pub deferred: Option<String>,
}

impl TurnOutcome {
    fn single(reply: impl Into<String>) -> Self {
        Self {
            replies: vec![reply.into()],
            deferred: None,
        }
    }
}

/// Runs the dialogue policy for one user utterance.
pub fn take_turn(text: &str, state: &mut SessionState) -> TurnOutcome {
    let normalized = text.to_lowercase();

    if OWNER_TRIGGERS.iter().any(|t| normalized.contains(t)) {
        return TurnOutcome::single(OWNER_REPLY);
    }
    if HELP_TRIGGERS.iter().any(|t| normalized.contains(t)) {
        return TurnOutcome::single(HELP_REPLY);
    }

    let found_mood = detect_mood(text);
    let found_context = detect_context(text);
    tracing::debug!(?found_mood, ?found_context, "detector results");

    let mut replies = Vec::new();

    if let Some(mood) = found_mood {
        if state.mood != Some(mood) {
            state.mood = Some(mood);
            replies.push(format!("Got it — mood set to \"{mood}\"."));
        } else {
            replies.push(format!("Thanks — still registering a \"{mood}\" vibe."));
        }
    }

    if let Some(context) = found_context {
        if state.context != Some(context) {
            state.context = Some(context);
            replies.push(format!("Noted — you're watching {context}."));
        } else {
            replies.push(format!("Understood — still marked as \"{context}\"."));
        }
    }

    if found_mood.is_none() && found_context.is_none() {
        let reply = match (state.mood, state.context) {
            // Free text with both slots already known: recommend right away.
            (Some(mood), Some(context)) => immediate_recommendation(mood, context),
            (Some(_), None) => ASK_CONTEXT.to_string(),
            (None, Some(_)) => ASK_MOOD.to_string(),
            (None, None) => ASK_BOTH.to_string(),
        };
        replies.push(reply);
        return TurnOutcome {
            replies,
            deferred: None,
        };
    }

    if let (Some(mood), Some(context)) = (state.mood, state.context) {
        let picks = catalog::picks_for(Some(mood), Some(context));
        let deferred = recommendation_reply(
            format!("Nice — I have a few suggestions for {mood} (watching with {context}):"),
            "Tell me if you want something lighter, darker, older, or shorter.",
            &picks,
        );
        return TurnOutcome {
            replies,
            deferred: Some(deferred),
        };
    }

    if replies.is_empty() {
        replies.push(FALLBACK.to_string());
    }

    TurnOutcome {
        replies,
        deferred: None,
    }
}

fn immediate_recommendation(mood: crate::label::Mood, context: crate::label::ViewingContext) -> String {
    let picks = catalog::picks_for(Some(mood), Some(context));
    recommendation_reply(
        format!("Perfect — based on feeling \"{mood}\" and watching \"{context}\", here are a few picks:"),
        "Want one that's shorter/longer, or more of a comedy/drama?",
        &picks,
    )
}

fn recommendation_reply(intro: String, outro: &str, picks: &[&Recommendation]) -> String {
    let mut lines = vec![intro, String::new()];
    lines.extend(catalog::render_numbered(picks));
    lines.push(String::new());
    lines.push(outro.to_string());
    lines.join("\n")
}
