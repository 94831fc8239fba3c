//! Session slot state.

use serde::{Deserialize, Serialize};

use crate::label::{Mood, ViewingContext};

/// The two slots a chat refines over its turns.
///
/// Each slot holds at most one label at a time; a new detection overwrites
/// the old value rather than merging with it, and the slots are independent
/// (setting one never clears the other).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub mood: Option<Mood>,
    pub context: Option<ViewingContext>,
}

impl SessionState {
    /// True once both slots are filled and a recommendation can be made.
    pub fn is_complete(&self) -> bool {
        self.mood.is_some() && self.context.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slots_are_independent() {
        let mut state = SessionState::default();
        assert!(!state.is_complete());

        state.mood = Some(Mood::Happy);
        assert_eq!(state.context, None);

        state.context = Some(ViewingContext::Friends);
        assert_eq!(state.mood, Some(Mood::Happy));
        assert!(state.is_complete());
    }
}
