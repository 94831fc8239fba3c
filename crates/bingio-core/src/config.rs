//! Assistant configuration.

use serde::{Deserialize, Serialize};

/// Default pause before a recommendation that follows acknowledgments, so it
/// visually lands after them.
const DEFAULT_REPLY_DELAY_MS: u64 = 350;

/// Configuration for one assistant session.
///
/// There are no config files or environment variables; this struct exists so
/// sessions are built from explicit values instead of scattered literals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// Display name of the assistant.
    pub assistant_name: String,
    /// The first assistant message of every session.
    pub greeting: String,
    /// Delay before delivering a deferred recommendation, in milliseconds.
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,
}

fn default_reply_delay_ms() -> u64 {
    DEFAULT_REPLY_DELAY_MS
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            assistant_name: "Bingio".to_string(),
            greeting: "Hello! I'm Bingio — tell me how you feel and who you're watching with, \
                       and I'll recommend a film or series for your vibe."
                .to_string(),
            reply_delay_ms: DEFAULT_REPLY_DELAY_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AssistantConfig::default();
        assert_eq!(config.assistant_name, "Bingio");
        assert_eq!(config.reply_delay_ms, 350);
        assert!(config.greeting.contains("Bingio"));
    }
}
