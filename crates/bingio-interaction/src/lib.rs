//! Session interaction management.
//!
//! [`InteractionManager`] owns one chat session: the append-only transcript,
//! the mood/context slot state, and any pending deferred recommendation
//! deliveries. Assistant messages flow to the front end through an mpsc
//! channel so a delayed recommendation can print when it completes, not when
//! it was requested.

use std::sync::{Arc, Mutex as StdMutex, Weak};
use std::time::Duration;

use tokio::sync::{Mutex, RwLock, mpsc};
use tokio::task::JoinHandle;

use bingio_core::config::AssistantConfig;
use bingio_core::policy;
use bingio_core::session::{ChatMessage, MessageRole, SessionState};
use bingio_core::{BingioError, Result};

/// Result of handling one line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionResult {
    /// Input was empty or whitespace; nothing was appended.
    Ignored,
    /// Immediate replies were appended. When `deferred` is true a
    /// recommendation is still pending delivery.
    Replied { deferred: bool },
}

/// Manages user interaction and conversation for a single session.
///
/// The manager is the only writer of its transcript. Locks exist solely
/// because a deferred delivery task and the input handler share it; there is
/// no cross-session shared mutable state.
pub struct InteractionManager {
    /// Session ID for this manager instance
    session_id: String,
    config: AssistantConfig,
    /// Append-only message log for this session
    transcript: RwLock<Vec<ChatMessage>>,
    /// Mood/context slots refined over the chat
    state: Mutex<SessionState>,
    /// Channel carrying assistant messages to the front end
    outbound: mpsc::Sender<ChatMessage>,
    /// Deferred delivery tasks still in flight
    pending: StdMutex<Vec<JoinHandle<()>>>,
    /// Self-reference handed to deferred tasks so they never keep a dropped
    /// session alive
    weak_self: Weak<Self>,
}

impl InteractionManager {
    /// Creates a new session with an empty transcript.
    pub fn new(
        session_id: impl Into<String>,
        config: AssistantConfig,
        outbound: mpsc::Sender<ChatMessage>,
    ) -> Arc<Self> {
        Arc::new_cyclic(|weak_self| Self {
            session_id: session_id.into(),
            config,
            transcript: RwLock::new(Vec::new()),
            state: Mutex::new(SessionState::default()),
            outbound,
            pending: StdMutex::new(Vec::new()),
            weak_self: weak_self.clone(),
        })
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Emits the configured greeting as the session's first assistant message.
    pub async fn greet(&self) -> Result<()> {
        self.say(self.config.greeting.clone()).await
    }

    /// Handles one line of user input.
    ///
    /// Empty or whitespace-only input is silently ignored. Otherwise the
    /// user message is appended, the dialogue policy runs, and its immediate
    /// replies are appended and sent in order. A deferred recommendation is
    /// scheduled on the runtime and lands after the configured delay; input
    /// submitted while it is pending is processed normally, and messages
    /// append in completion order.
    pub async fn handle_input(&self, text: &str) -> Result<InteractionResult> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(InteractionResult::Ignored);
        }

        self.append(ChatMessage::now(MessageRole::User, trimmed)).await;

        let outcome = {
            let mut state = self.state.lock().await;
            policy::take_turn(trimmed, &mut state)
        };

        for reply in &outcome.replies {
            self.say(reply.clone()).await?;
        }

        let deferred = outcome.deferred.is_some();
        if let Some(reply) = outcome.deferred {
            self.schedule_deferred(reply);
        }

        Ok(InteractionResult::Replied { deferred })
    }

    /// Discards pending deliveries and starts the session over.
    ///
    /// Clears the transcript and the slot state, then greets again.
    pub async fn reset(&self) -> Result<()> {
        self.abort_pending();
        self.transcript.write().await.clear();
        *self.state.lock().await = SessionState::default();
        tracing::info!(session_id = %self.session_id, "session reset");
        self.greet().await
    }

    /// Tears the session down, discarding any pending deferred replies.
    pub fn close(&self) {
        self.abort_pending();
    }

    /// Returns a snapshot of the transcript.
    pub async fn transcript(&self) -> Vec<ChatMessage> {
        self.transcript.read().await.clone()
    }

    /// Returns the current slot state.
    pub async fn state(&self) -> SessionState {
        *self.state.lock().await
    }

    async fn append(&self, message: ChatMessage) {
        self.transcript.write().await.push(message);
    }

    /// Appends an assistant message and delivers it to the front end.
    async fn say(&self, text: String) -> Result<()> {
        let message = ChatMessage::now(MessageRole::Assistant, text);
        self.append(message.clone()).await;
        self.outbound
            .send(message)
            .await
            .map_err(|_| BingioError::session_closed(self.session_id.clone()))
    }

    /// Schedules a recommendation for delivery after the configured delay.
    ///
    /// The task holds only a weak reference to the session: if the session
    /// is dropped before the delay elapses, the reply is discarded instead
    /// of being written into a transcript that no longer exists.
    fn schedule_deferred(&self, reply: String) {
        let weak = self.weak_self.clone();
        let delay = Duration::from_millis(self.config.reply_delay_ms);

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let Some(manager) = weak.upgrade() else {
                return;
            };
            if let Err(e) = manager.say(reply).await {
                tracing::warn!("dropping deferred reply: {e}");
            }
        });

        if let Ok(mut pending) = self.pending.lock() {
            pending.retain(|h| !h.is_finished());
            pending.push(handle);
        }
    }

    fn abort_pending(&self) {
        if let Ok(mut pending) = self.pending.lock() {
            for handle in pending.drain(..) {
                handle.abort();
            }
        }
    }
}

impl Drop for InteractionManager {
    fn drop(&mut self) {
        self.abort_pending();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bingio_core::label::{Mood, ViewingContext};
    use tokio::time::{advance, timeout};

    fn new_session() -> (Arc<InteractionManager>, mpsc::Receiver<ChatMessage>) {
        let (tx, rx) = mpsc::channel(32);
        let manager = InteractionManager::new("test-session", AssistantConfig::default(), tx);
        (manager, rx)
    }

    async fn next_text(rx: &mut mpsc::Receiver<ChatMessage>) -> String {
        timeout(Duration::from_secs(1), rx.recv())
            .await
            .expect("timed out waiting for assistant message")
            .expect("channel closed")
            .text
    }

    #[tokio::test]
    async fn test_greeting_is_first_transcript_entry() {
        let (manager, mut rx) = new_session();
        manager.greet().await.unwrap();

        let transcript = manager.transcript().await;
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript[0].role, MessageRole::Assistant);
        assert!(next_text(&mut rx).await.contains("Bingio"));
    }

    #[tokio::test]
    async fn test_blank_input_is_silently_ignored() {
        let (manager, _rx) = new_session();
        let result = manager.handle_input("   ").await.unwrap();

        assert_eq!(result, InteractionResult::Ignored);
        assert!(manager.transcript().await.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_nostalgic_family_scenario_delivers_delayed_picks() {
        let (manager, mut rx) = new_session();

        let result = manager.handle_input("I'm feeling nostalgic").await.unwrap();
        assert_eq!(result, InteractionResult::Replied { deferred: false });
        assert!(next_text(&mut rx).await.contains("nostalgic"));

        let result = manager.handle_input("with my family").await.unwrap();
        assert_eq!(result, InteractionResult::Replied { deferred: true });
        assert!(next_text(&mut rx).await.contains("family"));

        // Nothing lands until the delay elapses.
        assert!(rx.try_recv().is_err());
        advance(Duration::from_millis(400)).await;

        let picks = next_text(&mut rx).await;
        assert!(picks.contains("Cinema Paradiso"));
        assert_eq!(manager.state().await.mood, Some(Mood::Nostalgic));
        assert_eq!(manager.state().await.context, Some(ViewingContext::Family));

        // user, ack, user, ack, deferred recommendation
        assert_eq!(manager.transcript().await.len(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_discards_pending_delivery() {
        let (manager, mut rx) = new_session();

        manager
            .handle_input("happy and watching with friends")
            .await
            .unwrap();
        // Drain the two acknowledgments.
        next_text(&mut rx).await;
        next_text(&mut rx).await;

        manager.reset().await.unwrap();
        let greeting = next_text(&mut rx).await;
        assert!(greeting.contains("Bingio"));

        advance(Duration::from_secs(2)).await;

        // The scheduled recommendation must not surface after the reset.
        assert!(rx.try_recv().is_err());
        assert_eq!(manager.state().await, SessionState::default());
        assert_eq!(manager.transcript().await.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_discards_pending_delivery() {
        let (manager, mut rx) = new_session();

        manager.handle_input("feeling hyped with my squad").await.unwrap();
        next_text(&mut rx).await;
        next_text(&mut rx).await;

        manager.close();
        advance(Duration::from_secs(2)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_owner_question_gets_fixed_attribution() {
        let (manager, mut rx) = new_session();
        manager.handle_input("who is your owner").await.unwrap();

        let reply = next_text(&mut rx).await;
        assert_eq!(reply, "I was created by Granth & Nikita for the BINGIO project.");
        assert_eq!(manager.state().await, SessionState::default());
    }

    #[tokio::test(start_paused = true)]
    async fn test_input_while_delivery_pending_appends_in_completion_order() {
        let (manager, mut rx) = new_session();

        manager.handle_input("I'm happy, watching with my family").await.unwrap();
        next_text(&mut rx).await;
        next_text(&mut rx).await;

        // A follow-up arrives before the delayed recommendation fires.
        manager.handle_input("make it happy again").await.unwrap();
        let ack = next_text(&mut rx).await;
        assert!(ack.contains("still registering"));

        advance(Duration::from_millis(400)).await;
        let picks = next_text(&mut rx).await;
        assert!(picks.contains("suggestions for happy"));
    }
}
