//! Simulated chat partner.
//!
//! There is no language model behind the conversation: a [`Responder`]
//! fabricates the reply locally and the session appends it after a fixed
//! delay. The session never talks to the resource catalog.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;
use tracing::debug;

/// Delay before the bot reply is appended.
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(1000);

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// One entry of the transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub text: String,
    pub sender: Sender,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::User,
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Bot,
        }
    }
}

/// Produces the bot's reply to a user message.
pub trait Responder: Send + Sync {
    fn reply(&self, input: &str) -> String;
}

/// Echoes the input back with a fixed prefix.
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoResponder;

impl Responder for EchoResponder {
    fn reply(&self, input: &str) -> String {
        format!("Bot response to: {input}")
    }
}

/// A chat transcript plus the responder that answers into it.
#[derive(Clone)]
pub struct ChatSession {
    messages: Arc<Mutex<Vec<ChatMessage>>>,
    responder: Arc<dyn Responder>,
    reply_delay: Duration,
}

impl ChatSession {
    /// Session with the echo responder and the default delay.
    pub fn new() -> Self {
        Self::with_responder(EchoResponder, DEFAULT_REPLY_DELAY)
    }

    pub fn with_responder(responder: impl Responder + 'static, reply_delay: Duration) -> Self {
        Self {
            messages: Arc::new(Mutex::new(Vec::new())),
            responder: Arc::new(responder),
            reply_delay,
        }
    }

    pub fn reply_delay(&self) -> Duration {
        self.reply_delay
    }

    /// Append `input` as a user message and schedule the bot reply.
    ///
    /// The reply is computed from `input` as it was at send time and is
    /// appended by a spawned task once the delay elapses. Dropping the
    /// returned handle does not cancel it. Must be called from within a
    /// tokio runtime.
    pub fn send(&self, input: impl Into<String>) -> JoinHandle<()> {
        let input = input.into();
        self.lock().push(ChatMessage::user(input.clone()));

        let messages = Arc::clone(&self.messages);
        let responder = Arc::clone(&self.responder);
        let delay = self.reply_delay;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let reply = responder.reply(&input);
            debug!(reply = %reply, "bot reply ready");
            messages
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(ChatMessage::bot(reply));
        })
    }

    /// Snapshot of the transcript.
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<ChatMessage>> {
        self.messages.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ChatSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatSession")
            .field("messages", &self.lock().len())
            .field("reply_delay", &self.reply_delay)
            .finish()
    }
}
