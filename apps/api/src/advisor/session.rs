use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::advisor::replies::greeting;
use crate::advisor::rules::{respond, ReplyContext};
use crate::errors::AppError;
use crate::inflight::InFlight;
use crate::models::chat::{ChatMessage, Sender};
use crate::models::profile::Profile;
use crate::random::RandomSource;

/// Preset prompt offered next to the chat input.
#[derive(Debug, Clone, serde::Serialize)]
pub struct QuickAction {
    pub label: &'static str,
    pub prompt: &'static str,
}

pub const QUICK_ACTIONS: &[QuickAction] = &[
    QuickAction {
        label: "Career suggestions for my skills",
        prompt: "Based on my skills and interests, what career paths would you recommend?",
    },
    QuickAction {
        label: "Skills I should develop",
        prompt: "What skills should I develop to advance in my career?",
    },
    QuickAction {
        label: "Job market trends",
        prompt: "What are the current job market trends in my field of interest?",
    },
];

/// Simulated advisor "thinking" time, drawn uniformly per reply.
#[derive(Debug, Clone, Copy)]
pub struct ReplyDelay {
    pub min_ms: u64,
    pub max_ms: u64,
}

/// The chat transcript: append-only, opened lazily with a greeting.
///
/// At most one reply is pending at a time. While it is, further sends are
/// refused rather than queued. A pending reply always lands in the
/// transcript, even if the caller goes away.
pub struct ChatService {
    transcript: Arc<RwLock<Vec<ChatMessage>>>,
    pending: InFlight,
    delay: ReplyDelay,
}

impl ChatService {
    pub fn new(delay: ReplyDelay) -> Self {
        ChatService {
            transcript: Arc::new(RwLock::new(Vec::new())),
            pending: InFlight::new(),
            delay,
        }
    }

    /// Returns the transcript, opening it with a greeting if it is empty.
    pub async fn transcript(&self, profile: &Profile) -> Vec<ChatMessage> {
        let mut transcript = self.transcript.write().await;
        open_if_empty(&mut transcript, profile);
        transcript.clone()
    }

    pub fn is_replying(&self) -> bool {
        self.pending.is_busy()
    }

    /// Appends the user's message, waits the simulated delay, then appends
    /// and returns the advisor's reply.
    ///
    /// The delay and the reply run on their own task, so dropping the
    /// returned future does not leave the user's message unanswered.
    /// Blank input is ignored and yields `Ok(None)`.
    pub async fn send(
        &self,
        text: &str,
        profile: Profile,
        rng: Arc<dyn RandomSource>,
    ) -> Result<Option<ChatMessage>, AppError> {
        if text.trim().is_empty() {
            debug!("Ignoring blank chat message");
            return Ok(None);
        }

        let guard = self.pending.try_acquire().ok_or_else(|| {
            AppError::Conflict("The advisor is still replying to the previous message".to_string())
        })?;

        {
            let mut transcript = self.transcript.write().await;
            open_if_empty(&mut transcript, &profile);
            transcript.push(ChatMessage::new(Sender::User, text));
        }

        let text = text.to_string();
        let transcript = self.transcript.clone();
        let delay = self.delay;
        let reply = tokio::spawn(async move {
            let _guard = guard;
            let delay_ms = rng.int_inclusive(delay.min_ms, delay.max_ms);
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;

            let content = respond(
                &text,
                &ReplyContext {
                    profile: &profile,
                    rng: rng.as_ref(),
                },
            );
            let reply = ChatMessage::new(Sender::Assistant, content);
            transcript.write().await.push(reply.clone());

            info!("Advisor replied after {delay_ms}ms");
            reply
        })
        .await
        .map_err(|e| AppError::Internal(e.into()))?;

        Ok(Some(reply))
    }

    /// Drops the transcript; the next read starts over with a fresh greeting.
    pub async fn reset(&self) {
        self.transcript.write().await.clear();
    }
}

fn open_if_empty(transcript: &mut Vec<ChatMessage>, profile: &Profile) {
    if transcript.is_empty() {
        transcript.push(ChatMessage::new(Sender::Assistant, greeting(&profile.name)));
    }
}
