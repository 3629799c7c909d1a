//! Reply selection and transcript updates for the chat panel.

use super::corpus::ResponseCorpus;
use super::message::{ChatMessage, IdGenerator, MessageId, Origin};
use super::transcript::Transcript;
use rand::Rng;
use std::time::Duration;
use tracing::debug;

/// A bot reply chosen at submission time and waiting to be appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    /// The user message this reply answers.
    pub in_reply_to: MessageId,
    pub text: String,
}

/// Picks canned replies and appends messages to a transcript.
///
/// The engine performs no intent or keyword matching: the reply is drawn
/// uniformly from the corpus, whatever the user wrote. Randomness is injected
/// so a seeded generator gives a reproducible conversation.
#[derive(Debug)]
pub struct ChatEngine<R> {
    corpus: ResponseCorpus,
    rng: R,
    ids: IdGenerator,
}

impl<R: Rng> ChatEngine<R> {
    pub fn new(corpus: ResponseCorpus, rng: R) -> Self {
        Self {
            corpus,
            rng,
            ids: IdGenerator::new(),
        }
    }

    pub fn corpus(&self) -> &ResponseCorpus {
        &self.corpus
    }

    /// Draws one reply uniformly from `[0, corpus.len())`.
    pub fn select_reply(&mut self) -> &str {
        let index = self.rng.gen_range(0..self.corpus.len());
        &self.corpus.replies()[index]
    }

    /// Appends the user's message and picks the reply to deliver later.
    ///
    /// Blank text (empty after trimming) is ignored: nothing is appended and
    /// `None` is returned. Otherwise the text is stored as typed.
    pub fn submit_user_message(
        &mut self,
        text: &str,
        transcript: &mut Transcript,
        now: Duration,
    ) -> Option<PendingReply> {
        if text.trim().is_empty() {
            debug!("Ignoring blank chat submission");
            return None;
        }

        let id = self.ids.issue(now);
        transcript.append(ChatMessage {
            id,
            text: text.to_string(),
            origin: Origin::User,
        });
        debug!("Appended user message {}", id);

        let reply = self.select_reply().to_string();
        Some(PendingReply {
            in_reply_to: id,
            text: reply,
        })
    }

    /// Appends a previously selected reply as a bot message.
    pub fn deliver_reply(
        &mut self,
        reply: PendingReply,
        transcript: &mut Transcript,
        now: Duration,
    ) -> MessageId {
        let id = self.ids.issue(now);
        transcript.append(ChatMessage {
            id,
            text: reply.text,
            origin: Origin::Bot,
        });
        debug!("Appended bot message {} (reply to {})", id, reply.in_reply_to);
        id
    }
}
