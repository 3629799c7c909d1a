//! Chat message model and id allocation.

use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    User,
    Bot,
}

/// Stable identifier of a chat message.
///
/// Ordered by creation time, then by a session-wide sequence number, so two
/// messages created in the same instant still get distinct, ordered ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct MessageId {
    /// Session time of creation, in milliseconds.
    pub at_ms: u64,
    /// Monotonic tie-breaker.
    pub seq: u64,
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.at_ms, self.seq)
    }
}

/// Hands out [`MessageId`]s. The sequence number never repeats.
#[derive(Debug, Default)]
pub struct IdGenerator {
    next_seq: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a fresh id stamped with session time `now`.
    pub fn issue(&mut self, now: Duration) -> MessageId {
        let seq = self.next_seq;
        self.next_seq += 1;
        MessageId {
            at_ms: u64::try_from(now.as_millis()).unwrap_or(u64::MAX),
            seq,
        }
    }
}

/// A committed message. Never modified once appended to a transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub id: MessageId,
    pub text: String,
    pub origin: Origin,
}

impl ChatMessage {
    pub fn is_bot(&self) -> bool {
        self.origin == Origin::Bot
    }
}
