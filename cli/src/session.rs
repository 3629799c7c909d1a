//! # MIC Session State
//!
//! File: cli/src/session.rs
//!
//! ## Overview
//!
//! `SessionState` is everything one interactive session knows: the current
//! lookup result and its "searching" flag, the chat transcript, and the
//! deferred tasks that will deliver pending results. The presentation layer
//! owns exactly one of these and drops it when the session ends, which also
//! discards any task that has not fired yet.
//!
//! ## Architecture
//!
//! - Submissions (`submit_lookup`, `submit_chat`) run the engines and
//!   schedule the delayed part of the work on a virtual-time [`Scheduler`].
//! - Time only moves when the owner calls `advance_by` / `advance_to`. Each
//!   call returns the [`SessionUpdate`]s produced by the tasks that fired, in
//!   firing order, so a renderer can print them as they happen.
//!
//! ## Examples
//!
//! ```rust
//! use mic::session::{SessionState, SessionUpdate};
//! use rand::{rngs::StdRng, SeedableRng};
//! use std::time::Duration;
//!
//! let mut session = SessionState::new(Duration::from_secs(1), StdRng::seed_from_u64(7));
//! session.submit_lookup("  PARACETAMOL ");
//! assert!(session.is_searching());
//!
//! let updates = session.advance_by(Duration::from_secs(1));
//! assert!(matches!(&updates[0], SessionUpdate::LookupCompleted(r) if r.name == "Paracetamol"));
//! assert!(!session.is_searching());
//! ```
//!
use crate::core::config::Config;
use crate::core::schedule::{Fired, Scheduler};
use crate::engine::chat::{ChatEngine, ChatMessage, MessageId, PendingReply, ResponseCorpus, Transcript};
use crate::engine::medicine::{lookup, MedicineCatalog, MedicineRecord};
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use tracing::{debug, info};

/// Work waiting for the simulated delay to elapse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionTask {
    /// Resolve this name against the catalog.
    Lookup { raw_name: String },
    /// Append this bot reply to the transcript.
    Reply(PendingReply),
}

/// Outcome of [`SessionState::submit_lookup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupSubmission {
    /// The result will be available after the configured delay.
    Scheduled,
    /// Blank input; nothing happened.
    Blank,
    /// A lookup is already in flight; nothing happened.
    Busy,
}

/// Outcome of [`SessionState::submit_chat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatSubmission {
    /// The user message was appended; its reply is pending.
    Scheduled(MessageId),
    /// Blank input; nothing happened.
    Blank,
}

/// Something a fired task changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionUpdate {
    /// A lookup finished and its record is now the current one.
    LookupCompleted(MedicineRecord),
    /// A bot message was appended to the transcript.
    MessageAppended(MessageId),
}

/// Per-session state owned by the presentation layer.
#[derive(Debug)]
pub struct SessionState<R = StdRng> {
    catalog: MedicineCatalog,
    chat: ChatEngine<R>,
    transcript: Transcript,
    current_record: Option<MedicineRecord>,
    searching: bool,
    scheduler: Scheduler<SessionTask>,
    delay: Duration,
    started_at: DateTime<Utc>,
}

impl SessionState<StdRng> {
    /// Builds a session from configuration: delay from `[timing]`, a seeded
    /// generator when `[chat] seed` is set, OS entropy otherwise.
    pub fn from_config(config: &Config) -> Self {
        let rng = match config.chat.seed {
            Some(seed) => {
                debug!("Seeding reply selection with {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };
        Self::new(config.timing.response_delay(), rng)
    }
}

impl<R: Rng> SessionState<R> {
    /// Creates a session with the seeded catalog and default reply corpus.
    pub fn new(delay: Duration, rng: R) -> Self {
        Self::with_parts(MedicineCatalog::seeded(), ResponseCorpus::default(), delay, rng)
    }

    pub fn with_parts(
        catalog: MedicineCatalog,
        corpus: ResponseCorpus,
        delay: Duration,
        rng: R,
    ) -> Self {
        Self {
            catalog,
            chat: ChatEngine::new(corpus, rng),
            transcript: Transcript::new(),
            current_record: None,
            searching: false,
            scheduler: Scheduler::new(),
            delay,
            started_at: Utc::now(),
        }
    }

    /// Requests a lookup of `raw_name`. The record arrives as a
    /// [`SessionUpdate::LookupCompleted`] once the delay has elapsed.
    pub fn submit_lookup(&mut self, raw_name: &str) -> LookupSubmission {
        if raw_name.trim().is_empty() {
            debug!("Ignoring blank lookup submission");
            return LookupSubmission::Blank;
        }
        if self.searching {
            debug!("Lookup already in progress, ignoring '{}'", raw_name);
            return LookupSubmission::Busy;
        }
        info!("Looking up '{}'", raw_name);
        self.searching = true;
        self.scheduler.schedule_after(
            self.delay,
            SessionTask::Lookup {
                raw_name: raw_name.to_string(),
            },
        );
        LookupSubmission::Scheduled
    }

    /// Appends a user message now and schedules its bot reply.
    pub fn submit_chat(&mut self, text: &str) -> ChatSubmission {
        let now = self.scheduler.now();
        match self.chat.submit_user_message(text, &mut self.transcript, now) {
            Some(reply) => {
                let id = reply.in_reply_to;
                info!("Chat message {} submitted, reply due in {:?}", id, self.delay);
                self.scheduler.schedule_after(self.delay, SessionTask::Reply(reply));
                ChatSubmission::Scheduled(id)
            }
            None => ChatSubmission::Blank,
        }
    }

    /// Advances virtual time by `delta`, firing every task that falls due.
    pub fn advance_by(&mut self, delta: Duration) -> Vec<SessionUpdate> {
        let fired = self.scheduler.advance_by(delta);
        self.apply(fired)
    }

    /// Advances virtual time to `target`, firing every task that falls due.
    pub fn advance_to(&mut self, target: Duration) -> Vec<SessionUpdate> {
        let fired = self.scheduler.advance_to(target);
        self.apply(fired)
    }

    fn apply(&mut self, fired: Vec<Fired<SessionTask>>) -> Vec<SessionUpdate> {
        let mut updates = Vec::with_capacity(fired.len());
        for task in fired {
            match task.payload {
                SessionTask::Lookup { raw_name } => {
                    let record = lookup(&self.catalog, &raw_name);
                    self.current_record = Some(record.clone());
                    self.searching = false;
                    updates.push(SessionUpdate::LookupCompleted(record));
                }
                SessionTask::Reply(reply) => {
                    let id = self.chat.deliver_reply(reply, &mut self.transcript, task.due);
                    updates.push(SessionUpdate::MessageAppended(id));
                }
            }
        }
        updates
    }

    /// Virtual time at which the next pending task fires.
    pub fn next_due_at(&self) -> Option<Duration> {
        self.scheduler.next_due_at()
    }

    /// True when no lookup or reply is pending.
    pub fn is_idle(&self) -> bool {
        self.scheduler.is_idle()
    }

    /// True between a scheduled lookup and its completion.
    pub fn is_searching(&self) -> bool {
        self.searching
    }

    /// The most recent completed lookup, if any.
    pub fn current_record(&self) -> Option<&MedicineRecord> {
        self.current_record.as_ref()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn message(&self, id: MessageId) -> Option<&ChatMessage> {
        self.transcript.get(id)
    }

    /// Current virtual time since the session started.
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Wall-clock time a message was created, for display.
    pub fn wall_time(&self, id: MessageId) -> DateTime<Utc> {
        chrono::Duration::from_std(Duration::from_millis(id.at_ms))
            .ok()
            .and_then(|offset| self.started_at.checked_add_signed(offset))
            .unwrap_or(self.started_at)
    }
}
