//! # Real-Time Pacing (`common::pacing`)
//!
//! File: cli/src/common/pacing.rs
//!
//! ## Overview
//!
//! The session runs on virtual time. In the terminal the user should actually
//! wait for the simulated delay, so `Pacer` ties the session's virtual clock
//! to tokio's monotonic clock: virtual zero is the instant the pacer started,
//! and the session is advanced to whatever real time has elapsed.
//!
//! Because it uses `tokio::time`, tests can pause the runtime clock and the
//! same code runs without any real waiting.
//!
use crate::session::{SessionState, SessionUpdate};
use rand::Rng;
use std::time::Duration;
use tokio::time::{sleep_until, Instant};
use tracing::trace;

/// Maps real elapsed time onto a session's virtual clock.
#[derive(Debug, Clone, Copy)]
pub struct Pacer {
    origin: Instant,
}

impl Pacer {
    /// Starts the clock. Create it together with the session it paces.
    pub fn start() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.origin.elapsed()
    }

    /// Advances the session to the current real time and returns whatever
    /// fired on the way. Call before submitting so new delays start from now.
    pub fn catch_up<R: Rng>(&self, session: &mut SessionState<R>) -> Vec<SessionUpdate> {
        session.advance_to(self.elapsed())
    }

    /// Real instant at which the session's next task is due.
    pub fn deadline<R: Rng>(&self, session: &SessionState<R>) -> Option<Instant> {
        session.next_due_at().map(|at| self.origin + at)
    }

    /// Waits out every pending task, handing each update to `on_update` as
    /// soon as it fires.
    pub async fn settle<R, F>(&self, session: &mut SessionState<R>, mut on_update: F)
    where
        R: Rng,
        F: FnMut(&SessionState<R>, SessionUpdate),
    {
        while let Some(due) = session.next_due_at() {
            trace!("Waiting for task due at {:?}", due);
            sleep_until(self.origin + due).await;
            let updates = session.advance_to(due);
            for update in updates {
                on_update(session, update);
            }
        }
    }
}

/// Sleeps until `deadline`, or forever when there is none. Used as the timer
/// arm of a `tokio::select!`.
pub async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending::<()>().await,
    }
}
