//! # Chat Response Engine
//!
//! File: cli/src/engine/chat/mod.rs
//!
//! ## Overview
//!
//! Maintains the ordered transcript of a chat session and answers each user
//! message with one reply drawn uniformly from a fixed [`ResponseCorpus`].
//!
//! ## Architecture
//!
//! - `message`: [`ChatMessage`], [`Origin`], and collision-free [`MessageId`]s
//! - `transcript`: The append-only [`Transcript`]
//! - `corpus`: The canned replies
//! - `engine`: [`ChatEngine`], which appends the user message right away and
//!   hands back a [`PendingReply`] for the caller to deliver after the delay
//!
mod corpus;
mod engine;
mod message;
mod transcript;

pub use corpus::ResponseCorpus;
pub use engine::{ChatEngine, PendingReply};
pub use message::{ChatMessage, IdGenerator, MessageId, Origin};
pub use transcript::Transcript;
