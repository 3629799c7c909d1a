//! # MIC Terminal Rendering (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! Turns engine results into terminal text. Nothing here makes decisions
//! about medicines or replies; it only lays out what the session produced.
//!
//! - Medicine records render as four labeled fields.
//! - Chat messages render as a two-column list: bot messages hug the left
//!   margin, user messages are right-aligned within a fixed width.
//! - `to_json` backs every `--json` flag.
//!
use crate::core::error::MicError;
use crate::engine::chat::{ChatMessage, Origin};
use crate::engine::medicine::MedicineRecord;
use chrono::{DateTime, TimeZone};
use serde::Serialize;
use std::fmt::Display;

pub const APP_TITLE: &str = "MIC – Medicine Information Checker";
pub const TAGLINE: &str = "Know Your Meds. Avoid Hospital Beds.";
pub const SEARCHING: &str = "Searching...";
pub const BLANK_LOOKUP: &str = "Please enter a medicine name.";
pub const CHAT_PROMPT: &str = "Type your question... (/quit to leave)";
/// Width of the chat column that user messages are right-aligned in.
pub const TRANSCRIPT_WIDTH: usize = 72;

/// Title and tagline, as shown at the top of every interactive command.
pub fn banner() -> String {
    format!("{APP_TITLE}\n{TAGLINE}\n")
}

/// The four labeled fields of a medicine record.
pub fn render_record(record: &MedicineRecord) -> String {
    [
        ("Medicine Name:", record.name.as_str()),
        ("Use / Description:", record.usage.as_str()),
        ("Side Effects:", record.side_effects.as_str()),
        ("Precautions:", record.precautions.as_str()),
    ]
    .iter()
    .map(|(label, value)| format!("{label}\n  {value}\n"))
    .collect::<Vec<_>>()
    .join("\n")
}

/// One line of the chat list, stamped with `at` as `HH:MM:SS`.
pub fn render_message<Tz>(message: &ChatMessage, bot_name: &str, at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let stamp = at.format("%H:%M:%S");
    match message.origin {
        Origin::Bot => format!("[{stamp}] {bot_name}: {}", message.text),
        Origin::User => {
            let line = format!("You: {} [{stamp}]", message.text);
            format!("{line:>width$}", width = TRANSCRIPT_WIDTH)
        }
    }
}

/// Shown when a chat session ends without a single message.
pub fn render_empty_chat(bot_name: &str) -> String {
    format!(
        "Start a conversation with {bot_name}!\nAsk questions about medications, interactions, or general health advice."
    )
}

/// Compact single-line JSON, one value per line of output.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, MicError> {
    Ok(serde_json::to_string(value)?)
}
