//! # MIC Chat Command
//!
//! File: cli/src/commands/chat.rs
//!
//! ## Overview
//!
//! Implements `mic chat`, the "Ask MedBot" panel. Two modes:
//!
//! - **Batch**: `mic chat "Hello" "Can I take aspirin?"` submits every message
//!   immediately, so their replies overlap, then waits for all replies.
//! - **Interactive**: `mic chat` reads questions from stdin. Replies arrive
//!   after the delay even while the user keeps typing. `/quit`, `/exit` or
//!   end of input ends the session; replies still pending are delivered first.
//!
//! Blank lines are ignored. Each message is printed the moment it is appended
//! to the transcript; `--json` suppresses that and prints the whole transcript
//! as JSON at the end instead.
//!
//! ## Examples
//!
//! ```bash
//! mic chat "Is paracetamol safe with ibuprofen?"
//! mic --seed 7 chat "Hello" --json
//! printf 'Hello\n/quit\n' | mic chat
//! ```
//!
use crate::common::pacing::{wait_until, Pacer};
use crate::common::ui;
use crate::core::config::Config;
use crate::core::error::{MicError, Result};
use crate::engine::chat::MessageId;
use crate::session::{ChatSubmission, SessionState, SessionUpdate};
use chrono::Local;
use clap::Parser;
use rand::Rng;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

const QUIT_COMMANDS: [&str; 2] = ["/quit", "/exit"];

/// # Chat Arguments (`ChatArgs`)
#[derive(Parser, Debug)]
pub struct ChatArgs {
    /// Messages to send. Without any, questions are read from stdin.
    #[arg(value_name = "MESSAGE")]
    pub messages: Vec<String>,
    /// Print the final transcript as JSON instead of a live conversation.
    #[arg(long)]
    pub json: bool,
}

/// Prints transcript lines as they are appended, unless output is JSON.
struct LivePrinter<'a> {
    bot_name: &'a str,
    enabled: bool,
}

impl LivePrinter<'_> {
    fn message<R: Rng>(&self, session: &SessionState<R>, id: MessageId) {
        if !self.enabled {
            return;
        }
        if let Some(message) = session.message(id) {
            let at = session.wall_time(id).with_timezone(&Local);
            println!("{}", ui::render_message(message, self.bot_name, &at));
        }
    }

    fn update<R: Rng>(&self, session: &SessionState<R>, update: SessionUpdate) {
        if let SessionUpdate::MessageAppended(id) = update {
            self.message(session, id);
        }
    }
}

/// # Handle Chat Command (`handle_chat`)
pub async fn handle_chat(args: ChatArgs, config: &Config) -> Result<()> {
    info!("Handling chat command");

    let mut session = SessionState::from_config(config);
    let pacer = Pacer::start();
    let printer = LivePrinter {
        bot_name: &config.chat.bot_name,
        enabled: !args.json,
    };

    if !args.json {
        println!("{}", ui::banner());
    }

    if args.messages.is_empty() {
        run_interactive(&mut session, &pacer, &printer, args.json).await?;
    } else {
        for text in &args.messages {
            submit(&mut session, &printer, text);
        }
    }

    pacer
        .settle(&mut session, |session, update| printer.update(session, update))
        .await;

    if args.json {
        println!("{}", ui::to_json(session.transcript())?);
    } else if session.transcript().is_empty() {
        println!("{}", ui::render_empty_chat(&config.chat.bot_name));
    }

    Ok(())
}

fn submit<R: Rng>(session: &mut SessionState<R>, printer: &LivePrinter<'_>, text: &str) {
    match session.submit_chat(text) {
        ChatSubmission::Scheduled(id) => printer.message(session, id),
        ChatSubmission::Blank => debug!("Ignoring blank chat message"),
    }
}

fn is_quit(line: &str) -> bool {
    QUIT_COMMANDS.contains(&line.trim())
}

async fn run_interactive<R: Rng>(
    session: &mut SessionState<R>,
    pacer: &Pacer,
    printer: &LivePrinter<'_>,
    json: bool,
) -> Result<()> {
    if !json {
        println!("{}", ui::CHAT_PROMPT);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let deadline = pacer.deadline(session);
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.map_err(MicError::from)? else {
                    debug!("End of input, leaving chat");
                    break;
                };
                if is_quit(&line) {
                    debug!("Quit command received");
                    break;
                }
                for update in pacer.catch_up(session) {
                    printer.update(session, update);
                }
                submit(session, printer, &line);
            }
            _ = wait_until(deadline) => {
                for update in pacer.catch_up(session) {
                    printer.update(session, update);
                }
            }
        }
    }
    Ok(())
}
