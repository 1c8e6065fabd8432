use std::sync::Arc;

use kanal::AsyncSender;
use tokio::io::AsyncBufReadExt;
use tokio_util::sync::CancellationToken;

use kosha_types::{AppEvent, Mode, Screen};

use crate::state::AppState;

/// Snapshot of the state an input line is interpreted against.
#[derive(Debug, Clone)]
pub struct InputContext {
    pub mode: Mode,
    pub search_lang: String,
    pub source_lang: String,
    pub target_lang: String,
}

impl InputContext {
    pub async fn from_state(state: &AppState) -> Self {
        Self {
            mode: *state.mode.read().await,
            search_lang: state.search_lang.read().await.clone(),
            source_lang: state.source_lang.read().await.clone(),
            target_lang: state.target_lang.read().await.clone(),
        }
    }
}

/// Parsed input line. Language selections mutate local state directly and
/// never reach the event loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Event(AppEvent),
    SetSearchLanguage(String),
    SetSourceLanguage(String),
    SetTargetLanguage(String),
}

/// Reads stdin lines and turns them into events until EOF or cancellation.
pub async fn input_loop(
    state: Arc<AppState>,
    event_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("input loop stopping");
                return Ok(());
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    // stdin closed
                    let _ = event_tx.send(AppEvent::Close).await;
                    return Ok(());
                };

                let ctx = InputContext::from_state(&state).await;
                match parse_line(&line, &ctx) {
                    Some(Command::Event(event)) => event_tx.send(event).await?,
                    Some(Command::SetSearchLanguage(lang)) => {
                        *state.search_lang.write().await = lang;
                    }
                    Some(Command::SetSourceLanguage(lang)) => {
                        *state.source_lang.write().await = lang;
                    }
                    Some(Command::SetTargetLanguage(lang)) => {
                        *state.target_lang.write().await = lang;
                    }
                    None => {}
                }
            }
        }
    }
}

/// Line grammar: `/command args`, `?prefix` for type-ahead, anything else
/// is a bare word searched or translated according to the current mode.
pub fn parse_line(line: &str, ctx: &InputContext) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    if let Some(prefix) = line.strip_prefix('?') {
        return Some(Command::Event(AppEvent::Suggest {
            prefix: prefix.trim().to_string(),
            language: ctx.search_lang.clone(),
        }));
    }

    if let Some(rest) = line.strip_prefix('/') {
        let mut parts = rest.split_whitespace();
        let command = parts.next()?;
        let args: Vec<&str> = parts.collect();

        return match (command, args.as_slice()) {
            ("login", [email, password]) => Some(Command::Event(AppEvent::Login {
                email: (*email).to_string(),
                password: (*password).to_string(),
            })),
            ("signup", [name, email, password]) => Some(Command::Event(AppEvent::Signup {
                name: (*name).to_string(),
                email: (*email).to_string(),
                password: (*password).to_string(),
            })),
            ("logout", []) => Some(Command::Event(AppEvent::Logout)),
            ("mode", ["dictionary"]) => {
                Some(Command::Event(AppEvent::SwitchMode(Mode::Dictionary)))
            }
            ("mode", ["translate"]) => {
                Some(Command::Event(AppEvent::SwitchMode(Mode::Translate)))
            }
            ("screen", ["login"]) => Some(Command::Event(AppEvent::SwitchScreen(Screen::Login))),
            ("screen", ["signup"]) => Some(Command::Event(AppEvent::SwitchScreen(Screen::Signup))),
            ("swap", []) => Some(Command::Event(AppEvent::SwapLanguages)),
            ("theme", []) => Some(Command::Event(AppEvent::ToggleTheme)),
            ("config", [url, key]) => Some(Command::Event(AppEvent::SaveConfig {
                url: (*url).to_string(),
                key: (*key).to_string(),
            })),
            ("lang", [lang]) => Some(Command::SetSearchLanguage((*lang).to_string())),
            ("source", [lang]) => Some(Command::SetSourceLanguage((*lang).to_string())),
            ("target", [lang]) => Some(Command::SetTargetLanguage((*lang).to_string())),
            ("quit", []) => Some(Command::Event(AppEvent::Close)),
            _ => {
                tracing::debug!("unrecognized command: {line}");
                None
            }
        };
    }

    // Bare word: search or translate depending on the active mode.
    match ctx.mode {
        Mode::Dictionary => Some(Command::Event(AppEvent::Search {
            word: line.to_string(),
            language: ctx.search_lang.clone(),
        })),
        Mode::Translate => Some(Command::Event(AppEvent::Translate {
            word: line.to_string(),
            from: ctx.source_lang.clone(),
            to: ctx.target_lang.clone(),
        })),
    }
}
