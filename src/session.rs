//! One mounted terminal: transcript, recall, input buffer, hint, location.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::command::{self, CommandName, CommandRegistry};
use crate::completion::{complete, Completion};
use crate::config::TerminalConfig;
use crate::context::{Effect, TerminalContext};
use crate::error::CatalogError;
use crate::host::Host;
use crate::recall::RecallLog;
use crate::resolver::parent_of;
use crate::transcript::{Level, Output, Transcript};

/// Keys the session reacts to besides plain typing and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Tab,
    Up,
    Down,
}

impl Key {
    /// DOM `KeyboardEvent.key` names
    pub fn from_dom(key: &str) -> Option<Key> {
        match key {
            "Tab" => Some(Key::Tab),
            "ArrowUp" => Some(Key::Up),
            "ArrowDown" => Some(Key::Down),
            _ => None,
        }
    }
}

/// What one Enter produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<Output>,
    pub cleared: bool,
    pub navigated: bool,
}

pub struct Session {
    ctx: TerminalContext,
    registry: CommandRegistry,
    transcript: Transcript,
    recall: RecallLog,
    input: String,
    hint: Option<String>,
    prompt: String,
}

impl Session {
    pub fn new(config: &TerminalConfig) -> Result<Self, CatalogError> {
        Ok(Self::with_catalog(Catalog::bundled()?, config))
    }

    pub fn with_catalog(catalog: &'static Catalog, config: &TerminalConfig) -> Self {
        let mut session = Self {
            ctx: TerminalContext::new(catalog, config.profile.clone()),
            registry: CommandRegistry::default_commands(),
            transcript: Transcript::new(),
            recall: RecallLog::new(),
            input: String::new(),
            hint: None,
            prompt: config.prompt.clone(),
        };
        if config.greet_on_mount {
            // shown as if typed, but not something you can recall
            let welcome = CommandName::Welcome.as_str();
            session.transcript.echo(welcome);
            if let Ok(Some(out)) = command::run_command(welcome, &mut session.ctx, &session.registry) {
                session.transcript.push_output(out);
            }
        }
        log::info!("session mounted at {}", session.ctx.cwd);
        session
    }

    /// Run a whole line as if typed and entered.
    pub fn submit(&mut self, line: &str, host: &mut dyn Host) -> Option<Submission> {
        let trimmed = line.trim();
        // blank enter leaves everything, buffer included, alone
        if trimmed.is_empty() {
            return None;
        }

        self.recall.record(trimmed);

        let result = command::run_command(trimmed, &mut self.ctx, &self.registry);
        self.transcript.echo(trimmed);

        let success = result.is_ok();
        let output = match result {
            Ok(out) => out,
            Err(e) => {
                let level = if e.is_warning() { Level::Warning } else { Level::Error };
                Some(Output::notice(level, e.to_string()))
            }
        };
        if let Some(out) = &output {
            self.transcript.push_output(out.clone());
        }

        let mut cleared = false;
        let mut navigated = false;
        for effect in self.ctx.take_effects() {
            log::debug!("apply {:?}", effect);
            match effect {
                Effect::NavigateTo(path) => {
                    host.navigate_to(path);
                    self.ctx.cwd = path.to_string();
                    navigated = true;
                }
                Effect::NavigateBack => {
                    host.navigate_back();
                    self.ctx.cwd = parent_of(&self.ctx.cwd);
                    navigated = true;
                }
                Effect::SetTheme(theme) => host.set_theme(theme),
                Effect::ClearScreen => {
                    self.transcript.clear();
                    cleared = true;
                }
            }
        }

        self.input.clear();
        self.hint = None;

        Some(Submission { success, output, cleared, navigated })
    }

    /// Submit whatever is in the input buffer.
    pub fn submit_input(&mut self, host: &mut dyn Host) -> Option<Submission> {
        let line = self.input.clone();
        self.submit(&line, host)
    }

    /// DOM key name in, `None` when the session doesn't own that key.
    /// `Some(changed)` otherwise: the page should swallow the key either way
    /// and redraw when `changed` is true.
    pub fn handle_key(&mut self, dom_key: &str) -> Option<bool> {
        Key::from_dom(dom_key).map(|key| self.key_down(key))
    }

    /// Returns true when the input or the hint changed.
    pub fn key_down(&mut self, key: Key) -> bool {
        match key {
            Key::Tab => {
                let previous = self.hint.take();
                match complete(&self.input, &self.ctx.cwd) {
                    Completion::Fill(line) => {
                        let changed = line != self.input || previous.is_some();
                        self.input = line;
                        changed
                    }
                    Completion::Hint(hint) => {
                        let changed = previous.as_deref() != Some(hint.as_str());
                        self.hint = Some(hint);
                        changed
                    }
                    // a stale hint still went away
                    Completion::Nothing => previous.is_some(),
                }
            }
            Key::Up => self.recalled(|r| r.up()),
            Key::Down => self.recalled(|r| r.down()),
        }
    }

    fn recalled(&mut self, step: impl FnOnce(&mut RecallLog) -> Option<String>) -> bool {
        match step(&mut self.recall) {
            Some(line) => {
                self.input = line;
                self.hint = None;
                true
            }
            None => false,
        }
    }

    /// Typing. Drops the hint, leaves recall where it was.
    pub fn set_input(&mut self, value: &str) {
        self.input = value.to_string();
        self.hint = None;
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    pub fn location(&self) -> &str {
        &self.ctx.cwd
    }

    /// The host moved on its own (browser back button, link click).
    pub fn set_location(&mut self, path: &str) {
        if self.ctx.cwd != path {
            log::debug!("location {} -> {}", self.ctx.cwd, path);
            self.ctx.cwd = path.to_string();
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn recall(&self) -> &RecallLog {
        &self.recall
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.get_command_names()
    }
}
