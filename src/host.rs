//! Services the terminal talks to but doesn't own: page navigation and the
//! colour theme. Calls are fire-and-forget; nothing here reports failure.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::routes::ROOT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

impl FromStr for Theme {
    type Err = ();

    /// exact match only, `Dark` is not a theme
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub trait Host {
    fn navigate_to(&mut self, path: &str);
    fn navigate_back(&mut self);
    fn set_theme(&mut self, theme: Theme);
}

/// What a host was asked to do, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    NavigateTo(String),
    NavigateBack,
    SetTheme(Theme),
}

/// Host with its own history stack. Used by the native REPL and in tests.
#[derive(Debug, Clone)]
pub struct MemoryHost {
    history: Vec<String>,
    pub theme: Option<Theme>,
    pub calls: Vec<HostCall>,
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryHost {
    pub fn new() -> Self {
        Self { history: vec![ROOT.to_string()], theme: None, calls: Vec::new() }
    }

    pub fn current(&self) -> &str {
        self.history.last().map(String::as_str).unwrap_or(ROOT)
    }
}

impl Host for MemoryHost {
    fn navigate_to(&mut self, path: &str) {
        self.history.push(path.to_string());
        self.calls.push(HostCall::NavigateTo(path.to_string()));
    }

    fn navigate_back(&mut self) {
        // the first page never pops, same as a browser with nothing behind it
        if self.history.len() > 1 {
            self.history.pop();
        }
        self.calls.push(HostCall::NavigateBack);
    }

    fn set_theme(&mut self, theme: Theme) {
        self.theme = Some(theme);
        self.calls.push(HostCall::SetTheme(theme));
    }
}
