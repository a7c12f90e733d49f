// wasm terminal for the portfolio site
// fake shell over a tiny read-only tree: /about and /projects
pub mod catalog;
pub mod command;
pub mod commands;
pub mod completion;
pub mod config;
pub mod context;
pub mod document;
pub mod error;
pub mod host;
pub mod host_events;
pub mod listing;
pub mod logger;
pub mod projects;
pub mod recall;
pub mod resolver;
pub mod routes;
pub mod session;
pub mod transcript;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use catalog::Catalog;
use commands::help::HELP_TABLE;
use config::TerminalConfig;
use host_events::BrowserHost;
use session::{Session, Submission};

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

// main terminal struct - one per mounted widget
#[wasm_bindgen]
pub struct Terminal {
    session: Session,
    host: BrowserHost,
}

// response wrapper for js comms
#[derive(Serialize)]
pub struct CommandResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<transcript::Output>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_action: Option<&'static str>,
}

impl From<Submission> for CommandResponse {
    fn from(sub: Submission) -> Self {
        let special_action = if sub.cleared {
            Some("clear_screen")
        } else if sub.navigated {
            Some("navigate")
        } else {
            None
        };
        Self { success: sub.success, output: sub.output, special_action }
    }
}

#[derive(Serialize)]
struct KeyResponse<'a> {
    /// call preventDefault
    handled: bool,
    /// input or hint needs a redraw
    changed: bool,
    input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    hint: Option<&'a str>,
}

#[wasm_bindgen]
impl Terminal {
    /// `config` is optional, any missing field takes its default
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<Terminal, JsValue> {
        let config: TerminalConfig = if config.is_undefined() || config.is_null() {
            TerminalConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config).map_err(js_err)?
        };
        logger::init(config.log_level);

        let session = Session::new(&config).map_err(js_err)?;
        Ok(Terminal { session, host: BrowserHost::new() })
    }

    /// route changes go through these instead of DOM events
    #[wasm_bindgen]
    pub fn set_navigator(&mut self, navigate_to: js_sys::Function, navigate_back: js_sys::Function) {
        self.host.set_navigator(navigate_to, navigate_back);
    }

    #[wasm_bindgen]
    pub fn set_theme_handler(&mut self, set_theme: js_sys::Function) {
        self.host.set_theme_handler(set_theme);
    }

    /// Enter. Runs `line`, or the input buffer when `line` is omitted.
    /// Returns null for a blank line.
    #[wasm_bindgen]
    pub fn submit(&mut self, line: Option<String>) -> Result<JsValue, JsValue> {
        let submission = match line {
            Some(line) => self.session.submit(&line, &mut self.host),
            None => self.session.submit_input(&mut self.host),
        };
        match submission {
            Some(sub) => to_js(&CommandResponse::from(sub)),
            None => Ok(JsValue::NULL),
        }
    }

    /// Tab / ArrowUp / ArrowDown are always handled, even when there is
    /// nothing to complete or recall. Other keys come back unhandled.
    #[wasm_bindgen]
    pub fn key_down(&mut self, key: &str) -> Result<JsValue, JsValue> {
        let outcome = self.session.handle_key(key);
        to_js(&KeyResponse {
            handled: outcome.is_some(),
            changed: outcome.unwrap_or(false),
            input: self.session.input(),
            hint: self.session.hint(),
        })
    }

    #[wasm_bindgen]
    pub fn set_input(&mut self, value: &str) {
        self.session.set_input(value);
    }

    #[wasm_bindgen]
    pub fn input(&self) -> String {
        self.session.input().to_string()
    }

    #[wasm_bindgen]
    pub fn hint(&self) -> Option<String> {
        self.session.hint().map(str::to_string)
    }

    #[wasm_bindgen]
    pub fn location(&self) -> String {
        self.session.location().to_string()
    }

    /// call on every pathname change
    #[wasm_bindgen]
    pub fn set_location(&mut self, path: &str) {
        self.session.set_location(path);
    }

    #[wasm_bindgen]
    pub fn prompt(&self) -> String {
        self.session.prompt().to_string()
    }

    #[wasm_bindgen]
    pub fn transcript(&self) -> Result<JsValue, JsValue> {
        to_js(self.session.transcript())
    }

    #[wasm_bindgen]
    pub fn recall_log(&self) -> Result<JsValue, JsValue> {
        to_js(self.session.recall().entries())
    }

    #[wasm_bindgen]
    pub fn command_list(&self) -> Result<JsValue, JsValue> {
        to_js(&self.session.command_names())
    }
}

#[wasm_bindgen]
pub fn help_table() -> Result<JsValue, JsValue> {
    to_js(HELP_TABLE)
}

/// cards for the /projects grid, from the bundled documents
#[wasm_bindgen]
pub fn bundled_projects() -> Result<JsValue, JsValue> {
    let catalog = Catalog::bundled().map_err(js_err)?;
    to_js(&projects::bundled_projects(catalog))
}

/// same cards from the site's api
#[wasm_bindgen]
pub async fn fetch_projects(url: String) -> Result<JsValue, JsValue> {
    let projects = projects::fetch_projects(&url).await.map_err(js_err)?;
    to_js(&projects)
}
