//! Host backed by the page: JS callbacks when the shell registered them,
//! otherwise `CustomEvent`s on `window` for whoever is listening.

use wasm_bindgen::prelude::*;
use web_sys::{window, CustomEvent, CustomEventInit};

use crate::host::{Host, Theme};

pub const NAVIGATE_EVENT: &str = "terminal-navigate";
pub const NAVIGATE_BACK_EVENT: &str = "terminal-navigate-back";
pub const THEME_EVENT: &str = "terminal-theme";

const THEME_STORAGE_KEY: &str = "theme";

#[derive(Default)]
pub struct BrowserHost {
    navigate_to: Option<js_sys::Function>,
    navigate_back: Option<js_sys::Function>,
    set_theme: Option<js_sys::Function>,
}

impl BrowserHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_navigator(&mut self, navigate_to: js_sys::Function, navigate_back: js_sys::Function) {
        self.navigate_to = Some(navigate_to);
        self.navigate_back = Some(navigate_back);
    }

    pub fn set_theme_handler(&mut self, set_theme: js_sys::Function) {
        self.set_theme = Some(set_theme);
    }
}

/// Call `callback(arg)` if there is one. False means nobody handled it.
fn call(callback: Option<&js_sys::Function>, arg: &JsValue) -> bool {
    let Some(callback) = callback else {
        return false;
    };
    match callback.call1(&JsValue::NULL, arg) {
        Ok(_) => true,
        Err(e) => {
            log::warn!("host callback threw: {:?}", e);
            false
        }
    }
}

/// Fire `event_type` on window with `detail`.
pub fn emit_host_event(event_type: &str, detail: &JsValue) {
    let Some(win) = window() else {
        log::warn!("no window, dropping {}", event_type);
        return;
    };

    let init = CustomEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    init.set_detail(detail);

    match CustomEvent::new_with_event_init_dict(event_type, &init) {
        Ok(event) => {
            if let Err(e) = win.dispatch_event(&event) {
                log::warn!("dispatch of {} failed: {:?}", event_type, e);
            }
        }
        Err(e) => log::warn!("could not create {}: {:?}", event_type, e),
    }
}

/// Flip the `dark` class on <html> and remember the choice.
fn apply_theme_to_document(theme: Theme) {
    let Some(win) = window() else { return };

    if let Some(root) = win.document().and_then(|d| d.document_element()) {
        let classes = root.class_list();
        let result = match theme {
            Theme::Dark => classes.add_1("dark"),
            Theme::Light => classes.remove_1("dark"),
        };
        if let Err(e) = result {
            log::warn!("could not set theme class: {:?}", e);
        }
    }

    if let Ok(Some(storage)) = win.local_storage() {
        if let Err(e) = storage.set_item(THEME_STORAGE_KEY, theme.as_str()) {
            log::warn!("could not persist theme: {:?}", e);
        }
    }
}

impl Host for BrowserHost {
    fn navigate_to(&mut self, path: &str) {
        let arg = JsValue::from_str(path);
        if !call(self.navigate_to.as_ref(), &arg) {
            emit_host_event(NAVIGATE_EVENT, &arg);
        }
    }

    fn navigate_back(&mut self) {
        if !call(self.navigate_back.as_ref(), &JsValue::UNDEFINED) {
            emit_host_event(NAVIGATE_BACK_EVENT, &JsValue::NULL);
        }
    }

    fn set_theme(&mut self, theme: Theme) {
        let arg = JsValue::from_str(theme.as_str());
        if !call(self.set_theme.as_ref(), &arg) {
            apply_theme_to_document(theme);
            emit_host_event(THEME_EVENT, &arg);
        }
    }
}
