use log::LevelFilter;
use serde::{Deserialize, Serialize};

/// Contact details behind `contact` and `leetcode`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub email: String,
    /// dialable form, goes into the tel: link
    pub phone: String,
    pub phone_display: String,
    pub leetcode_url: String,
    pub leetcode_label: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            email: "swapnildhamu76@gmail.com".to_string(),
            phone: "+916239320323".to_string(),
            phone_display: "+91 62393 20323".to_string(),
            leetcode_url: "https://leetcode.com/sswapnil_be20/".to_string(),
            leetcode_label: "leetcode.com/sswapnil_be20".to_string(),
        }
    }
}

/// Terminal settings. Every field is optional when coming from JS.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// shown before every echoed line
    pub prompt: String,
    /// start the transcript with `welcome` already run
    pub greet_on_mount: bool,
    pub log_level: LevelFilter,
    pub profile: Profile,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            prompt: "~".to_string(),
            greet_on_mount: true,
            log_level: LevelFilter::Info,
            profile: Profile::default(),
        }
    }
}

impl TerminalConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
