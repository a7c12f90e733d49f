use serde::Serialize;
use std::fmt;

/// separator between candidates in `ls` and in completion hints
pub const COLUMN_GAP: &str = "    ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HelpRow {
    pub command: &'static str,
    pub description: &'static str,
}

/// Something a command rendered. The frontend styles by `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Output {
    Text { text: String },
    Notice { level: Level, text: String },
    Listing { entries: Vec<String> },
    /// pretty printed json of one document
    Document { file: String, body: String },
    Help { rows: Vec<HelpRow> },
    Contact { email: String, phone: String, phone_display: String },
    Leetcode { url: String, label: String },
}

impl Output {
    pub fn text(text: impl Into<String>) -> Self {
        Output::Text { text: text.into() }
    }

    pub fn notice(level: Level, text: impl Into<String>) -> Self {
        Output::Notice { level, text: text.into() }
    }

    pub fn level(&self) -> Level {
        match self {
            Output::Notice { level, .. } => *level,
            _ => Level::Info,
        }
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Text { text } | Output::Notice { text, .. } => f.write_str(text),
            Output::Listing { entries } => f.write_str(&entries.join(COLUMN_GAP)),
            Output::Document { body, .. } => f.write_str(body),
            Output::Help { rows } => {
                let width = rows.iter().map(|r| r.command.len() + 2).max().unwrap_or(0);
                for (i, row) in rows.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    let quoted = format!("'{}'", row.command);
                    write!(f, "{:<width$}  - {}", quoted, row.description, width = width)?;
                }
                Ok(())
            }
            Output::Contact { email, phone_display, .. } => write!(f, "{}\n{}", email, phone_display),
            Output::Leetcode { label, .. } => {
                write!(f, "You can check out my leetcode profile here: {}", label)
            }
        }
    }
}

/// One rendered line group: either what the visitor typed or what came back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Entry {
    Echo(String),
    Output(Output),
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Transcript {
    entries: Vec<Entry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn echo(&mut self, line: &str) {
        self.entries.push(Entry::Echo(line.to_string()));
    }

    pub fn push_output(&mut self, output: Output) {
        self.entries.push(Entry::Output(output));
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// entries pushed since `len` was `mark`
    pub fn since(&self, mark: usize) -> &[Entry] {
        self.entries.get(mark..).unwrap_or(&[])
    }
}
