use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which resolver rule rejected a `cd` argument. Each one has its own wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Miss {
    /// `~/something` that isn't a known route
    Home,
    /// anything but `..`/`~/` from inside a category
    Nested,
    /// unknown route key at root
    Root,
}

/// Everything a command can complain about. The Display text is exactly
/// what lands in the transcript.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    #[error("Already at root directory ~")]
    AlreadyAtRoot,

    #[error("bash: cd: {arg}: {miss}")]
    NoSuchDirectory { arg: String, miss: Miss },

    #[error("cat: {0}: No such file")]
    NoSuchFile(String),

    #[error("{0}: command not found")]
    CommandNotFound(String),
}

impl fmt::Display for Miss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Miss::Home => "No such directory",
            Miss::Nested => "no such file or directory",
            Miss::Root => "No such file or directory",
        })
    }
}

impl ShellError {
    /// root is a warning, the rest are errors
    pub fn is_warning(&self) -> bool {
        matches!(self, ShellError::AlreadyAtRoot)
    }
}

/// Failure parsing the documents baked into the binary.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("bundled document {path} is malformed: {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Failure loading the project grid. One bad file fails the whole listing.
#[derive(Error, Debug)]
pub enum ProjectLoadError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("fetch {url} failed: {message}")]
    Fetch { url: String, message: String },
}
