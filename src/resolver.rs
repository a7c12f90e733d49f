use crate::error::Miss;
use crate::routes::{is_root, Route, ROOT};

/// Outcome of interpreting a `cd` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    NavigateTo(&'static str),
    /// pop one entry off the host's history
    NavigateUp,
    AlreadyAtRoot,
    NoSuchDirectory { arg: String, miss: Miss },
    /// empty argument, nothing to do and nothing to say
    Stay,
}

/// Resolve `arg` against `location`. Rules are checked in order, first hit wins.
pub fn resolve(location: &str, arg: &str) -> Resolution {
    let at_root = is_root(location);

    if arg == ".." {
        return if at_root { Resolution::AlreadyAtRoot } else { Resolution::NavigateUp };
    }

    if arg == "~/" {
        return Resolution::NavigateTo(ROOT);
    }

    if let Some(rest) = arg.strip_prefix('~') {
        if rest.starts_with('/') {
            // ~/about -> /about
            return match Route::from_path(rest) {
                Some(route) => Resolution::NavigateTo(route.path()),
                None => miss(arg, Miss::Home),
            };
        }
    }

    if arg.is_empty() {
        return Resolution::Stay;
    }

    // categories have no subdirectories
    if !at_root {
        return miss(arg, Miss::Nested);
    }

    match Route::from_key(arg) {
        Some(route) => Resolution::NavigateTo(route.path()),
        None => miss(arg, Miss::Root),
    }
}

/// Where a back-navigation lands. Root stays root.
pub fn parent_of(location: &str) -> String {
    let trimmed = location.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(0) | None => ROOT.to_string(),
        Some(i) => trimmed[..i].to_string(),
    }
}

fn miss(arg: &str, miss: Miss) -> Resolution {
    Resolution::NoSuchDirectory { arg: arg.to_string(), miss }
}
