//! Tab completion for `cd` and `cat` arguments.

use crate::listing::json_entries_for;
use crate::routes::{is_root, Route};
use crate::transcript::COLUMN_GAP;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// replace the input buffer
    Fill(String),
    /// show candidates under the prompt, input untouched
    Hint(String),
    Nothing,
}

/// Complete `input` as typed at `location`. Never submits anything.
pub fn complete(input: &str, location: &str) -> Completion {
    let trimmed = input.trim();

    if let Some(arg) = operand(trimmed, "cd") {
        return complete_cd(arg, location);
    }
    if let Some(arg) = operand(trimmed, "cat") {
        return complete_cat(arg, location);
    }
    Completion::Nothing
}

/// `cd`, `cd x` -> Some(""), Some("x"); `cdx` -> None
fn operand<'a>(line: &'a str, cmd: &str) -> Option<&'a str> {
    if line == cmd {
        return Some("");
    }
    line.strip_prefix(cmd)?.strip_prefix(' ').map(str::trim)
}

fn complete_cd(arg: &str, location: &str) -> Completion {
    // ~/ works from anywhere
    if arg == "~" || arg.starts_with("~/") {
        let prefix = arg.get(2..).unwrap_or("");
        let matches: Vec<Route> = Route::ALL.into_iter().filter(|r| r.key().starts_with(prefix)).collect();
        return match matches.as_slice() {
            [] => Completion::Nothing,
            [only] => Completion::Fill(format!("cd ~/{}", only.key())),
            many => Completion::Hint(join(many.iter().map(|r| format!("~/{}/", r.key())))),
        };
    }

    // plain route keys only make sense at root
    if !is_root(location) {
        return Completion::Nothing;
    }
    let matches: Vec<Route> = Route::ALL.into_iter().filter(|r| r.key().starts_with(arg)).collect();
    match matches.as_slice() {
        [] => Completion::Nothing,
        [only] => Completion::Fill(format!("cd {}", only.key())),
        many => Completion::Hint(join(many.iter().map(|r| format!("{}/", r.key())))),
    }
}

fn complete_cat(arg: &str, location: &str) -> Completion {
    let matches: Vec<&str> = json_entries_for(location)
        .into_iter()
        .filter(|f| f.starts_with(arg))
        .collect();
    match matches.as_slice() {
        [] => Completion::Nothing,
        // an empty operand always lists, even a single file
        [only] if !arg.is_empty() => Completion::Fill(format!("cat {}", only)),
        many => Completion::Hint(many.join(COLUMN_GAP)),
    }
}

fn join(items: impl Iterator<Item = String>) -> String {
    items.collect::<Vec<_>>().join(COLUMN_GAP)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(s: &str) -> Completion {
        Completion::Fill(s.to_string())
    }

    fn hint(s: &str) -> Completion {
        Completion::Hint(s.to_string())
    }

    #[test]
    fn test_cd_unique_prefix_fills() {
        assert_eq!(complete("cd pro", "/"), fill("cd projects"));
        assert_eq!(complete("cd a", "/"), fill("cd about"));
    }

    #[test]
    fn test_cd_empty_at_root_hints_both() {
        assert_eq!(complete("cd ", "/"), hint("about/    projects/"));
        assert_eq!(complete("cd", "/"), hint("about/    projects/"));
    }

    #[test]
    fn test_cd_home_hints_both_without_filling() {
        assert_eq!(complete("cd ~/", "/"), hint("~/about/    ~/projects/"));
        assert_eq!(complete("cd ~", "/about"), hint("~/about/    ~/projects/"));
    }

    #[test]
    fn test_cd_home_prefix_fills_anywhere() {
        assert_eq!(complete("cd ~/ab", "/projects"), fill("cd ~/about"));
    }

    #[test]
    fn test_cd_plain_inside_category_does_nothing() {
        assert_eq!(complete("cd pro", "/about"), Completion::Nothing);
        assert_eq!(complete("cd ", "/about"), Completion::Nothing);
    }

    #[test]
    fn test_cd_no_match() {
        assert_eq!(complete("cd blog", "/"), Completion::Nothing);
        assert_eq!(complete("cd ~/blog", "/"), Completion::Nothing);
    }

    #[test]
    fn test_cat_completion() {
        assert_eq!(complete("cat s", "/projects"), fill("cat safestep.json"));
        assert_eq!(complete("cat in", "/about"), fill("cat info.json"));
        assert_eq!(complete("cat c", "/projects"), fill("cat cognicodeml.json"));
        assert_eq!(complete("cat x", "/projects"), Completion::Nothing);
    }

    #[test]
    fn test_cat_empty_lists_json_files() {
        assert_eq!(
            complete("cat ", "/projects"),
            hint("portfolio.json    omniboard.json    safestep.json    agrisite.json    cognicodeml.json")
        );
        assert_eq!(complete("cat", "/about"), hint("info.json"));
        assert_eq!(complete("cat ", "/"), Completion::Nothing);
    }

    #[test]
    fn test_other_commands_ignored() {
        assert_eq!(complete("ls", "/"), Completion::Nothing);
        assert_eq!(complete("cdx", "/"), Completion::Nothing);
        assert_eq!(complete("theme d", "/"), Completion::Nothing);
    }
}
