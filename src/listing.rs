use crate::routes::ROOT;

const ROOT_ENTRIES: &[&str] = &["about/", "projects/"];
const ABOUT_ENTRIES: &[&str] = &["..", "info.json"];
const PROJECT_ENTRIES: &[&str] = &[
    "..",
    "portfolio.json",
    "omniboard.json",
    "safestep.json",
    "agrisite.json",
    "cognicodeml.json",
];

/// What `ls` shows for a location. Anything under /about counts as about,
/// projects only matches exactly (trailing slash tolerated).
pub fn entries_for(location: &str) -> &'static [&'static str] {
    if location == ROOT {
        ROOT_ENTRIES
    } else if location.starts_with("/about") {
        ABOUT_ENTRIES
    } else if location == "/projects" || location == "/projects/" {
        PROJECT_ENTRIES
    } else {
        &[]
    }
}

/// the `cat` completion pool
pub fn json_entries_for(location: &str) -> Vec<&'static str> {
    entries_for(location)
        .iter()
        .copied()
        .filter(|name| name.ends_with(".json"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root() {
        assert_eq!(entries_for("/"), &["about/", "projects/"]);
    }

    #[test]
    fn test_about_prefix() {
        assert_eq!(entries_for("/about"), &["..", "info.json"]);
        assert_eq!(entries_for("/about/anything"), &["..", "info.json"]);
    }

    #[test]
    fn test_projects_exact() {
        let entries = entries_for("/projects");
        assert_eq!(entries.len(), 6);
        assert_eq!(entries[0], "..");
        assert_eq!(entries_for("/projects/"), entries);
        assert!(entries_for("/projects/x").is_empty());
    }

    #[test]
    fn test_unknown_is_empty() {
        assert!(entries_for("/blog").is_empty());
    }

    #[test]
    fn test_json_pool_drops_dirs_and_parent() {
        assert!(json_entries_for("/").is_empty());
        assert_eq!(json_entries_for("/about"), vec!["info.json"]);
        assert_eq!(json_entries_for("/projects").len(), 5);
    }
}
