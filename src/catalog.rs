use std::collections::HashMap;
use std::sync::OnceLock;

use crate::document::Document;
use crate::error::CatalogError;
use crate::routes::{Route, ROOT};

// documents shipped inside the binary, (directory, file, json)
const BUNDLED: &[(&str, &str, &str)] = &[
    ("/about", "info.json", include_str!("../data/about/info.json")),
    ("/projects", "portfolio.json", include_str!("../data/projects/portfolio.json")),
    ("/projects", "omniboard.json", include_str!("../data/projects/omniboard.json")),
    ("/projects", "safestep.json", include_str!("../data/projects/safestep.json")),
    ("/projects", "agrisite.json", include_str!("../data/projects/agrisite.json")),
    ("/projects", "cognicodeml.json", include_str!("../data/projects/cognicodeml.json")),
];

static BUNDLED_CATALOG: OnceLock<Catalog> = OnceLock::new();

#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    /// marker only, the real listing lives under its own path
    Directory,
    Document(Document),
}

/// One directory. Keeps insertion order so listings are stable.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    entries: Vec<(String, Entry)>,
}

impl Directory {
    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, e)| e)
    }

    pub fn documents(&self) -> impl Iterator<Item = (&str, &Document)> {
        self.entries.iter().filter_map(|(n, e)| match e {
            Entry::Document(d) => Some((n.as_str(), d)),
            Entry::Directory => None,
        })
    }

    fn insert(&mut self, name: &str, entry: Entry) {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some(slot) => slot.1 = entry,
            None => self.entries.push((name.to_string(), entry)),
        }
    }
}

/// Read-only path -> directory map. Root holds the two category markers,
/// each category holds its documents.
#[derive(Debug, Clone)]
pub struct Catalog {
    directories: HashMap<String, Directory>,
}

impl Catalog {
    /// root plus empty category dirs
    pub fn empty() -> Self {
        let mut directories = HashMap::new();
        let mut root = Directory::default();
        for route in Route::ALL {
            root.insert(&format!("{}/", route.key()), Entry::Directory);
            directories.insert(route.path().to_string(), Directory::default());
        }
        directories.insert(ROOT.to_string(), root);
        Self { directories }
    }

    /// parse a list of (dir, file, json) triples
    pub fn from_sources(sources: &[(&str, &str, &str)]) -> Result<Self, CatalogError> {
        let mut catalog = Self::empty();
        for (dir, file, json) in sources {
            let doc: Document = serde_json::from_str(json).map_err(|source| CatalogError::Malformed {
                path: format!("{}/{}", dir, file),
                source,
            })?;
            log::debug!("{}/{}: {}", dir, file, doc.name());
            catalog.insert_document(dir, file, doc);
        }
        Ok(catalog)
    }

    /// The process-wide catalog built from the bundled documents.
    /// Parsed on first use, shared after that.
    pub fn bundled() -> Result<&'static Catalog, CatalogError> {
        if let Some(catalog) = BUNDLED_CATALOG.get() {
            return Ok(catalog);
        }
        let catalog = Self::from_sources(BUNDLED)?;
        log::info!("catalog loaded: {} bundled documents", BUNDLED.len());
        Ok(BUNDLED_CATALOG.get_or_init(|| catalog))
    }

    pub fn insert_document(&mut self, dir: &str, file: &str, doc: Document) {
        self.directories
            .entry(dir.to_string())
            .or_default()
            .insert(file, Entry::Document(doc));
    }

    pub fn directory(&self, path: &str) -> Option<&Directory> {
        self.directories.get(path)
    }

    /// exact lookup, no path normalisation
    pub fn document(&self, dir: &str, file: &str) -> Option<&Document> {
        match self.directory(dir)?.get(file)? {
            Entry::Document(doc) => Some(doc),
            Entry::Directory => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::ProjectRecord;

    fn names(dir: &Directory) -> Vec<&str> {
        dir.entries.iter().map(|(n, _)| n.as_str()).collect()
    }

    #[test]
    fn test_bundled_has_everything_ls_lists() {
        let catalog = Catalog::bundled().unwrap();
        assert!(catalog.document("/about", "info.json").is_some());
        for file in crate::listing::json_entries_for("/projects") {
            assert!(catalog.document("/projects", file).is_some(), "missing {}", file);
        }
    }

    #[test]
    fn test_bundled_is_shared() {
        let a = Catalog::bundled().unwrap() as *const Catalog;
        let b = Catalog::bundled().unwrap() as *const Catalog;
        assert_eq!(a, b);
    }

    #[test]
    fn test_root_markers_are_not_documents() {
        let catalog = Catalog::bundled().unwrap();
        let root = catalog.directory("/").unwrap();
        assert_eq!(names(root), vec!["about/", "projects/"]);
        assert_eq!(root.get("about/"), Some(&Entry::Directory));
        assert!(catalog.document("/", "about/").is_none());
    }

    #[test]
    fn test_malformed_source_names_the_file() {
        let err = Catalog::from_sources(&[("/projects", "bad.json", "{\"name\": 1}")]).unwrap_err();
        assert!(err.to_string().contains("/projects/bad.json"));
    }

    #[test]
    fn test_insert_keeps_order_and_replaces() {
        let mut catalog = Catalog::empty();
        let doc = |n: &str| {
            Document::Project(ProjectRecord {
                name: n.to_string(),
                url: String::new(),
                description: String::new(),
            })
        };
        catalog.insert_document("/projects", "b.json", doc("b"));
        catalog.insert_document("/projects", "a.json", doc("a"));
        catalog.insert_document("/projects", "b.json", doc("b2"));
        let dir = catalog.directory("/projects").unwrap();
        assert_eq!(names(dir), vec!["b.json", "a.json"]);
        assert_eq!(catalog.document("/projects", "b.json").unwrap().name(), "b2");
    }
}
