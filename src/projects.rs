//! Project cards for the /projects page grid.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

use crate::catalog::Catalog;
use crate::error::ProjectLoadError;
use crate::routes::Route;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// file name without `.json`
    pub id: String,
    pub name: String,
    pub url: String,
    pub description: String,
}

// what's actually in each file, all three required
#[derive(Deserialize)]
struct ProjectFile {
    name: String,
    url: String,
    description: String,
}

impl Project {
    fn from_file(id: &str, file: ProjectFile) -> Self {
        Self {
            id: id.to_string(),
            name: file.name,
            url: file.url,
            description: file.description,
        }
    }
}

fn id_of(file_name: &str) -> Option<&str> {
    file_name.strip_suffix(".json")
}

fn io_err(path: &Path) -> impl FnOnce(io::Error) -> ProjectLoadError {
    let path = path.to_path_buf();
    move |source| ProjectLoadError::Io { path, source }
}

/// Read every `*.json` in `dir`, sorted by file name. One unreadable or
/// malformed file fails the whole listing.
pub fn load_projects(dir: &Path) -> Result<Vec<Project>, ProjectLoadError> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err(dir))? {
        let entry = entry.map_err(io_err(dir))?;
        if let Some(name) = entry.file_name().to_str() {
            if id_of(name).is_some() {
                names.push(name.to_string());
            }
        }
    }
    // read_dir order is whatever the OS feels like
    names.sort();

    let mut projects = Vec::with_capacity(names.len());
    for name in &names {
        let path = dir.join(name);
        let text = fs::read_to_string(&path).map_err(io_err(&path))?;
        let file: ProjectFile =
            serde_json::from_str(&text).map_err(|source| ProjectLoadError::Parse { path: path.clone(), source })?;
        // id_of can't miss here, names were filtered on it
        projects.push(Project::from_file(id_of(name).unwrap_or(name), file));
    }
    log::info!("loaded {} projects from {}", projects.len(), dir.display());
    Ok(projects)
}

/// Same cards, taken from the documents bundled into the binary.
pub fn bundled_projects(catalog: &Catalog) -> Vec<Project> {
    let Some(dir) = catalog.directory(Route::Projects.path()) else {
        return Vec::new();
    };
    dir.documents()
        .filter_map(|(file, doc)| {
            let p = doc.as_project()?;
            Some(Project {
                id: id_of(file).unwrap_or(file).to_string(),
                name: p.name.clone(),
                url: p.url.clone(),
                description: p.description.clone(),
            })
        })
        .collect()
}

/// GET a JSON array of projects, e.g. from `/api/projects`.
#[cfg(target_arch = "wasm32")]
pub async fn fetch_projects(url: &str) -> Result<Vec<Project>, ProjectLoadError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let fail = |message: String| ProjectLoadError::Fetch { url: url.to_string(), message };

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);
    let request = Request::new_with_str_and_init(url, &opts).map_err(|e| fail(format!("{:?}", e)))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| fail(format!("{:?}", e)))?;

    let window = web_sys::window().ok_or_else(|| fail("no window".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| fail(format!("network error: {:?}", e)))?;
    let resp: Response = resp_value.dyn_into().map_err(|_| fail("not a Response".to_string()))?;
    if !resp.ok() {
        return Err(fail(format!("HTTP {}", resp.status())));
    }

    let json = resp.json().map_err(|e| fail(format!("{:?}", e)))?;
    let value = JsFuture::from(json).await.map_err(|e| fail(format!("bad body: {:?}", e)))?;
    serde_wasm_bindgen::from_value(value).map_err(|e| fail(e.to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn fetch_projects(url: &str) -> Result<Vec<Project>, ProjectLoadError> {
    Err(ProjectLoadError::Fetch {
        url: url.to_string(),
        message: "fetching only works in the browser".to_string(),
    })
}
