use serde::{Deserialize, Serialize};

/// who runs the site - lives at /about/info.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactProfile {
    pub name: String,
    pub organization: String,
    // stored as "designation" in the bundled json
    #[serde(rename = "designation")]
    pub title: String,
    pub email: String,
    pub phone: String,
    pub summary: String,
}

/// one entry under /projects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub name: String,
    pub url: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Document {
    Contact(ContactProfile),
    Project(ProjectRecord),
}

impl Document {
    pub fn name(&self) -> &str {
        match self {
            Document::Contact(c) => &c.name,
            Document::Project(p) => &p.name,
        }
    }

    pub fn as_project(&self) -> Option<&ProjectRecord> {
        match self {
            Document::Project(p) => Some(p),
            Document::Contact(_) => None,
        }
    }

    /// field-by-field dump, 2 space indent, same shape as the json on disk
    pub fn render(&self) -> String {
        // derived Serialize on plain string fields can't fail
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
