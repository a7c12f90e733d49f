//! The two pages the terminal can `cd` into.

pub const ROOT: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    About,
    Projects,
}

impl Route {
    pub const ALL: [Route; 2] = [Route::About, Route::Projects];

    /// what you type after `cd`
    pub fn key(self) -> &'static str {
        match self {
            Route::About => "about",
            Route::Projects => "projects",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::About => "/about",
            Route::Projects => "/projects",
        }
    }

    pub fn from_key(key: &str) -> Option<Route> {
        Self::ALL.into_iter().find(|r| r.key() == key)
    }

    pub fn from_path(path: &str) -> Option<Route> {
        Self::ALL.into_iter().find(|r| r.path() == path)
    }
}

pub fn is_root(location: &str) -> bool {
    location == ROOT
}
