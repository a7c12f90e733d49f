use crate::catalog::Catalog;
use crate::config::Profile;
use crate::host::Theme;
use crate::routes::ROOT;

/// Side effect a command wants applied after it returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    NavigateTo(&'static str),
    NavigateBack,
    SetTheme(Theme),
    ClearScreen,
}

/// What a command sees: where we are, what's on disk, who we are.
/// Commands never touch the host directly, they queue effects here.
pub struct TerminalContext {
    pub catalog: &'static Catalog,
    pub cwd: String,
    pub profile: Profile,
    effects: Vec<Effect>,
}

impl TerminalContext {
    pub fn new(catalog: &'static Catalog, profile: Profile) -> Self {
        Self {
            catalog,
            cwd: ROOT.to_string(),
            profile,
            effects: Vec::new(),
        }
    }

    pub fn queue(&mut self, effect: Effect) {
        self.effects.push(effect);
    }

    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }
}
