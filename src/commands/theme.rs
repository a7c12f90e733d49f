use crate::command::{Command, CommandResult};
use crate::context::{Effect, TerminalContext};
use crate::host::Theme;
use crate::transcript::Output;

/// theme <dark | light>
pub struct ThemeCommand;

impl Command for ThemeCommand {
    fn execute(&self, arg: &str, ctx: &mut TerminalContext) -> CommandResult {
        // anything but the two names is ignored without a word
        let Ok(theme) = arg.parse::<Theme>() else {
            log::debug!("theme: ignoring {:?}", arg);
            return Ok(None);
        };
        ctx.queue(Effect::SetTheme(theme));
        Ok(Some(Output::text(format!("Theme switched to {}", theme))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::Profile;

    fn ctx() -> TerminalContext {
        TerminalContext::new(Catalog::bundled().unwrap(), Profile::default())
    }

    #[test]
    fn test_theme_dark() {
        let mut ctx = ctx();
        let out = ThemeCommand.execute("dark", &mut ctx).unwrap().unwrap();
        assert_eq!(out.to_string(), "Theme switched to dark");
        assert_eq!(ctx.take_effects(), vec![Effect::SetTheme(Theme::Dark)]);
    }

    #[test]
    fn test_theme_invalid_is_silent() {
        for arg in ["", "blue", "Light", "dark mode"] {
            let mut ctx = ctx();
            assert_eq!(ThemeCommand.execute(arg, &mut ctx), Ok(None));
            assert!(ctx.take_effects().is_empty());
        }
    }
}
