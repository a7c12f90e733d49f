use crate::command::{Command, CommandResult};
use crate::context::TerminalContext;
use crate::listing::entries_for;
use crate::transcript::Output;

pub struct LsCommand;

impl Command for LsCommand {
    // arguments are ignored, `ls` always lists where you are
    fn execute(&self, _arg: &str, ctx: &mut TerminalContext) -> CommandResult {
        let entries = entries_for(&ctx.cwd).iter().map(|e| e.to_string()).collect();
        Ok(Some(Output::Listing { entries }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::Profile;

    fn ls_at(cwd: &str) -> String {
        let mut ctx = TerminalContext::new(Catalog::bundled().unwrap(), Profile::default());
        ctx.cwd = cwd.to_string();
        LsCommand.execute("", &mut ctx).unwrap().unwrap().to_string()
    }

    #[test]
    fn test_ls_root() {
        assert_eq!(ls_at("/"), "about/    projects/");
    }

    #[test]
    fn test_ls_projects() {
        assert_eq!(
            ls_at("/projects"),
            "..    portfolio.json    omniboard.json    safestep.json    agrisite.json    cognicodeml.json"
        );
    }

    #[test]
    fn test_ls_unknown_location_is_empty_listing() {
        assert_eq!(ls_at("/blog"), "");
    }

    #[test]
    fn test_ls_is_repeatable() {
        assert_eq!(ls_at("/about"), ls_at("/about"));
    }
}
