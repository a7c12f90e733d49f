use crate::command::{Command, CommandResult};
use crate::context::{Effect, TerminalContext};
use crate::error::ShellError;
use crate::resolver::{resolve, Resolution};

pub struct CdCommand;

impl Command for CdCommand {
    fn execute(&self, arg: &str, ctx: &mut TerminalContext) -> CommandResult {
        match resolve(&ctx.cwd, arg) {
            Resolution::NavigateTo(path) => {
                ctx.queue(Effect::NavigateTo(path));
                Ok(None) // a successful cd is silent
            }
            Resolution::NavigateUp => {
                ctx.queue(Effect::NavigateBack);
                Ok(None)
            }
            Resolution::AlreadyAtRoot => Err(ShellError::AlreadyAtRoot),
            Resolution::NoSuchDirectory { arg, miss } => Err(ShellError::NoSuchDirectory { arg, miss }),
            Resolution::Stay => Ok(None),
        }
    }
}
