use crate::command::{Command, CommandResult};
use crate::context::{Effect, TerminalContext};

pub struct ClearCommand;

impl Command for ClearCommand {
    fn execute(&self, _arg: &str, ctx: &mut TerminalContext) -> CommandResult {
        // the session wipes the transcript, including this line
        ctx.queue(Effect::ClearScreen);
        Ok(None)
    }
}
