use crate::command::{Command, CommandResult};
use crate::context::TerminalContext;
use crate::transcript::Output;

pub const WELCOME: &str = "Hi guest, to see the list available commands, type `help`";

pub struct WelcomeCommand;

impl Command for WelcomeCommand {
    fn execute(&self, _arg: &str, _ctx: &mut TerminalContext) -> CommandResult {
        Ok(Some(Output::text(WELCOME)))
    }
}
