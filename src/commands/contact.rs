use crate::command::{Command, CommandResult};
use crate::context::TerminalContext;
use crate::transcript::Output;

pub struct ContactCommand;

impl Command for ContactCommand {
    fn execute(&self, _arg: &str, ctx: &mut TerminalContext) -> CommandResult {
        let p = &ctx.profile;
        Ok(Some(Output::Contact {
            email: p.email.clone(),
            phone: p.phone.clone(),
            phone_display: p.phone_display.clone(),
        }))
    }
}
