use crate::command::{Command, CommandResult};
use crate::context::TerminalContext;
use crate::error::ShellError;
use crate::transcript::Output;

pub struct CatCommand;

impl Command for CatCommand {
    fn execute(&self, arg: &str, ctx: &mut TerminalContext) -> CommandResult {
        // no operand, no message
        if arg.is_empty() {
            return Ok(None);
        }

        // only the current directory is searched, no paths
        let doc = ctx
            .catalog
            .document(&ctx.cwd, arg)
            .ok_or_else(|| ShellError::NoSuchFile(arg.to_string()))?;

        Ok(Some(Output::Document {
            file: arg.to_string(),
            body: doc.render(),
        }))
    }
}
