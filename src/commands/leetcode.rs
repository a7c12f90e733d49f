use crate::command::{Command, CommandResult};
use crate::context::TerminalContext;
use crate::transcript::Output;

pub struct LeetcodeCommand;

impl Command for LeetcodeCommand {
    fn execute(&self, _arg: &str, ctx: &mut TerminalContext) -> CommandResult {
        Ok(Some(Output::Leetcode {
            url: ctx.profile.leetcode_url.clone(),
            label: ctx.profile.leetcode_label.clone(),
        }))
    }
}
