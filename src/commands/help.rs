use crate::command::{Command, CommandResult};
use crate::context::TerminalContext;
use crate::transcript::{HelpRow, Output};

/// help
/// List what can be typed, as (syntax, description) pairs.
pub struct HelpCommand;

pub const HELP_TABLE: &[HelpRow] = &[
    HelpRow { command: "cd <page-name>", description: "eg: cd <projects | about>" },
    HelpRow { command: "cd ..", description: "go back to previous page" },
    HelpRow { command: "ls", description: "list directory contents" },
    HelpRow { command: "cat <file>.json", description: "display file content" },
    HelpRow { command: "welcome", description: "displays welcome message" },
    HelpRow { command: "help", description: "list of commands" },
    HelpRow { command: "clear", description: "clear the terminal" },
    HelpRow { command: "theme <mode>", description: "eg: theme <dark | light>" },
    HelpRow { command: "date", description: "Current date and time" },
    HelpRow { command: "contact", description: "displays contact information" },
    HelpRow { command: "leetcode", description: "displays leetcode profile" },
];

impl Command for HelpCommand {
    fn execute(&self, _arg: &str, _ctx: &mut TerminalContext) -> CommandResult {
        Ok(Some(Output::Help { rows: HELP_TABLE.to_vec() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::CommandName;

    #[test]
    fn test_every_command_is_documented() {
        for name in CommandName::ALL {
            assert!(
                HELP_TABLE.iter().any(|row| row.command.split(' ').next() == Some(name.as_str())),
                "{} has no help row",
                name
            );
        }
    }
}
