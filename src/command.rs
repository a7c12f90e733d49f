use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::context::TerminalContext;
use crate::error::ShellError;
use crate::transcript::Output;

/// `Ok(None)` means the command ran and had nothing to say.
pub type CommandResult = Result<Option<Output>, ShellError>;

pub trait Command {
    fn execute(&self, arg: &str, ctx: &mut TerminalContext) -> CommandResult;
}

/// Every command the terminal knows. Adding one means adding a variant here
/// and the compiler walks you through the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CommandName {
    Cd,
    Ls,
    Cat,
    Help,
    Welcome,
    Clear,
    Theme,
    Date,
    Contact,
    Leetcode,
}

impl CommandName {
    pub const ALL: [CommandName; 10] = [
        CommandName::Cd,
        CommandName::Ls,
        CommandName::Cat,
        CommandName::Help,
        CommandName::Welcome,
        CommandName::Clear,
        CommandName::Theme,
        CommandName::Date,
        CommandName::Contact,
        CommandName::Leetcode,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CommandName::Cd => "cd",
            CommandName::Ls => "ls",
            CommandName::Cat => "cat",
            CommandName::Help => "help",
            CommandName::Welcome => "welcome",
            CommandName::Clear => "clear",
            CommandName::Theme => "theme",
            CommandName::Date => "date",
            CommandName::Contact => "contact",
            CommandName::Leetcode => "leetcode",
        }
    }

    fn handler(self) -> Box<dyn Command + Send + Sync> {
        use crate::commands::*;
        match self {
            CommandName::Cd => Box::new(cd::CdCommand),
            CommandName::Ls => Box::new(ls::LsCommand),
            CommandName::Cat => Box::new(cat::CatCommand),
            CommandName::Help => Box::new(help::HelpCommand),
            CommandName::Welcome => Box::new(welcome::WelcomeCommand),
            CommandName::Clear => Box::new(clear::ClearCommand),
            CommandName::Theme => Box::new(theme::ThemeCommand),
            CommandName::Date => Box::new(date::DateCommand),
            CommandName::Contact => Box::new(contact::ContactCommand),
            CommandName::Leetcode => Box::new(leetcode::LeetcodeCommand),
        }
    }
}

impl FromStr for CommandName {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|c| c.as_str() == s).ok_or(())
    }
}

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub struct CommandRegistry {
    commands: HashMap<CommandName, Box<dyn Command + Send + Sync>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self { commands: HashMap::new() }
    }

    pub fn register_command(&mut self, name: CommandName, cmd: Box<dyn Command + Send + Sync>) {
        self.commands.insert(name, cmd);
    }

    pub fn get(&self, name: CommandName) -> Option<&(dyn Command + Send + Sync)> {
        self.commands.get(&name).map(|c| c.as_ref())
    }

    /// in declaration order, which is also the order `help` lists them
    pub fn get_command_names(&self) -> Vec<&'static str> {
        CommandName::ALL
            .into_iter()
            .filter(|c| self.commands.contains_key(c))
            .map(CommandName::as_str)
            .collect()
    }

    pub fn default_commands() -> Self {
        let mut reg = Self::new();
        for name in CommandName::ALL {
            reg.register_command(name, name.handler());
        }
        reg
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::default_commands()
    }
}

/// Split a trimmed line at the first space. `cd  about` keeps the extra
/// space in the argument, which then matches nothing.
pub fn split_line(input: &str) -> (&str, &str) {
    input.split_once(' ').unwrap_or((input, ""))
}

pub fn run_command(input: &str, ctx: &mut TerminalContext, registry: &CommandRegistry) -> CommandResult {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    let (name, arg) = split_line(input);
    let command = name
        .parse::<CommandName>()
        .ok()
        .and_then(|n| registry.get(n))
        .ok_or_else(|| ShellError::CommandNotFound(input.to_string()))?;
    log::debug!("dispatch {} {:?} at {}", name, arg, ctx.cwd);
    command.execute(arg, ctx)
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
    fn test_split_line() {
        assert_eq!(split_line("cd about"), ("cd", "about"));
        assert_eq!(split_line("ls"), ("ls", ""));
        assert_eq!(split_line("cat a b"), ("cat", "a b"));
        assert_eq!(split_line("cd  about"), ("cd", " about"));
    }

    #[test]
    fn test_names_round_trip_through_from_str() {
        for name in CommandName::ALL {
            assert_eq!(name.as_str().parse::<CommandName>(), Ok(name));
        }
        assert!("LS".parse::<CommandName>().is_err());
    }

    #[test]
    fn test_default_registry_has_all_ten() {
        let reg = CommandRegistry::default_commands();
        assert_eq!(
            reg.get_command_names(),
            vec!["cd", "ls", "cat", "help", "welcome", "clear", "theme", "date", "contact", "leetcode"]
        );
    }

    #[test]
    fn test_unknown_command_reports_whole_input() {
        let reg = CommandRegistry::default_commands();
        let err = run_command("frobnicate --now", &mut ctx(), &reg).unwrap_err();
        assert_eq!(err.to_string(), "frobnicate --now: command not found");
    }

    #[test]
    fn test_blank_input_is_a_no_op() {
        let reg = CommandRegistry::default_commands();
        assert_eq!(run_command("   ", &mut ctx(), &reg), Ok(None));
    }

    #[test]
    fn test_unregistered_name_is_not_found() {
        let reg = CommandRegistry::new();
        assert!(matches!(run_command("ls", &mut ctx(), &reg), Err(ShellError::CommandNotFound(_))));
    }
}
