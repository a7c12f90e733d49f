use chrono::{DateTime, Local, TimeZone};

use crate::command::{Command, CommandResult};
use crate::context::TerminalContext;
use crate::transcript::Output;

pub struct DateCommand;

/// `Current Date and Time: 3/7/2025, 4:05:09 PM`
pub fn date_line<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("Current Date and Time: {}", now.format("%-m/%-d/%Y, %-I:%M:%S %p"))
}

impl Command for DateCommand {
    fn execute(&self, _arg: &str, _ctx: &mut TerminalContext) -> CommandResult {
        Ok(Some(Output::text(date_line(&Local::now()))))
    }
}
