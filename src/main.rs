use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;

use portfolio_terminal::config::TerminalConfig;
use portfolio_terminal::host::MemoryHost;
use portfolio_terminal::logger;
use portfolio_terminal::projects::load_projects;
use portfolio_terminal::session::{Key, Session};
use portfolio_terminal::transcript::{Entry, Level};

const USAGE: &str = "usage: portfolio-terminal [--config FILE | --projects DIR]";

/// Lines the REPL handles itself instead of submitting.
#[derive(Debug, PartialEq, Eq)]
enum ReplCommand<'a> {
    /// `:tab [partial]`, completes `partial` as if Tab was pressed
    Tab(&'a str),
    Up,
    Down,
    Exit,
}

fn repl_command(line: &str) -> Option<ReplCommand<'_>> {
    match line {
        ":tab" => Some(ReplCommand::Tab("")),
        ":up" => Some(ReplCommand::Up),
        ":down" => Some(ReplCommand::Down),
        _ if line.trim() == "exit" => Some(ReplCommand::Exit),
        _ => line.strip_prefix(":tab ").map(ReplCommand::Tab),
    }
}

fn load_config(path: &str) -> Result<TerminalConfig, String> {
    let text = fs::read_to_string(path).map_err(|e| format!("{}: {}", path, e))?;
    TerminalConfig::from_json(&text).map_err(|e| format!("{}: {}", path, e))
}

fn print_entry(prompt: &str, entry: &Entry) {
    match entry {
        Entry::Echo(line) => println!("→ {} {}", prompt, line),
        Entry::Output(out) if out.level() != Level::Info => eprintln!("{}", out),
        Entry::Output(out) => println!("{}", out),
    }
}

fn print_projects(dir: &str) -> ExitCode {
    match load_projects(Path::new(dir)) {
        Ok(projects) => {
            for p in projects {
                println!("{}\n  {}\n  {}\n", p.name, p.url, p.description);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match args.as_slice() {
        [] => TerminalConfig::default(),
        [flag, dir] if flag == "--projects" => return print_projects(dir),
        [flag, path] if flag == "--config" => match load_config(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        _ => {
            eprintln!("{}", USAGE);
            return ExitCode::FAILURE;
        }
    };

    logger::init(config.log_level);
    let mut session = match Session::new(&config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    let mut host = MemoryHost::new();

    for entry in session.transcript().entries() {
        print_entry(session.prompt(), entry);
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("[{}] ➤ ", session.location());
        let _ = stdout.flush();
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let line = line.trim_end_matches(['\n', '\r']);

        // :tab / :up / :down stand in for the keys a line reader can't see
        match repl_command(line) {
            Some(ReplCommand::Tab(partial)) => {
                session.set_input(partial);
                session.key_down(Key::Tab);
                match session.hint() {
                    Some(hint) => println!("{}", hint),
                    None => println!("{}", session.input()),
                }
                continue;
            }
            Some(ReplCommand::Up) => {
                session.key_down(Key::Up);
                println!("{}", session.input());
                continue;
            }
            Some(ReplCommand::Down) => {
                session.key_down(Key::Down);
                println!("{}", session.input());
                continue;
            }
            Some(ReplCommand::Exit) => break,
            None => {}
        }

        let before = session.transcript().len();
        if let Some(sub) = session.submit(line, &mut host) {
            session.set_location(host.current());
            if sub.cleared {
                // ANSI clear + home
                print!("\x1b[2J\x1b[H");
                continue;
            }
            for entry in session.transcript().since(before).iter().skip(1) {
                print_entry(session.prompt(), entry);
            }
        }
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_tab_completes_empty_input() {
        assert_eq!(repl_command(":tab"), Some(ReplCommand::Tab("")));
        assert_eq!(repl_command(":tab cd pro"), Some(ReplCommand::Tab("cd pro")));
        assert_eq!(repl_command(":tab cd "), Some(ReplCommand::Tab("cd ")));
    }

    #[test]
    fn test_plain_lines_are_submitted() {
        assert_eq!(repl_command(":up"), Some(ReplCommand::Up));
        assert_eq!(repl_command("  exit "), Some(ReplCommand::Exit));
        assert_eq!(repl_command("ls"), None);
        assert_eq!(repl_command(":tabs"), None);
    }

    #[test]
    fn test_config_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("terminal.json");
        fs::write(&path, r#"{"prompt": "$", "greet_on_mount": false}"#).unwrap();
        let config = load_config(path.to_str().unwrap()).unwrap();
        assert_eq!(config.prompt, "$");
        assert!(!config.greet_on_mount);

        let missing = dir.path().join("nope.json");
        assert!(load_config(missing.to_str().unwrap()).is_err());
    }
}
