//! Bear CLI - command-line interface for the Bear scripting language.

use std::env;
use std::fs;
use std::io;
use std::path::Path;

use bear::exit::{self, EX_IOERR, EX_NOINPUT, EX_OK, EX_USAGE};
use bear::{Reporter, Token};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use thiserror::Error;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Errors that end the process before or outside a scan.
#[derive(Error, Debug)]
enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Readline error: {0}")]
    Readline(#[from] ReadlineError),
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => EX_USAGE,
            CliError::NotFound(_) | CliError::Io { .. } => EX_NOINPUT,
            CliError::Readline(_) => EX_IOERR,
        }
    }
}

/// What the command line asked for.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Help,
    Version,
    Eval(String),
    File(String),
    Repl,
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let code = match parse_args(args).and_then(run) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            if matches!(e, CliError::Usage(_)) {
                print_usage();
            }
            e.exit_code()
        }
    };
    std::process::exit(code);
}

fn parse_args(args: Vec<String>) -> Result<Command, CliError> {
    let mut eval_code: Option<String> = None;
    let mut file: Option<String> = None;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-v" | "--version" => return Ok(Command::Version),
            "-e" | "--eval" => {
                let code = args
                    .next()
                    .ok_or_else(|| CliError::Usage("-e requires an argument".to_string()))?;
                eval_code = Some(code);
            }
            arg if arg.starts_with('-') && arg.len() > 1 => {
                return Err(CliError::Usage(format!("Unknown option: {}", arg)));
            }
            _ => {
                if file.is_some() {
                    return Err(CliError::Usage("expected at most one script".to_string()));
                }
                file = Some(arg);
            }
        }
    }

    match (eval_code, file) {
        (Some(_), Some(_)) => Err(CliError::Usage(
            "cannot combine -e with a script".to_string(),
        )),
        (Some(code), None) => Ok(Command::Eval(code)),
        (None, Some(path)) => Ok(Command::File(path)),
        (None, None) => Ok(Command::Repl),
    }
}

fn run(command: Command) -> Result<i32, CliError> {
    match command {
        Command::Help => {
            print_help();
            Ok(EX_OK)
        }
        Command::Version => {
            print_version();
            Ok(EX_OK)
        }
        Command::Eval(code) => Ok(run_source(&code)),
        Command::File(path) => run_file(&path),
        Command::Repl => {
            start_repl()?;
            Ok(EX_OK)
        }
    }
}

fn print_usage() {
    eprintln!("Usage: bear [script]");
    eprintln!("       bear -e <code>");
}

fn print_help() {
    println!(
        r#"
Bear v{} - scripting language front end

Usage:
  bear [options] [script]

Options:
  -h, --help      Show this help message
  -v, --version   Show version
  -e, --eval      Scan code from the command line

Examples:
  bear                     Start interactive REPL
  bear script.bear         Print the tokens of a script
  bear -e "print 1 + 2;"   Print the tokens of some code

Exit status:
  0 on success, 64 on bad usage, 65 if the source had lexical errors,
  66 if the script could not be read.
"#,
        VERSION
    );
}

fn print_version() {
    println!("Bear {}", VERSION);
}

fn print_tokens(tokens: &[Token]) {
    for token in tokens {
        println!("{}", token);
    }
}

/// Scan a complete source and print its tokens. Returns the exit code.
fn run_source(source: &str) -> i32 {
    let mut reporter = Reporter::stderr();
    let tokens = bear::run(source, &mut reporter);
    print_tokens(&tokens);
    exit::for_scan(reporter.had_error())
}

fn run_file(filepath: &str) -> Result<i32, CliError> {
    let path = Path::new(filepath);

    if !path.exists() {
        return Err(CliError::NotFound(filepath.to_string()));
    }

    let bytes = fs::read(path).map_err(|source| CliError::Io {
        path: filepath.to_string(),
        source,
    })?;

    // Undecodable bytes become U+FFFD and are reported by the scanner.
    Ok(run_source(&String::from_utf8_lossy(&bytes)))
}

fn start_repl() -> Result<(), CliError> {
    println!("Bear v{} - Type 'exit' or Ctrl+D to quit", VERSION);
    println!();

    let mut rl = DefaultEditor::new()?;
    let mut reporter = Reporter::stderr();
    let mut buffer = String::new();

    loop {
        let prompt = if buffer.is_empty() { "> " } else { ". " };

        match rl.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();

                if buffer.is_empty() && (trimmed == "exit" || trimmed == "quit") {
                    println!("Goodbye!");
                    break;
                }

                if buffer.is_empty() && is_command(trimmed) {
                    if handle_command(trimmed) {
                        break;
                    }
                    continue;
                }

                if !buffer.is_empty() {
                    buffer.push('\n');
                }
                buffer.push_str(&line);

                // Keep reading while a string literal is still open.
                if is_complete(&buffer) {
                    if !buffer.trim().is_empty() {
                        rl.add_history_entry(buffer.as_str()).ok(); // Ignore history errors

                        let tokens = bear::run(&buffer, &mut reporter);
                        print_tokens(&tokens);
                        // One bad entry must not affect the next.
                        reporter.reset();
                    }
                    buffer.clear();
                }
            }
            Err(ReadlineError::Interrupted) => {
                buffer.clear();
                println!("^C");
            }
            Err(ReadlineError::Eof) => {
                println!("\nGoodbye!");
                break;
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}

/// Check whether the input has no open string literal.
///
/// Quotes inside a `//` comment don't count.
fn is_complete(input: &str) -> bool {
    let mut in_string = false;
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if in_string {
            if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '/' if chars.peek() == Some(&'/') => {
                while chars.peek().is_some_and(|&c| c != '\n') {
                    chars.next();
                }
            }
            _ => {}
        }
    }

    !in_string
}

/// A REPL command is `/` immediately followed by a letter, so `/ 2` and
/// `// note` still go to the scanner.
fn is_command(line: &str) -> bool {
    let mut chars = line.chars();
    chars.next() == Some('/') && chars.next().is_some_and(|c| c.is_ascii_alphabetic())
}

/// Handle a REPL slash command. Returns true when the REPL should exit.
fn handle_command(cmd: &str) -> bool {
    let parts: Vec<&str> = cmd[1..].split_whitespace().collect();
    let command = parts.first().map(|s| s.to_lowercase()).unwrap_or_default();

    match command.as_str() {
        "help" => {
            println!(
                r#"
REPL Commands:
  /help     Show this help
  /clear    Clear the screen
  /exit     Exit the REPL

Each entry is scanned and its tokens are printed.
"#
            );
        }
        "clear" => {
            // ANSI escape code to clear screen
            print!("\x1B[2J\x1B[1;1H");
        }
        "exit" | "quit" => return true,
        _ => {
            println!("Unknown command: /{}. Type /help for available commands.", command);
        }
    }
    false
}
