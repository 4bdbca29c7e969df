//! Reliability shell: interactive front end for the empirical reliability calculator
//!
//! ## Usage
//!
//! ```bash
//! reliability                                   # Interactive session
//! reliability --time 1 --time 3 --time 5 --at 4 # Compute once and exit
//! reliability --unit cycles --output fleet.txt  # Custom unit and export path
//! ```
//!
//! Logging goes to stderr and honours `RUST_LOG`.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::str::FromStr;

use clap::Parser;
use empirical_reliability::{
    DEFAULT_REPORT_FILE, ReportOptions, ResultsBlock, Session, SessionError, SessionState,
    ValidationError,
};
use thiserror::Error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line options
#[derive(Debug, Parser)]
#[command(name = "reliability", version, about = "Empirical reliability indicators from failure times")]
struct Cli {
    /// Unit label printed after every time value
    #[arg(long, env = "RELIABILITY_UNIT", default_value = "hours")]
    unit: String,

    /// First line of exported reports
    #[arg(long, default_value = "Reliability Report")]
    title: String,

    /// Where `export` writes the report when no path is given
    #[arg(short, long, default_value = DEFAULT_REPORT_FILE)]
    output: PathBuf,

    /// Failure time to record before the session starts (repeatable)
    #[arg(long = "time", value_name = "VALUE", allow_negative_numbers = true)]
    times: Vec<String>,

    /// Compute the indicators at this point, print them and exit
    #[arg(long, value_name = "T", allow_negative_numbers = true)]
    at: Option<String>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Add(String),
    Remove(String),
    List,
    Compute(String),
    Show,
    Close,
    Export(Option<PathBuf>),
    Reset,
    Formulas,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown command {0:?}. Type `help` for the list of commands.")]
struct UnknownCommand(String);

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();
        match word.to_ascii_lowercase().as_str() {
            "add" | "a" => Ok(Self::Add(rest.to_string())),
            "rm" | "remove" | "del" => Ok(Self::Remove(rest.to_string())),
            "list" | "ls" => Ok(Self::List),
            "calc" | "compute" | "t" => Ok(Self::Compute(rest.to_string())),
            "show" => Ok(Self::Show),
            "close" => Ok(Self::Close),
            "export" => Ok(Self::Export((!rest.is_empty()).then(|| PathBuf::from(rest)))),
            "reset" => Ok(Self::Reset),
            "formulas" => Ok(Self::Formulas),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            _ => Err(UnknownCommand(line.to_string())),
        }
    }
}

const HELP: &str = "\
Commands:
  add <time>      record a failure time
  rm <n>          remove the n-th recorded time
  list            show recorded times
  calc <t>        compute F*(t), R*(t), f*(t), λ*(t) and E*T
  show | close    open or close the latest results
  export [path]   write the report to a text file
  reset           clear everything
  formulas        show how each indicator is computed
  quit            leave";

const FORMULAS: &str = "\
F*(t) = P(T < t)            failures before t / number of units
R*(t) = 1 - F*(t)           probability of working until t
f*(t) = k / (n * k)         k = failures at or before t, 0 when k = 0
λ*(t) = f*(t) / R*(t)       failure intensity, 0 when R*(t) = 0
E*T   = mean of recorded times";

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "empirical_reliability=info,reliability=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut session = Session::new(ReportOptions {
        title: cli.title,
        unit: cli.unit,
    });
    for time in &cli.times {
        session.add_time(time)?;
    }

    if let Some(t) = cli.at {
        session.compute(&t)?;
        if let Some(result) = session.result() {
            print!("{}", ResultsBlock::new(result, &session.options().unit));
        }
        return Ok(());
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    println!("{HELP}");
    print_times(&session);
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(command) => {
                if let Some(message) = execute(&mut session, command, &cli.output) {
                    println!("{message}");
                }
            }
            Err(e) => println!("{e}"),
        }
    }
    Ok(())
}

/// Runs one command and returns the message it produced, if it failed.
fn execute(session: &mut Session, command: Command, default_output: &Path) -> Option<String> {
    let succeeded = match command {
        Command::Add(input) => {
            let added = session.add_time(&input).is_ok();
            if added {
                print_times(session);
            }
            added
        }
        Command::Remove(position) => {
            match position.parse::<usize>() {
                Ok(n) if n >= 1 && session.remove_time(n - 1).is_some() => print_times(session),
                _ => println!("No recorded time at position {position:?}."),
            }
            true
        }
        Command::List => {
            print_times(session);
            true
        }
        Command::Compute(input) => {
            let computed = session.compute(&input).is_ok();
            if computed {
                print_results(session);
            }
            computed
        }
        Command::Show => {
            if session.show_results() {
                print_results(session);
            } else {
                println!("Nothing computed yet.");
            }
            true
        }
        Command::Close => {
            session.close_results();
            true
        }
        Command::Export(path) => {
            let path = path.unwrap_or_else(|| default_output.to_path_buf());
            let exported = session.export(&path).is_ok();
            if exported {
                println!("Report written to {}", path.display());
            }
            exported
        }
        Command::Reset => {
            session.reset();
            println!("Session cleared.");
            true
        }
        Command::Formulas => {
            println!("{FORMULAS}");
            true
        }
        Command::Help => {
            println!("{HELP}");
            true
        }
        Command::Quit => true,
    };

    if succeeded {
        None
    } else {
        session.message().map(str::to_string)
    }
}

fn print_results(session: &Session) {
    if session.state() != SessionState::ResultsShown {
        return;
    }
    if let Some(result) = session.result() {
        println!();
        print!("{}", ResultsBlock::new(result, &session.options().unit));
        println!("(export [path] | close)");
    }
}

fn print_times(session: &Session) {
    let times = session.times();
    let unit = &session.options().unit;
    if times.is_empty() {
        println!("No failure times recorded.");
    } else {
        let listed: Vec<String> = times
            .iter()
            .enumerate()
            .map(|(i, time)| format!("{}. {time} {unit}", i + 1))
            .collect();
        println!("{}", listed.join("  "));
    }
    println!("Recorded failure times: {}", times.len());
}
