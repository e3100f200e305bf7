use std::{
    fs,
    io::{self, BufRead, Write},
    process::ExitCode,
};

use clap::{Parser, Subcommand};
use lox_frontend::{
    diagnostic::Reporter,
    parse_source,
    syntax::scanner::scan,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// The source was rejected by the scanner or the parser.
const EXIT_DATA_ERROR: u8 = 65;
/// The input file could not be read.
const EXIT_NO_INPUT: u8 = 66;

/// lox-frontend scans and parses Lox expressions and prints what it finds.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Increase logging verbosity (default: info, -v: debug, -vv+: trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Prints one line per token: kind, lexeme and literal value.
    Tokenize(Input),
    /// Prints the expression tree in parenthesized prefix form.
    Parse(Input),
    /// Reads expressions from standard input, one per line, and prints their
    /// trees.
    Repl,
}

#[derive(clap::Args, Debug)]
struct Input {
    /// Tells lox-frontend to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    contents: String,
}

impl Input {
    fn read(self) -> Result<String, ExitCode> {
        if !self.file {
            return Ok(self.contents);
        }

        fs::read_to_string(&self.contents).map_err(|e| {
                                              eprintln!("Failed to read the input file '{}': {e}",
                                                        &self.contents);
                                              ExitCode::from(EXIT_NO_INPUT)
                                          })
    }
}

fn init_logging(verbose: u8) {
    let default_directive = match verbose {
        0 => "lox_frontend=info",
        1 => "lox_frontend=debug",
        _ => "lox_frontend=trace",
    };

    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                                  EnvFilter::new(default_directive)
                              }))
                             .with_writer(io::stderr)
                             .init();
}

fn exit_status(reporter: &Reporter) -> ExitCode {
    if reporter.had_error() { ExitCode::from(EXIT_DATA_ERROR) } else { ExitCode::SUCCESS }
}

fn tokenize(source: &str) -> ExitCode {
    let mut reporter = Reporter::new();
    for token in scan(source, &mut reporter) {
        println!("{token}");
    }
    exit_status(&reporter)
}

fn parse(source: &str) -> ExitCode {
    let mut reporter = Reporter::new();
    if let Ok(expr) = parse_source(source, &mut reporter) {
        println!("{expr}");
    }
    exit_status(&reporter)
}

fn repl() -> ExitCode {
    let stdin = io::stdin();
    let mut reporter = Reporter::new();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                eprintln!("Failed to read from standard input: {e}");
                return ExitCode::from(EXIT_NO_INPUT);
            },
            None => break,
        };

        if line.trim().is_empty() {
            continue;
        }
        if let Ok(expr) = parse_source(&line, &mut reporter) {
            println!("{expr}");
        }
        reporter.reset();
    }

    println!();
    ExitCode::SUCCESS
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!(?cli, "starting");

    match cli.command {
        Command::Tokenize(input) => match input.read() {
            Ok(source) => tokenize(&source),
            Err(code) => code,
        },
        Command::Parse(input) => match input.read() {
            Ok(source) => parse(&source),
            Err(code) => code,
        },
        Command::Repl => {
            info!("reading expressions from standard input");
            repl()
        },
    }
}
