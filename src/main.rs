use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use clap::Subcommand;
use env_logger::Builder;
use log::{debug, info};

use monkey_interpreter as monkey;

use monkey::evaluator::Interpreter;
use monkey::lexer::Lexer;
use monkey::parser::Parser;
use monkey::repl;
use monkey::token::{Token, TokenType};

#[derive(ClapParser, Debug)]
#[command(version, about = "Monkey language interpreter", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    commands: Commands,

    /// Enable logging to app.log
    #[arg(long, global = true)]
    log: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Tokenizes input from a file, printing each token
    Tokenize {
        filename: Option<PathBuf>,

        /// Print the tokens as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Parses input from a file and prints its canonical AST form
    Parse {
        filename: Option<PathBuf>,

        /// Print the AST as JSON
        #[arg(long)]
        json: bool,
    },

    /// Runs input from a file as a Monkey program and prints the result
    Run { filename: Option<PathBuf> },

    /// Starts an interactive session
    Repl {
        /// Keep `let` bindings between lines
        #[arg(long)]
        persist: bool,
    },
}

/// Reads the contents of a file into a String
fn read_file(filename: PathBuf) -> Result<String> {
    info!("Reading file: {:?}", filename);
    let file = File::open(&filename).context(format!("Failed to open file {:?}", filename))?;
    let mut reader = BufReader::new(file);
    let mut buf = String::new();

    let bytes = reader
        .read_to_string(&mut buf)
        .context(format!("Failed to read file {:?}", filename))?;

    info!("Read {} bytes from {:?}", bytes, filename);

    Ok(buf)
}

fn init_logger() -> Result<()> {
    let log_file = File::create("app.log").context("Failed to create app.log")?;

    Builder::new()
        .format(|buf, record| {
            // Strip 'monkey_interpreter::' from module path
            let module = record
                .module_path()
                .unwrap_or("<unnamed>")
                .strip_prefix("monkey_interpreter::")
                .unwrap_or(record.module_path().unwrap_or("<unnamed>"));
            writeln!(
                buf,
                "{} [{}:{}] - {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                module,
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .filter(None, log::LevelFilter::Debug)
        .parse_default_env() // RUST_LOG overrides the default
        .init();

    info!("Logger initialized, writing to app.log");
    Ok(())
}

fn no_input() -> ! {
    info!("No filepath provided");
    println!("No input filepath was provided. Exiting...");
    std::process::exit(0);
}

fn report_parse_errors(parser: &Parser<'_>) -> ! {
    for e in parser.errors() {
        debug!("Parse debug: {}", e);
        eprintln!("{}", e);
    }
    std::process::exit(65);
}

fn main() -> Result<()> {
    let args: Cli = Cli::parse();

    // Initialize logger only if --log flag is provided
    if args.log {
        init_logger()?;
    } else {
        // Initialize a minimal logger to avoid "no logger" errors
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Off)
            .init();
    }

    info!("CLI arguments: {:?}", args);

    match args.commands {
        Commands::Tokenize { filename, json } => {
            let Some(filename) = filename else { no_input() };

            info!("Running Tokenize subcommand");
            let source = read_file(filename)?;
            let tokens: Vec<Token<'_>> = Lexer::new(&source).collect();

            if json {
                println!("{}", serde_json::to_string_pretty(&tokens)?);
            } else {
                for token in &tokens {
                    println!("{}", token);
                }
            }

            if tokens.iter().any(|t| t.is(TokenType::ILLEGAL)) {
                debug!("Tokenization found illegal characters, exiting with code 65");
                std::process::exit(65);
            }

            info!("Tokenization completed successfully");
        }

        Commands::Parse { filename, json } => {
            let Some(filename) = filename else { no_input() };

            info!("Running Parse subcommand");
            let source = read_file(filename)?;
            let mut parser = Parser::new(Lexer::new(&source));
            let program = parser.parse_program();

            if !parser.errors().is_empty() {
                report_parse_errors(&parser);
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&program)?);
            } else {
                println!("{}", program);
            }

            info!("Parse subcommand completed");
        }

        Commands::Run { filename } => {
            let Some(filename) = filename else { no_input() };

            info!("Running Run subcommand");
            let source = read_file(filename)?;
            let mut parser = Parser::new(Lexer::new(&source));
            let program = parser.parse_program();

            if !parser.errors().is_empty() {
                report_parse_errors(&parser);
            }

            info!("Parsed {} statements", program.statements.len());

            match Interpreter::new().interpret(&program) {
                Ok(value) => {
                    debug!("Evaluated to: {}", value);
                    println!("{}", value);
                }

                Err(e) => {
                    debug!("Runtime debug: {}", e);
                    eprintln!("{}", e);
                    std::process::exit(70);
                }
            }
        }

        Commands::Repl { persist } => {
            info!("Running Repl subcommand");
            println!("This is the Monkey programming language!");
            println!("Feel free to type in commands");

            let stdin = io::stdin();
            repl::start(stdin.lock(), io::stdout(), persist).context("REPL I/O failed")?;
        }
    }

    Ok(())
}
