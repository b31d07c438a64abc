//! Interactive read‑eval‑print loop.
//!
//! Generic over its reader and writer so the loop can be driven from tests
//! as well as from stdin/stdout.

use std::io::{BufRead, Write};

use log::{debug, info};

use crate::environment::Environment;
use crate::error::{ParseError, Result};
use crate::evaluator::Interpreter;
use crate::lexer::Lexer;
use crate::parser::Parser;

pub const PROMPT: &str = ">> ";

const MONKEY_FACE: &str = r#"            __,__
   .--.  .-"     "-.  .--.
  / .. \/  .-. .-.  \/ .. \
 | |  '|  /   Y   \  |'  | |
 | \   \  \ 0 | 0 /  /   / |
  \ '- ,\.-"""""""-./, -' /
   ''-' /_   ^ ^   _\ '-''
       |  \._   _./  |
       \   \ '~' /   /
        '._ '-=-' _.'
           '-----'
"#;

/// Run the loop until end of input or an empty line.
///
/// With `persist` every line is evaluated in one shared environment, so
/// `let` bindings survive between lines; otherwise each line starts fresh.
pub fn start<R: BufRead, W: Write>(mut input: R, mut output: W, persist: bool) -> Result<()> {
    info!("REPL started (persist={})", persist);

    let env = Environment::shared();
    let mut line = String::new();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let source = line.trim_end_matches(['\n', '\r']);
        if source.is_empty() {
            break;
        }

        debug!("REPL input: {}", source);

        let mut parser = Parser::new(Lexer::new(source));
        let program = parser.parse_program();

        if !parser.errors().is_empty() {
            print_parser_errors(&mut output, parser.errors())?;
            continue;
        }

        let mut interpreter = if persist {
            Interpreter::with_environment(env.clone())
        } else {
            Interpreter::new()
        };

        match interpreter.interpret(&program) {
            Ok(value) => writeln!(output, "{}", value)?,
            Err(e) => writeln!(output, "ERROR: {}", e)?,
        }
    }

    info!("REPL finished");
    Ok(())
}

fn print_parser_errors<W: Write>(output: &mut W, errors: &[ParseError]) -> Result<()> {
    write!(output, "{}", MONKEY_FACE)?;
    writeln!(output, "Woops! We ran into some monkey business here!")?;
    writeln!(output, " parser errors:")?;

    for error in errors {
        writeln!(output, "\t{}", error)?;
    }

    Ok(())
}
