pub mod ast;
pub mod environment;
pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod object;
pub mod parser;
pub mod repl;
pub mod token;

use ast::Program;
use error::{MonkeyError, Result};
use evaluator::Interpreter;
use lexer::Lexer;
use object::Object;
use parser::Parser;

/// Lex and parse `source`, returning the program together with every
/// diagnostic as a display string.
pub fn parse(source: &str) -> (Program, Vec<String>) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    let errors = parser.errors().iter().map(ToString::to_string).collect();

    (program, errors)
}

/// Parse and evaluate `source` in a fresh environment. Any parse error stops
/// the pipeline before evaluation.
pub fn run(source: &str) -> Result<Object> {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        return Err(MonkeyError::Parse(parser.into_errors()));
    }

    Ok(Interpreter::new().interpret(&program)?)
}
