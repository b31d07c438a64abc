/*!
Pratt parser for the Monkey language
====================================

The parser pulls tokens one at a time from a [`Lexer`], keeping the current
token plus one token of lookahead, and builds the whole [`Program`] before any
evaluation starts.

Grammar (EBNF, condensed)
-------------------------

```text
program        → statement* EOF ;
statement      → letStmt | returnStmt | exprStmt ;
letStmt        → "let" IDENT "=" expression ";"? ;
returnStmt     → "return" expression? ";"? ;
exprStmt       → expression ";"? ;
block          → "{" statement* "}" ;
expression     → prefix ( infix )* ;              (precedence climbing)
prefix         → IDENT | INT | "true" | "false"
               | ( "!" | "-" ) expression
               | "(" expression ")"
               | "if" "(" expression ")" block ( "else" block )?
               | "fn" "(" ( IDENT ( "," IDENT )* )? ")" block ;
infix          → ( "+" | "-" | "*" | "/" | "==" | "!=" | "<" | ">" ) expression
               | "(" ( expression ( "," expression )* )? ")" ;
```

Precedence, low to high: `LOWEST < EQUALS < LESSGREATER < SUM < PRODUCT <
PREFIX < CALL`. The climbing loop only folds while the lookahead binds
*strictly* tighter than the caller, which makes equal‑precedence operators
associate to the left.

Error policy
------------

Parsing never aborts. A failed production records a [`ParseError`] and
returns `None`; the statement it belonged to is dropped and the main loop
moves on to the next token, so one pass reports every defect it can find.

Logging policy
--------------

| Location                    | Level  | Purpose                          |
|-----------------------------|--------|----------------------------------|
| `Parser::new`, `parse_program` | `info` | Lifecycle milestones.         |
| statement / prefix branches | `debug`| Descent into grammar branches.   |
| error paths                 | `debug`| Context before recording.        |
*/

use crate::ast::{
    BlockStatement, Expression, Identifier, InfixOperator, PrefixOperator, Program, Statement,
};
use crate::error::ParseError;
use crate::lexer::Lexer;
use crate::token::{Token, TokenType};

use log::{debug, info};

/// Binding power of an operator, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    /// `==` `!=`
    Equals,
    /// `<` `>`
    LessGreater,
    /// `+` `-`
    Sum,
    /// `*` `/`
    Product,
    /// `-x` `!x`
    Prefix,
    /// `f(x)`
    Call,
}

impl Precedence {
    /// Infix binding power of a token kind. Kinds that cannot continue an
    /// expression bind at `Lowest`, which ends the climbing loop.
    pub const fn of(token_type: TokenType) -> Self {
        match token_type {
            TokenType::EQ | TokenType::NOT_EQ => Precedence::Equals,
            TokenType::LT | TokenType::GT => Precedence::LessGreater,
            TokenType::PLUS | TokenType::MINUS => Precedence::Sum,
            TokenType::ASTERISK | TokenType::SLASH => Precedence::Product,
            TokenType::LPAREN => Precedence::Call,
            _ => Precedence::Lowest,
        }
    }
}

/// Prefix handler chosen for the token that starts an expression.
#[derive(Debug, Clone, Copy)]
enum PrefixRule {
    Identifier,
    Integer,
    Boolean,
    Operator(PrefixOperator),
    Grouped,
    If,
    Function,
}

impl PrefixRule {
    const fn for_token(token_type: TokenType) -> Option<Self> {
        match token_type {
            TokenType::IDENT => Some(PrefixRule::Identifier),
            TokenType::INT => Some(PrefixRule::Integer),
            TokenType::TRUE | TokenType::FALSE => Some(PrefixRule::Boolean),
            TokenType::BANG => Some(PrefixRule::Operator(PrefixOperator::Bang)),
            TokenType::MINUS => Some(PrefixRule::Operator(PrefixOperator::Minus)),
            TokenType::LPAREN => Some(PrefixRule::Grouped),
            TokenType::IF => Some(PrefixRule::If),
            TokenType::FUNCTION => Some(PrefixRule::Function),
            _ => None,
        }
    }
}

/// Infix handler chosen for the token that continues an expression.
#[derive(Debug, Clone, Copy)]
enum InfixRule {
    Operator(InfixOperator),
    Call,
}

impl InfixRule {
    const fn for_token(token_type: TokenType) -> Option<Self> {
        let operator = match token_type {
            TokenType::PLUS => InfixOperator::Plus,
            TokenType::MINUS => InfixOperator::Minus,
            TokenType::ASTERISK => InfixOperator::Asterisk,
            TokenType::SLASH => InfixOperator::Slash,
            TokenType::EQ => InfixOperator::Eq,
            TokenType::NOT_EQ => InfixOperator::NotEq,
            TokenType::LT => InfixOperator::Lt,
            TokenType::GT => InfixOperator::Gt,
            TokenType::LPAREN => return Some(InfixRule::Call),
            _ => return None,
        };

        Some(InfixRule::Operator(operator))
    }
}

/// Top‑level parser pulling tokens from a lexer.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token<'a>,
    peek: Token<'a>,
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    /// Construct a new parser and prime `current` and `peek`.
    pub fn new(mut lexer: Lexer<'a>) -> Self {
        info!("Parser created");

        let current = lexer.next_token();
        let peek = lexer.next_token();

        Self {
            lexer,
            current,
            peek,
            errors: Vec::new(),
        }
    }

    // ───────────────────────── public API ─────────────────────────

    /// Parse statements until end of input. Always returns a program; check
    /// [`Parser::errors`] to see whether it is complete.
    pub fn parse_program(&mut self) -> Program {
        info!("Beginning parse phase");

        let mut program = Program::default();

        while !self.current.is(TokenType::EOF) {
            if let Some(statement) = self.parse_statement() {
                program.statements.push(statement);
            }

            self.next_token();
        }

        info!(
            "Parsed {} statement(s) with {} error(s)",
            program.statements.len(),
            self.errors.len()
        );

        program
    }

    /// Diagnostics accumulated so far, in source order.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    // ──────────────────────── statement rules ─────────────────────

    fn parse_statement(&mut self) -> Option<Statement> {
        match self.current.token_type {
            TokenType::LET => self.parse_let_statement(),
            TokenType::RETURN => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    fn parse_let_statement(&mut self) -> Option<Statement> {
        debug!("Entering let statement");

        self.expect_peek(TokenType::IDENT)?;
        let name = Identifier::new(self.current.literal);

        self.expect_peek(TokenType::ASSIGN)?;
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;

        self.skip_semicolon();

        Some(Statement::Let { name, value })
    }

    fn parse_return_statement(&mut self) -> Option<Statement> {
        debug!("Entering return statement");

        let value = if matches!(
            self.peek.token_type,
            TokenType::SEMICOLON | TokenType::RBRACE | TokenType::EOF
        ) {
            None
        } else {
            self.next_token();
            Some(self.parse_expression(Precedence::Lowest)?)
        };

        self.skip_semicolon();

        Some(Statement::Return { value })
    }

    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let expression = self.parse_expression(Precedence::Lowest)?;

        self.skip_semicolon();

        Some(Statement::Expression(expression))
    }

    /// Starts on `{`, ends on the closing `}` (or `EOF`).
    fn parse_block_statement(&mut self) -> BlockStatement {
        let mut block = BlockStatement::default();

        self.next_token();

        while !self.current.is(TokenType::RBRACE) && !self.current.is(TokenType::EOF) {
            if let Some(statement) = self.parse_statement() {
                block.statements.push(statement);
            }

            self.next_token();
        }

        block
    }

    // ─────────────────────── expression rules (Pratt) ─────────────

    fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        let Some(rule) = PrefixRule::for_token(self.current.token_type) else {
            debug!("No prefix rule for {:?}", self.current.token_type);

            self.errors
                .push(ParseError::NoPrefixParser(self.current.token_type));

            return None;
        };

        let mut left = self.parse_prefix(rule)?;

        while !self.peek.is(TokenType::SEMICOLON) && precedence < self.peek_precedence() {
            let Some(rule) = InfixRule::for_token(self.peek.token_type) else {
                return Some(left);
            };

            self.next_token();

            left = self.parse_infix(rule, left)?;
        }

        Some(left)
    }

    fn parse_prefix(&mut self, rule: PrefixRule) -> Option<Expression> {
        match rule {
            PrefixRule::Identifier => Some(Expression::Identifier(Identifier::new(
                self.current.literal,
            ))),

            PrefixRule::Integer => self.parse_integer_literal(),

            PrefixRule::Boolean => Some(Expression::BooleanLiteral(
                self.current.is(TokenType::TRUE),
            )),

            PrefixRule::Operator(operator) => {
                self.next_token();

                let right = self.parse_expression(Precedence::Prefix)?;

                Some(Expression::Prefix {
                    operator,
                    right: Box::new(right),
                })
            }

            PrefixRule::Grouped => {
                self.next_token();

                let expression = self.parse_expression(Precedence::Lowest)?;

                self.expect_peek(TokenType::RPAREN)?;

                Some(expression)
            }

            PrefixRule::If => self.parse_if_expression(),

            PrefixRule::Function => self.parse_function_literal(),
        }
    }

    fn parse_infix(&mut self, rule: InfixRule, left: Expression) -> Option<Expression> {
        match rule {
            InfixRule::Operator(operator) => {
                let precedence = self.current_precedence();

                self.next_token();

                let right = self.parse_expression(precedence)?;

                Some(Expression::Infix {
                    left: Box::new(left),
                    operator,
                    right: Box::new(right),
                })
            }

            InfixRule::Call => {
                let arguments = self.parse_call_arguments()?;

                Some(Expression::Call {
                    function: Box::new(left),
                    arguments,
                })
            }
        }
    }

    fn parse_integer_literal(&mut self) -> Option<Expression> {
        match self.current.literal.parse::<i64>() {
            Ok(value) => Some(Expression::IntegerLiteral(value)),

            Err(e) => {
                debug!("Integer literal {} rejected: {}", self.current.literal, e);

                self.errors
                    .push(ParseError::InvalidInteger(self.current.literal.to_string()));

                None
            }
        }
    }

    fn parse_if_expression(&mut self) -> Option<Expression> {
        debug!("Entering if expression");

        self.expect_peek(TokenType::LPAREN)?;
        self.next_token();

        let condition = self.parse_expression(Precedence::Lowest)?;

        self.expect_peek(TokenType::RPAREN)?;
        self.expect_peek(TokenType::LBRACE)?;

        let consequence = self.parse_block_statement();

        let alternative = if self.peek.is(TokenType::ELSE) {
            self.next_token();
            self.expect_peek(TokenType::LBRACE)?;

            Some(self.parse_block_statement())
        } else {
            None
        };

        Some(Expression::If {
            condition: Box::new(condition),
            consequence,
            alternative,
        })
    }

    fn parse_function_literal(&mut self) -> Option<Expression> {
        debug!("Entering function literal");

        self.expect_peek(TokenType::LPAREN)?;

        let parameters = self.parse_function_parameters()?;

        self.expect_peek(TokenType::LBRACE)?;

        let body = self.parse_block_statement();

        Some(Expression::FunctionLiteral { parameters, body })
    }

    /// Starts on `(`, ends on `)`.
    fn parse_function_parameters(&mut self) -> Option<Vec<Identifier>> {
        let mut parameters: Vec<Identifier> = Vec::new();

        if self.peek.is(TokenType::RPAREN) {
            self.next_token();
            return Some(parameters);
        }

        self.expect_peek(TokenType::IDENT)?;
        parameters.push(Identifier::new(self.current.literal));

        while self.peek.is(TokenType::COMMA) {
            self.next_token();
            self.expect_peek(TokenType::IDENT)?;
            parameters.push(Identifier::new(self.current.literal));
        }

        self.expect_peek(TokenType::RPAREN)?;

        Some(parameters)
    }

    /// Starts on `(`, ends on `)`.
    fn parse_call_arguments(&mut self) -> Option<Vec<Expression>> {
        let mut arguments: Vec<Expression> = Vec::new();

        if self.peek.is(TokenType::RPAREN) {
            self.next_token();
            return Some(arguments);
        }

        self.next_token();
        arguments.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek.is(TokenType::COMMA) {
            self.next_token();
            self.next_token();
            arguments.push(self.parse_expression(Precedence::Lowest)?);
        }

        self.expect_peek(TokenType::RPAREN)?;

        Some(arguments)
    }

    // ────────────────────── utility helpers ───────────────────────

    #[inline(always)]
    fn next_token(&mut self) {
        self.current = self.peek;
        self.peek = self.lexer.next_token();
    }

    /// Advance onto the lookahead iff it has the expected kind; otherwise
    /// record a peek error and fail the production.
    fn expect_peek(&mut self, token_type: TokenType) -> Option<()> {
        if self.peek.is(token_type) {
            self.next_token();

            return Some(());
        }

        self.errors
            .push(ParseError::unexpected(token_type, self.peek.token_type));

        None
    }

    #[inline(always)]
    fn skip_semicolon(&mut self) {
        if self.peek.is(TokenType::SEMICOLON) {
            self.next_token();
        }
    }

    #[inline(always)]
    fn peek_precedence(&self) -> Precedence {
        Precedence::of(self.peek.token_type)
    }

    #[inline(always)]
    fn current_precedence(&self) -> Precedence {
        Precedence::of(self.current.token_type)
    }
}
