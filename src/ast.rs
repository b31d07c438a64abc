//! **Abstract syntax tree** for Monkey programs.
//!
//! Every node renders through [`fmt::Display`] into a fully parenthesised
//! canonical form, e.g. `a + b * c` becomes `(a + (b * c))`. That text is a
//! structural fingerprint for tests and the `parse` command; it is not meant
//! to be parsed again.

use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

/// Capability shared by every syntax node: the literal text of the token the
/// node starts with.
///
/// Integer literals keep only their parsed value, so their text comes back
/// in normalised decimal form (`007` reports `7`).
pub trait Node {
    fn token_literal(&self) -> Cow<'_, str>;
}

/// The parse root: an ordered list of top‑level statements.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Program {
    pub statements: Vec<Statement>,
}

/// A braced `{ … }` sequence of statements.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BlockStatement {
    pub statements: Vec<Statement>,
}

/// A bare name, used both as an expression and as a binding target.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Statement {
    /// `let <name> = <value>;`
    Let { name: Identifier, value: Expression },

    /// `return <value>;` with the value optional.
    Return { value: Option<Expression> },

    Expression(Expression),

    Block(BlockStatement),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expression {
    Identifier(Identifier),

    /// Parsed value; leading zeros in the source are not kept.
    IntegerLiteral(i64),

    BooleanLiteral(bool),

    /// `!x` or `-x`
    Prefix {
        operator: PrefixOperator,
        right: Box<Expression>,
    },

    /// `left <op> right`
    Infix {
        left: Box<Expression>,
        operator: InfixOperator,
        right: Box<Expression>,
    },

    If {
        condition: Box<Expression>,
        consequence: BlockStatement,
        alternative: Option<BlockStatement>,
    },

    FunctionLiteral {
        parameters: Vec<Identifier>,
        body: BlockStatement,
    },

    /// Function application: `<function>(<arguments>)`.
    Call {
        function: Box<Expression>,
        arguments: Vec<Expression>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PrefixOperator {
    Bang,
    Minus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum InfixOperator {
    Plus,
    Minus,
    Asterisk,
    Slash,
    Lt,
    Gt,
    Eq,
    NotEq,
}

impl PrefixOperator {
    pub const fn as_str(self) -> &'static str {
        match self {
            PrefixOperator::Bang => "!",
            PrefixOperator::Minus => "-",
        }
    }
}

impl InfixOperator {
    pub const fn as_str(self) -> &'static str {
        match self {
            InfixOperator::Plus => "+",
            InfixOperator::Minus => "-",
            InfixOperator::Asterisk => "*",
            InfixOperator::Slash => "/",
            InfixOperator::Lt => "<",
            InfixOperator::Gt => ">",
            InfixOperator::Eq => "==",
            InfixOperator::NotEq => "!=",
        }
    }
}

// ───────────────────────────── token literals ─────────────────────────────

impl Node for Program {
    fn token_literal(&self) -> Cow<'_, str> {
        match self.statements.first() {
            Some(statement) => statement.token_literal(),
            None => Cow::Borrowed(""),
        }
    }
}

impl Node for BlockStatement {
    fn token_literal(&self) -> Cow<'_, str> {
        Cow::Borrowed("{")
    }
}

impl Node for Identifier {
    fn token_literal(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }
}

impl Node for Statement {
    fn token_literal(&self) -> Cow<'_, str> {
        match self {
            Statement::Let { .. } => Cow::Borrowed("let"),
            Statement::Return { .. } => Cow::Borrowed("return"),
            Statement::Expression(expression) => expression.token_literal(),
            Statement::Block(block) => block.token_literal(),
        }
    }
}

impl Node for Expression {
    fn token_literal(&self) -> Cow<'_, str> {
        match self {
            Expression::Identifier(ident) => ident.token_literal(),
            Expression::IntegerLiteral(value) => Cow::Owned(value.to_string()),
            Expression::BooleanLiteral(true) => Cow::Borrowed("true"),
            Expression::BooleanLiteral(false) => Cow::Borrowed("false"),
            Expression::Prefix { operator, .. } => Cow::Borrowed(operator.as_str()),
            Expression::Infix { operator, .. } => Cow::Borrowed(operator.as_str()),
            Expression::If { .. } => Cow::Borrowed("if"),
            Expression::FunctionLiteral { .. } => Cow::Borrowed("fn"),
            Expression::Call { .. } => Cow::Borrowed("("),
        }
    }
}

// ───────────────────────────── canonical form ─────────────────────────────

/// Write `items` separated by `", "`.
fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{}", statement)?;
        }
        Ok(())
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{}", statement)?;
        }
        Ok(())
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let { name, value } => write!(f, "let {} = {};", name, value),
            Statement::Return { value: Some(value) } => write!(f, "return {};", value),
            Statement::Return { value: None } => f.write_str("return;"),
            Statement::Expression(expression) => write!(f, "{}", expression),
            Statement::Block(block) => write!(f, "{}", block),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(ident) => write!(f, "{}", ident),

            Expression::IntegerLiteral(value) => write!(f, "{}", value),

            Expression::BooleanLiteral(value) => write!(f, "{}", value),

            Expression::Prefix { operator, right } => write!(f, "({}{})", operator, right),

            Expression::Infix {
                left,
                operator,
                right,
            } => write!(f, "({} {} {})", left, operator, right),

            Expression::If {
                condition,
                consequence,
                alternative,
            } => {
                write!(f, "if{} {}", condition, consequence)?;

                if let Some(alternative) = alternative {
                    write!(f, " else {}", alternative)?;
                }

                Ok(())
            }

            Expression::FunctionLiteral { parameters, body } => {
                f.write_str("fn(")?;
                write_list(f, parameters)?;
                write!(f, ") {}", body)
            }

            Expression::Call {
                function,
                arguments,
            } => {
                write!(f, "{}(", function)?;
                write_list(f, arguments)?;
                f.write_str(")")
            }
        }
    }
}
