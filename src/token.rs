use log::debug;
use serde::Serialize;
use std::fmt;

/// The closed set of token kinds recognised by the Monkey lexer.
///
/// Keyword and punctuation kinds carry no data; the text that produced the
/// token lives in [`Token::literal`].
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenType {
    /// A character the lexer does not understand
    ILLEGAL,

    /// End‑of‑input marker
    EOF,

    /// A run of decimal digits
    INT,

    /// A user‑defined name
    IDENT,

    /// ','
    COMMA,

    /// ';'
    SEMICOLON,

    /// '('
    LPAREN,

    /// ')'
    RPAREN,

    /// '{'
    LBRACE,

    /// '}'
    RBRACE,

    /// '='
    ASSIGN,

    /// '+'
    PLUS,

    /// '-'
    MINUS,

    /// '!'
    BANG,

    /// '*'
    ASTERISK,

    /// '/'
    SLASH,

    /// '\'
    BACKSLASH,

    /// '=='
    EQ,

    /// '!='
    NOT_EQ,

    /// '<'
    LT,

    /// '>'
    GT,

    /// '<='
    LT_EQ,

    /// '>='
    GT_EQ,

    /// 'fn'
    FUNCTION,

    /// 'let'
    LET,

    /// 'return'
    RETURN,

    /// 'true'
    TRUE,

    /// 'false'
    FALSE,

    /// 'if'
    IF,

    /// 'else'
    ELSE,
}

impl TokenType {
    /// Text used for this kind in diagnostics: the symbol for punctuation and
    /// operators, the upper‑case class name for everything else.
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenType::ILLEGAL => "ILLEGAL",
            TokenType::EOF => "EOF",
            TokenType::INT => "INT",
            TokenType::IDENT => "IDENT",
            TokenType::COMMA => ",",
            TokenType::SEMICOLON => ";",
            TokenType::LPAREN => "(",
            TokenType::RPAREN => ")",
            TokenType::LBRACE => "{",
            TokenType::RBRACE => "}",
            TokenType::ASSIGN => "=",
            TokenType::PLUS => "+",
            TokenType::MINUS => "-",
            TokenType::BANG => "!",
            TokenType::ASTERISK => "*",
            TokenType::SLASH => "/",
            TokenType::BACKSLASH => "\\",
            TokenType::EQ => "==",
            TokenType::NOT_EQ => "!=",
            TokenType::LT => "<",
            TokenType::GT => ">",
            TokenType::LT_EQ => "<=",
            TokenType::GT_EQ => ">=",
            TokenType::FUNCTION => "FUNCTION",
            TokenType::LET => "LET",
            TokenType::RETURN => "RETURN",
            TokenType::TRUE => "TRUE",
            TokenType::FALSE => "FALSE",
            TokenType::IF => "IF",
            TokenType::ELSE => "ELSE",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scanned token: its kind plus the exact slice of source that produced it.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Token<'a> {
    /// The category of this token.
    pub token_type: TokenType,

    /// The substring of the source this token was read from.
    /// Empty for `EOF`.
    pub literal: &'a str,
}

impl<'a> Token<'a> {
    /// Create a new Token with the given type and literal.
    pub fn new(token_type: TokenType, literal: &'a str) -> Self {
        debug!("Creating new token: type={:?}, literal={}", token_type, literal);

        Self {
            token_type,
            literal,
        }
    }

    /// The end‑of‑input token.
    pub const fn eof() -> Self {
        Self {
            token_type: TokenType::EOF,
            literal: "",
        }
    }

    #[inline(always)]
    pub fn is(&self, token_type: TokenType) -> bool {
        self.token_type == token_type
    }
}

impl<'a> fmt::Display for Token<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Variant name, not the diagnostic symbol, so `tokenize` output is
        // unambiguous for punctuation.
        let variant: &'static str = match self.token_type {
            TokenType::ILLEGAL => "ILLEGAL",
            TokenType::EOF => "EOF",
            TokenType::INT => "INT",
            TokenType::IDENT => "IDENT",
            TokenType::COMMA => "COMMA",
            TokenType::SEMICOLON => "SEMICOLON",
            TokenType::LPAREN => "LPAREN",
            TokenType::RPAREN => "RPAREN",
            TokenType::LBRACE => "LBRACE",
            TokenType::RBRACE => "RBRACE",
            TokenType::ASSIGN => "ASSIGN",
            TokenType::PLUS => "PLUS",
            TokenType::MINUS => "MINUS",
            TokenType::BANG => "BANG",
            TokenType::ASTERISK => "ASTERISK",
            TokenType::SLASH => "SLASH",
            TokenType::BACKSLASH => "BACKSLASH",
            TokenType::EQ => "EQ",
            TokenType::NOT_EQ => "NOT_EQ",
            TokenType::LT => "LT",
            TokenType::GT => "GT",
            TokenType::LT_EQ => "LT_EQ",
            TokenType::GT_EQ => "GT_EQ",
            TokenType::FUNCTION => "FUNCTION",
            TokenType::LET => "LET",
            TokenType::RETURN => "RETURN",
            TokenType::TRUE => "TRUE",
            TokenType::FALSE => "FALSE",
            TokenType::IF => "IF",
            TokenType::ELSE => "ELSE",
        };

        write!(f, "{} {}", variant, self.literal)
    }
}
