//! Module `lexer` implements a one‑pass, pull‑based lexer for the Monkey language.
//!
//! It turns a source string into `Token<'a>`s on demand, skipping whitespace.
//! Once the input is exhausted every further call to [`Lexer::next_token`]
//! returns `EOF`; the [`Iterator`] view yields that `EOF` exactly once and
//! then stops, so it can be collected or chained safely.
//!
//! # Token Recognition
//!
//! - Single‑character tokens: `*`, `+`, `-`, `/`, `\`, `;`, `(`, `)`, `,`, `{`, `}`.
//! - One‑byte lookahead operators: `==`, `!=`, `<=`, `>=` (otherwise `=`, `!`, `<`, `>`).
//! - Integers: a maximal run of ASCII digits. There is no sign; `-5` is a
//!   prefix expression built by the parser.
//! - Identifiers/keywords: a maximal run of Unicode letters and `_`, resolved
//!   via a perfect‑hash `KEYWORDS` map. Digits end an identifier.
//! - Anything else becomes an `ILLEGAL` token carrying the offending character.
//!   The lexer never fails; the parser rejects `ILLEGAL` later.
//!
//! # Example
//!
//! ```rust
//! use monkey_interpreter::lexer::Lexer;
//!
//! for token in Lexer::new("let five = 5;") {
//!     println!("{}", token);
//! }
//! ```

use crate::token::{Token, TokenType};
use log::{debug, info};
use phf::phf_map;
use std::iter::FusedIterator;

// ─────────────────────────────────────────────────────────────────────────────
// Static keyword map (compile‑time perfect hash)
// ─────────────────────────────────────────────────────────────────────────────

static KEYWORDS: phf::Map<&'static str, TokenType> = phf_map! {
    "fn"     => TokenType::FUNCTION,
    "let"    => TokenType::LET,
    "true"   => TokenType::TRUE,
    "false"  => TokenType::FALSE,
    "if"     => TokenType::IF,
    "else"   => TokenType::ELSE,
    "return" => TokenType::RETURN,
};

/// Resolve a word against the keyword table, falling back to `IDENT`.
pub fn lookup_ident(word: &str) -> TokenType {
    KEYWORDS.get(word).copied().unwrap_or(TokenType::IDENT)
}

#[inline(always)]
fn is_letter(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

/// A single pass lexer over a borrowed source string. The lifetime `'a` ties
/// every emitted token’s `literal` back to that string.
pub struct Lexer<'a> {
    src: &'a str,
    start: usize,  // index of the first byte of the current lexeme
    curr: usize,   // index one past the last byte examined
    finished: bool, // iterator already yielded EOF
}

impl<'a> Lexer<'a> {
    /// Create a new lexer over `src`.
    #[inline]
    pub fn new(src: &'a str) -> Self {
        info!("Lexer created over {} bytes", src.len());

        Self {
            src,
            start: 0,
            curr: 0,
            finished: false,
        }
    }

    // ───────────────────────────── primitive helpers ────────────────────────

    #[inline(always)]
    fn is_at_end(&self) -> bool {
        self.curr >= self.src.len()
    }

    /// Advance one byte and return it. Callers guard with [`is_at_end`].
    #[inline(always)]
    fn advance(&mut self) -> u8 {
        let b = self.src.as_bytes()[self.curr];
        self.curr += 1;
        b
    }

    /// Peek at the current byte without consuming it. Returns `0` past EOF.
    #[inline(always)]
    fn peek(&self) -> u8 {
        if self.is_at_end() {
            0
        } else {
            self.src.as_bytes()[self.curr]
        }
    }

    /// Conditionally consume a byte **iff** it matches `expected`.
    #[inline(always)]
    fn match_byte(&mut self, expected: u8) -> bool {
        if self.peek() == expected && !self.is_at_end() {
            self.advance();
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), b' ' | b'\t' | b'\n' | b'\r') && !self.is_at_end() {
            self.advance();
        }
    }

    /// Decode the character starting at byte `at`, which must be a char
    /// boundary.
    #[inline(always)]
    fn char_at(&self, at: usize) -> Option<char> {
        self.src[at..].chars().next()
    }

    #[inline(always)]
    fn lexeme(&self) -> &'a str {
        &self.src[self.start..self.curr]
    }

    // ───────────────────────────── core lexing ─────────────────────────────

    /// Produce the next token. After the input is exhausted this keeps
    /// returning `EOF`.
    pub fn next_token(&mut self) -> Token<'a> {
        self.skip_whitespace();

        if self.is_at_end() {
            return Token::eof();
        }

        self.start = self.curr;
        let b = self.advance();

        let token_type = match b {
            // ── single‑character punctuators ──────────────────────────────
            b'*' => TokenType::ASTERISK,
            b'+' => TokenType::PLUS,
            b'-' => TokenType::MINUS,
            b'/' => TokenType::SLASH,
            b'\\' => TokenType::BACKSLASH,
            b';' => TokenType::SEMICOLON,
            b'(' => TokenType::LPAREN,
            b')' => TokenType::RPAREN,
            b',' => TokenType::COMMA,
            b'{' => TokenType::LBRACE,
            b'}' => TokenType::RBRACE,

            // ── two‑character operators (==, !=, <=, >=) ─────────────────
            b'=' => {
                if self.match_byte(b'=') {
                    TokenType::EQ
                } else {
                    TokenType::ASSIGN
                }
            }

            b'!' => {
                if self.match_byte(b'=') {
                    TokenType::NOT_EQ
                } else {
                    TokenType::BANG
                }
            }

            b'<' => {
                if self.match_byte(b'=') {
                    TokenType::LT_EQ
                } else {
                    TokenType::LT
                }
            }

            b'>' => {
                if self.match_byte(b'=') {
                    TokenType::GT_EQ
                } else {
                    TokenType::GT
                }
            }

            b'0'..=b'9' => self.read_number(),

            _ if self.char_at(self.start).is_some_and(is_letter) => self.read_identifier(),

            // ── unexpected character ─────────────────────────────────────
            _ => {
                // Keep the literal on a char boundary for multi‑byte input.
                while !self.is_at_end() && !self.src.is_char_boundary(self.curr) {
                    self.curr += 1;
                }

                debug!("Illegal character {:?}", self.lexeme());

                TokenType::ILLEGAL
            }
        };

        Token::new(token_type, self.lexeme())
    }

    fn read_number(&mut self) -> TokenType {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        TokenType::INT
    }

    /// Starts on the first letter of the word, whatever its UTF‑8 width.
    fn read_identifier(&mut self) -> TokenType {
        self.curr = self.start;

        while let Some(c) = self.char_at(self.curr).filter(|&c| is_letter(c)) {
            self.curr += c.len_utf8();
        }

        lookup_ident(self.lexeme())
    }
}

// ───────────────────────── Iterator implementation ─────────────────────────

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let token = self.next_token();

        if token.is(TokenType::EOF) {
            self.finished = true;
        }

        Some(token)
    }
}

impl<'a> FusedIterator for Lexer<'a> {}
