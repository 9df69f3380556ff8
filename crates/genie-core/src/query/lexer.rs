//! Lexer for the tag query language
//!
//! Tokenizes a query string into a flat stream of tokens. The lexer is
//! infallible: any input, including unbalanced parentheses or an empty
//! string, produces a (possibly empty) token stream.
//!
//! # Example
//!
//! ```rust
//! use genie_core::query::{Lexer, Token};
//!
//! let tokens: Vec<_> = Lexer::new("work&(urgent|!done)").collect();
//! assert_eq!(tokens[0], Token::Tag("work"));
//! assert_eq!(tokens[1], Token::And);
//! assert_eq!(tokens[2], Token::LParen);
//! ```

use super::token::Token;

/// A lexer for tag query strings.
///
/// Implements `Iterator` over [`Token`]s. Tokens borrow from the input.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    /// The input string being tokenized
    input: &'a str,
    /// Current byte position in the input
    position: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Get the remaining input (for debugging).
    pub fn remaining(&self) -> &'a str {
        &self.input[self.position..]
    }

    /// Peek at the next character without consuming it.
    fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Advance by one character, returning it.
    fn advance_char(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position += c.len_utf8();
        Some(c)
    }

    /// Map a structural character to its fixed token.
    fn structural(c: char) -> Option<Token<'a>> {
        match c {
            '(' => Some(Token::LParen),
            ')' => Some(Token::RParen),
            '&' => Some(Token::And),
            '|' => Some(Token::Or),
            '^' => Some(Token::Xor),
            '!' => Some(Token::Not),
            _ => None,
        }
    }

    /// Scan a tag literal: everything up to whitespace or a structural
    /// character. Operator words (`and`, `or`, ...) are not distinguished
    /// here; they surface as ordinary tags and the parser resolves them.
    fn scan_literal(&mut self) -> Token<'a> {
        let start = self.position;
        while let Some(c) = self.peek() {
            if c.is_whitespace() || Self::structural(c).is_some() {
                break;
            }
            self.advance_char();
        }
        Token::Tag(&self.input[start..self.position])
    }

    fn next_token(&mut self) -> Option<Token<'a>> {
        // Whitespace only separates literals; it is never itself a token.
        while self.peek().is_some_and(|c| c.is_whitespace()) {
            self.advance_char();
        }

        let c = self.peek()?;
        if let Some(token) = Self::structural(c) {
            self.advance_char();
            return Some(token);
        }

        Some(self.scan_literal())
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}
