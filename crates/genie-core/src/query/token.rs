//! Token types for the tag query lexer

use std::fmt;

/// A token produced by the lexer.
///
/// Tag text borrows from the original input (zero-copy). Only the six
/// structural characters get dedicated variants; the operator *words*
/// (`and`, `or`, `xor`, `not`) deliberately come through as ordinary
/// [`Token::Tag`] tokens; recognizing them is the parser's job. That is
/// why a tag literally named `and` can never be referenced through this
/// syntax; the limitation is part of the grammar, not an accident of the
/// lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// A tag literal (or an operator word, which the parser resolves)
    Tag(&'a str),
    /// `&`
    And,
    /// `|`
    Or,
    /// `^`
    Xor,
    /// `!`
    Not,
    /// `(`
    LParen,
    /// `)`
    RParen,
}

impl<'a> Token<'a> {
    /// The source text of this token.
    ///
    /// For structural tokens this is the single character they were lexed
    /// from. The parser uses this when a structural token is demoted to a
    /// literal operand (the `not &` case).
    pub fn text(&self) -> &'a str {
        match self {
            Token::Tag(text) => text,
            Token::And => "&",
            Token::Or => "|",
            Token::Xor => "^",
            Token::Not => "!",
            Token::LParen => "(",
            Token::RParen => ")",
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}
