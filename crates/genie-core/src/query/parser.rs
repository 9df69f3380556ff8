//! Parser for the tag query language
//!
//! Converts the token stream into an expression tree.
//!
//! # Grammar
//!
//! ```text
//! group   ::= element* (terminated by ')' or end of input)
//! element ::= '(' group ')'
//!           | ("not" | '!') ( '(' group ')' | TOKEN )
//!           | operator
//!           | TAG
//! operator ::= "and" | '&' | "or" | '|' | "xor" | '^'
//! ```
//!
//! Operands and operators collected at one nesting level are folded
//! **left to right with no precedence**: `a or b and c` parses as
//! `(a or b) and c`. This is the documented grammar, not an oversight;
//! downstream users rely on the fold order, so no precedence climbing.
//!
//! The parser is deliberately permissive. Unmatched `(` opens a group that
//! runs to end of input; unmatched `)` just ends the current group early;
//! dangling operators and empty parenthesized groups contribute nothing.
//! The only error is [`UnparsableQuery`]: no expression could be formed at
//! all.
//!
//! # Example
//!
//! ```rust
//! use genie_core::query::{BinaryOp, Expr, Parser};
//!
//! let expr = Parser::parse_str("work and (urgent or today)").unwrap();
//! assert_eq!(
//!     expr,
//!     Expr::binary(
//!         BinaryOp::And,
//!         Expr::tag("work"),
//!         Expr::binary(BinaryOp::Or, Expr::tag("urgent"), Expr::tag("today")),
//!     )
//! );
//! ```

use phf::phf_map;
use thiserror::Error;

use super::expr::{BinaryOp, Expr};
use super::lexer::Lexer;
use super::token::Token;

/// The single error the query engine surfaces: the input contained no
/// parseable expression (empty string, or structural tokens with no tag
/// operands). All other malformed input degrades to a partial parse.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("no expression could be parsed from the query")]
pub struct UnparsableQuery;

/// Operator words, matched case-sensitively against tag literal text.
/// The lexer does not special-case these; the comparison here is the only
/// place word operators are recognized.
static OPERATOR_WORDS: phf::Map<&'static str, BinaryOp> = phf_map! {
    "and" => BinaryOp::And,
    "or" => BinaryOp::Or,
    "xor" => BinaryOp::Xor,
};

/// A parser over a lexed token sequence.
///
/// One recursive call level per parenthesis nesting depth, with a cursor
/// into the token vector shared across levels.
pub struct Parser<'a> {
    tokens: Vec<Token<'a>>,
    position: usize,
}

impl<'a> Parser<'a> {
    /// Create a parser from an already-lexed token sequence.
    pub fn new(tokens: Vec<Token<'a>>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Lex and parse a query string.
    pub fn parse_str(input: &'a str) -> Result<Expr<'a>, UnparsableQuery> {
        Parser::new(Lexer::new(input).collect()).parse()
    }

    /// Parse the token sequence into an expression.
    pub fn parse(mut self) -> Result<Expr<'a>, UnparsableQuery> {
        self.parse_group().ok_or(UnparsableQuery)
    }

    fn peek(&self) -> Option<Token<'a>> {
        self.tokens.get(self.position).copied()
    }

    fn next(&mut self) -> Option<Token<'a>> {
        let token = self.peek();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    /// Resolve a token to a binary operator, if it is one. Word operators
    /// require an exact, case-sensitive match on the literal text.
    fn binary_op(token: Token<'a>) -> Option<BinaryOp> {
        match token {
            Token::And => Some(BinaryOp::And),
            Token::Or => Some(BinaryOp::Or),
            Token::Xor => Some(BinaryOp::Xor),
            Token::Tag(text) => OPERATOR_WORDS.get(text).copied(),
            _ => None,
        }
    }

    fn is_not(token: Token<'a>) -> bool {
        matches!(token, Token::Not | Token::Tag("not"))
    }

    /// Parse one nesting level, consuming up to and including the matching
    /// `)` (or to end of input). Returns `None` when the level produced no
    /// operands.
    fn parse_group(&mut self) -> Option<Expr<'a>> {
        let mut operands: Vec<Expr<'a>> = Vec::new();
        let mut operators: Vec<BinaryOp> = Vec::new();

        while let Some(token) = self.next() {
            if token == Token::LParen {
                if let Some(inner) = self.parse_group() {
                    operands.push(inner);
                }
            } else if token == Token::RParen {
                break;
            } else if Self::is_not(token) {
                match self.next() {
                    Some(Token::LParen) => {
                        // Empty parens after `not` contribute nothing,
                        // same as an empty group on its own.
                        if let Some(inner) = self.parse_group() {
                            operands.push(Expr::not(inner));
                        }
                    }
                    // Whatever follows, operator keyword included, is
                    // demoted to a literal operand.
                    Some(other) => operands.push(Expr::not(Expr::tag(other.text()))),
                    // A dangling trailing `not` contributes nothing.
                    None => {}
                }
            } else if let Some(op) = Self::binary_op(token) {
                operators.push(op);
            } else if let Token::Tag(name) = token {
                operands.push(Expr::tag(name));
            }
        }

        // Left-to-right fold, no precedence. Pairing by rank drops surplus
        // operands (missing operator) and surplus operators (missing
        // operand) rather than erroring.
        let mut rest = operands.into_iter();
        let mut result = rest.next()?;
        for (op, operand) in operators.into_iter().zip(rest) {
            result = Expr::binary(op, result, operand);
        }
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(input: &str) -> Result<Expr<'_>, UnparsableQuery> {
        Parser::parse_str(input)
    }

    #[test]
    fn test_single_tag() {
        assert_eq!(parse("work"), Ok(Expr::tag("work")));
    }

    #[test]
    fn test_empty_input_is_unparsable() {
        assert_eq!(parse(""), Err(UnparsableQuery));
        assert_eq!(parse("   "), Err(UnparsableQuery));
    }

    #[test]
    fn test_operators_without_operands_are_unparsable() {
        assert_eq!(parse("and or"), Err(UnparsableQuery));
        assert_eq!(parse("& | ^"), Err(UnparsableQuery));
        assert_eq!(parse("( )"), Err(UnparsableQuery));
    }

    #[test]
    fn test_binary_operators() {
        assert_eq!(
            parse("a and b"),
            Ok(Expr::binary(BinaryOp::And, Expr::tag("a"), Expr::tag("b")))
        );
        assert_eq!(
            parse("a or b"),
            Ok(Expr::binary(BinaryOp::Or, Expr::tag("a"), Expr::tag("b")))
        );
        assert_eq!(
            parse("a xor b"),
            Ok(Expr::binary(BinaryOp::Xor, Expr::tag("a"), Expr::tag("b")))
        );
    }

    #[test]
    fn test_word_and_symbol_forms_parse_identically() {
        assert_eq!(parse("a and b"), parse("a & b"));
        assert_eq!(parse("a or b"), parse("a | b"));
        assert_eq!(parse("a xor b"), parse("a ^ b"));
        assert_eq!(parse("not a"), parse("! a"));
    }

    #[test]
    fn test_left_to_right_no_precedence() {
        // `a or b and c` is `(a or b) and c`, never `a or (b and c)`.
        assert_eq!(
            parse("a or b and c"),
            Ok(Expr::binary(
                BinaryOp::And,
                Expr::binary(BinaryOp::Or, Expr::tag("a"), Expr::tag("b")),
                Expr::tag("c"),
            ))
        );
    }

    #[test]
    fn test_parentheses_override_fold_order() {
        assert_eq!(
            parse("a or (b and c)"),
            Ok(Expr::binary(
                BinaryOp::Or,
                Expr::tag("a"),
                Expr::binary(BinaryOp::And, Expr::tag("b"), Expr::tag("c")),
            ))
        );
    }

    #[test]
    fn test_nested_parentheses() {
        assert_eq!(
            parse("((a))"),
            Ok(Expr::tag("a"))
        );
        assert_eq!(
            parse("(a or (b xor c)) and d"),
            Ok(Expr::binary(
                BinaryOp::And,
                Expr::binary(
                    BinaryOp::Or,
                    Expr::tag("a"),
                    Expr::binary(BinaryOp::Xor, Expr::tag("b"), Expr::tag("c")),
                ),
                Expr::tag("d"),
            ))
        );
    }

    #[test]
    fn test_not_wraps_next_token() {
        assert_eq!(parse("not a"), Ok(Expr::not(Expr::tag("a"))));
        assert_eq!(parse("!a"), Ok(Expr::not(Expr::tag("a"))));
    }

    #[test]
    fn test_not_parenthesized_group() {
        assert_eq!(
            parse("not (a or b)"),
            Ok(Expr::not(Expr::binary(
                BinaryOp::Or,
                Expr::tag("a"),
                Expr::tag("b"),
            )))
        );
    }

    #[test]
    fn test_not_demotes_operator_keywords_to_literals() {
        // The token after `not` is taken as a literal even if it reads as
        // an operator.
        assert_eq!(parse("not and"), Ok(Expr::not(Expr::tag("and"))));
        assert_eq!(parse("not &"), Ok(Expr::not(Expr::tag("&"))));
    }

    #[test]
    fn test_double_not_demotes_second_not() {
        // `not` takes the next single token literally, so a second bare
        // `not` becomes a tag name; double negation needs parentheses.
        assert_eq!(parse("not not a"), Ok(Expr::not(Expr::tag("not"))));
        assert_eq!(
            parse("not (not a)"),
            Ok(Expr::not(Expr::not(Expr::tag("a"))))
        );
    }

    #[test]
    fn test_dangling_not_degrades() {
        assert_eq!(parse("a and not"), Ok(Expr::tag("a")));
        assert_eq!(parse("not"), Err(UnparsableQuery));
    }

    #[test]
    fn test_not_of_empty_group_contributes_nothing() {
        assert_eq!(parse("a or not ()"), Ok(Expr::tag("a")));
    }

    #[test]
    fn test_unmatched_open_paren_runs_to_end() {
        assert_eq!(
            parse("(a and b"),
            Ok(Expr::binary(BinaryOp::And, Expr::tag("a"), Expr::tag("b")))
        );
    }

    #[test]
    fn test_unmatched_close_paren_ends_level_early() {
        // The `)` terminates the top level; the trailing tokens are never
        // reached. A lone operand before it still parses.
        assert_eq!(parse("a ) and b"), Ok(Expr::tag("a")));
    }

    #[test]
    fn test_empty_parens_contribute_nothing() {
        assert_eq!(parse("a and () or b"), Ok(parse("a and or b").unwrap()));
    }

    #[test]
    fn test_surplus_operand_is_dropped() {
        // Two operands, no operator: pairing stops after the first.
        assert_eq!(parse("a b"), Ok(Expr::tag("a")));
    }

    #[test]
    fn test_surplus_operator_is_dropped() {
        assert_eq!(
            parse("a and b or"),
            Ok(Expr::binary(BinaryOp::And, Expr::tag("a"), Expr::tag("b")))
        );
    }

    #[test]
    fn test_operator_words_are_case_sensitive() {
        // "AND" is not an operator; it becomes an ordinary operand, and
        // with no operator present the surplus operands are dropped.
        assert_eq!(parse("a AND b"), Ok(Expr::tag("a")));
    }

    #[test]
    fn test_parse_is_idempotent() {
        let input = "work and (urgent or today) xor !done";
        assert_eq!(parse(input), parse(input));
    }
}
