//! Tag query language: lexer, parser, and evaluator
//!
//! This module turns a raw query string like `work and (urgent or !done)`
//! into a set of matching paths. The pipeline is strictly string to
//! tokens to expression tree to path set, with fresh allocations per
//! query and nothing cached in between.

mod eval;
mod expr;
mod lexer;
mod parser;
mod token;

pub use eval::evaluate;
pub use expr::{BinaryOp, Expr};
pub use lexer::Lexer;
pub use parser::{Parser, UnparsableQuery};
pub use token::Token;

use crate::store::TagIndex;
use std::collections::HashSet;

/// Parse and evaluate a query string against a tag index in one step.
///
/// Fails with [`SearchError::Unparsable`] when the input contains no
/// expression at all, and with [`SearchError::Store`] when the index itself
/// errors. Everything else (unknown tags, unbalanced parentheses, dangling
/// operators) degrades to an empty or partial result set.
pub fn search<I: TagIndex>(input: &str, index: &I) -> Result<HashSet<String>, SearchError> {
    let expr = Parser::parse_str(input)?;
    Ok(evaluate(&expr, index)?)
}

/// Errors from the combined parse-and-evaluate entry point.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The query contained no parseable expression.
    #[error(transparent)]
    Unparsable(#[from] UnparsableQuery),

    /// The tag index failed while resolving the expression.
    #[error(transparent)]
    Store(#[from] crate::store::StoreError),
}
