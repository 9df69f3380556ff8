//! Evaluator for parsed tag queries
//!
//! Walks the expression tree, resolving tag leaves through a [`TagIndex`]
//! and combining the resulting path sets with set algebra.

use std::collections::HashSet;

use super::expr::{BinaryOp, Expr};
use crate::store::{StoreResult, TagIndex};

type PathSet = HashSet<String>;

/// Evaluate an expression against a tag index, producing the set of
/// matching canonical paths.
///
/// Pure structural recursion; the tree has no cycles by construction.
/// Lookups are not cached: a tag referenced twice in one expression hits
/// the index twice, which is acceptable for cheap equality queries.
/// A tag absent from the index yields an empty set, not an error.
pub fn evaluate<I: TagIndex + ?Sized>(expr: &Expr<'_>, index: &I) -> StoreResult<HashSet<String>> {
    match expr {
        Expr::Tag(name) => index.paths_with_tag(name),
        Expr::Not(inner) => {
            let all = index.all_paths()?;
            let matched = evaluate(inner.as_ref(), index)?;
            Ok(all.difference(&matched).cloned().collect())
        }
        Expr::Binary { op, lhs, rhs } => {
            let left = evaluate(lhs.as_ref(), index)?;
            let right = evaluate(rhs.as_ref(), index)?;
            Ok(combine(*op, &left, &right))
        }
    }
}

fn combine(op: BinaryOp, left: &PathSet, right: &PathSet) -> PathSet {
    match op {
        BinaryOp::And => left.intersection(right).cloned().collect(),
        BinaryOp::Or => left.union(right).cloned().collect(),
        BinaryOp::Xor => left.symmetric_difference(right).cloned().collect(),
    }
}
