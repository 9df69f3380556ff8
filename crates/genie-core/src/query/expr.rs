//! Expression tree for parsed tag queries

use std::fmt;

/// Binary boolean operators over path sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// Set intersection (`and` / `&`)
    And,
    /// Set union (`or` / `|`)
    Or,
    /// Symmetric difference (`xor` / `^`)
    Xor,
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinaryOp::And => write!(f, "and"),
            BinaryOp::Or => write!(f, "or"),
            BinaryOp::Xor => write!(f, "xor"),
        }
    }
}

/// A parsed query expression.
///
/// The tree is owned outright by the parse result: children sit behind
/// `Box`, no node is shared or mutated after construction, and no cycles
/// are possible. Every [`Expr::Binary`] has exactly two fully-formed
/// children; `not` only ever appears as the unary [`Expr::Not`] wrapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr<'a> {
    /// A leaf referencing one tag name, exactly as lexed.
    Tag(&'a str),
    /// Logical negation of a subexpression.
    Not(Box<Expr<'a>>),
    /// A binary operation over two subexpressions.
    Binary {
        op: BinaryOp,
        lhs: Box<Expr<'a>>,
        rhs: Box<Expr<'a>>,
    },
}

impl<'a> Expr<'a> {
    /// Shorthand for a tag leaf.
    pub fn tag(name: &'a str) -> Self {
        Expr::Tag(name)
    }

    /// Shorthand for a negation.
    pub fn not(inner: Expr<'a>) -> Self {
        Expr::Not(Box::new(inner))
    }

    /// Shorthand for a binary node.
    pub fn binary(op: BinaryOp, lhs: Expr<'a>, rhs: Expr<'a>) -> Self {
        Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }
}

impl fmt::Display for Expr<'_> {
    /// Renders the expression fully parenthesized, which makes the
    /// left-to-right fold visible: `a or b and c` displays as
    /// `((a or b) and c)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Tag(name) => write!(f, "{}", name),
            Expr::Not(inner) => write!(f, "(not {})", inner),
            Expr::Binary { op, lhs, rhs } => write!(f, "({} {} {})", lhs, op, rhs),
        }
    }
}
