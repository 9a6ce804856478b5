//! Comparison operators for basic conditions.
//!
//! The [`Op`] enum covers the operators a plain `field <op> value` condition
//! can carry. Richer kinds (between, membership, affix matches, nesting)
//! live on [`Kind`](crate::Kind) instead.

use std::str::FromStr;

use crate::error::QueryError;

/// Comparison operator for a basic condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Equal (exact term match).
    Eq,
    /// Not equal. Compiled as an inverted term match.
    Ne,
    /// Greater than.
    Gt,
    /// Less than.
    Lt,
    /// Greater than or equal.
    Gte,
    /// Less than or equal.
    Lte,
    /// SQL-style pattern, `%` matches any run of characters.
    Like,
}

impl Op {
    /// Returns the range bound key for comparison operators.
    ///
    /// `Eq`, `Ne` and `Like` are not range operators and return `None`.
    pub fn range_key(self) -> Option<&'static str> {
        match self {
            Op::Gt => Some("gt"),
            Op::Lt => Some("lt"),
            Op::Gte => Some("gte"),
            Op::Lte => Some("lte"),
            Op::Eq | Op::Ne | Op::Like => None,
        }
    }

    /// Returns the canonical token of this operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Op::Eq => "=",
            Op::Ne => "!=",
            Op::Gt => ">",
            Op::Lt => "<",
            Op::Gte => ">=",
            Op::Lte => "<=",
            Op::Like => "like",
        }
    }
}

impl FromStr for Op {
    type Err = QueryError;

    /// Parses a builder operator token.
    ///
    /// Symbolic and mnemonic spellings are both accepted (`>=` and `gte`,
    /// `<>` and `neq`, ...).
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let op = match token.trim() {
            "=" | "eq" => Op::Eq,
            "!=" | "<>" | "neq" => Op::Ne,
            ">" | "gt" => Op::Gt,
            "<" | "lt" => Op::Lt,
            ">=" | "gte" => Op::Gte,
            "<=" | "lte" => Op::Lte,
            other if other.eq_ignore_ascii_case("like") => Op::Like,
            other => {
                return Err(QueryError::UnsupportedOperator {
                    op: other.to_string(),
                })
            }
        };
        Ok(op)
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
