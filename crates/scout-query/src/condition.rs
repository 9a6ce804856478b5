//! Condition types recorded by the [`Builder`].
//!
//! A [`Condition`] is one filter unit: a field, a [`Kind`] saying how to
//! match it, an [`Operand`], the [`Connective`] linking it to the condition
//! recorded before it, and a negation flag.

use crate::builder::Builder;
use crate::op::Op;
use crate::value::Scalar;

/// How a condition relates to the condition recorded before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Connective {
    #[default]
    And,
    Or,
}

impl Connective {
    /// Returns `true` for [`Connective::Or`].
    pub fn is_or(self) -> bool {
        matches!(self, Connective::Or)
    }
}

/// Condition kind. Each kind has exactly one clause rule in the compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `field <op> value`.
    Basic(Op),
    /// Inclusive range between two bounds.
    Between,
    /// Membership in a set of values.
    In,
    /// Field is missing or null.
    Null,
    /// Field is present.
    Exists,
    /// String prefix match.
    StartsWith,
    /// String suffix match.
    EndsWith,
    /// Substring match.
    Contains,
    /// Sub-query compiled into its own boolean group.
    Nested,
}

impl Kind {
    /// Returns the display name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Basic(_) => "basic",
            Kind::Between => "between",
            Kind::In => "in",
            Kind::Null => "null",
            Kind::Exists => "exists",
            Kind::StartsWith => "starts_with",
            Kind::EndsWith => "ends_with",
            Kind::Contains => "contains",
            Kind::Nested => "nested",
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Kind::Basic(op) => write!(f, "basic({op})"),
            other => write!(f, "{}", other.as_str()),
        }
    }
}

/// Operand of a condition. Which shape is valid depends on the [`Kind`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Operand {
    /// No operand (`Null`, `Exists`).
    #[default]
    None,
    /// Single value.
    Scalar(Scalar),
    /// Low and high bound, both inclusive.
    Range(Scalar, Scalar),
    /// Set of values.
    Set(Vec<Scalar>),
    /// Sub-builder of a nested condition.
    Query(Box<Builder>),
}

/// A single entry of the advanced condition stream.
///
/// # Example
///
/// ```
/// use scout_query::{Condition, Connective, Op};
///
/// let cond = Condition::basic("status", Op::Eq, "open").or().negate();
/// assert_eq!(cond.connective, Connective::Or);
/// assert!(cond.negated);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    /// The field to match. Empty for nested conditions.
    pub field: String,
    /// How the field is matched.
    pub kind: Kind,
    /// What the field is matched against.
    pub operand: Operand,
    /// Relation to the previously recorded condition.
    pub connective: Connective,
    /// Whether the match is negated.
    pub negated: bool,
}

impl Condition {
    /// Creates an AND-connected, non-negated condition.
    pub fn new(field: impl Into<String>, kind: Kind, operand: Operand) -> Self {
        Condition {
            field: field.into(),
            kind,
            operand,
            connective: Connective::And,
            negated: false,
        }
    }

    /// `field <op> value`.
    pub fn basic(field: impl Into<String>, op: Op, value: impl Into<Scalar>) -> Self {
        Condition::new(field, Kind::Basic(op), Operand::Scalar(value.into()))
    }

    /// `low <= field <= high`.
    pub fn between(
        field: impl Into<String>,
        low: impl Into<Scalar>,
        high: impl Into<Scalar>,
    ) -> Self {
        Condition::new(
            field,
            Kind::Between,
            Operand::Range(low.into(), high.into()),
        )
    }

    /// `field` is one of `values`.
    pub fn one_of<I, V>(field: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Scalar>,
    {
        let set = values.into_iter().map(Into::into).collect();
        Condition::new(field, Kind::In, Operand::Set(set))
    }

    /// `field` is missing or null.
    pub fn null(field: impl Into<String>) -> Self {
        Condition::new(field, Kind::Null, Operand::None)
    }

    /// `field` is present.
    pub fn exists(field: impl Into<String>) -> Self {
        Condition::new(field, Kind::Exists, Operand::None)
    }

    pub fn starts_with(field: impl Into<String>, value: impl Into<Scalar>) -> Self {
        Condition::new(field, Kind::StartsWith, Operand::Scalar(value.into()))
    }

    pub fn ends_with(field: impl Into<String>, value: impl Into<Scalar>) -> Self {
        Condition::new(field, Kind::EndsWith, Operand::Scalar(value.into()))
    }

    pub fn contains(field: impl Into<String>, value: impl Into<Scalar>) -> Self {
        Condition::new(field, Kind::Contains, Operand::Scalar(value.into()))
    }

    /// Sub-query whose conditions form one group.
    pub fn nested(query: Builder) -> Self {
        Condition::new("", Kind::Nested, Operand::Query(Box::new(query)))
    }

    /// Connects this condition to its predecessor with OR.
    pub fn or(mut self) -> Self {
        self.connective = Connective::Or;
        self
    }

    /// Sets the connective explicitly.
    pub fn with_connective(mut self, connective: Connective) -> Self {
        self.connective = connective;
        self
    }

    /// Flips the negation flag.
    pub fn negate(mut self) -> Self {
        self.negated = !self.negated;
        self
    }
}

/// Value of a simple-stream entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    /// Exact match against one value.
    One(Scalar),
    /// Exact match against any of several values.
    Many(Vec<Scalar>),
}
