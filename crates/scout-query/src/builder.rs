//! Fluent condition builder.
//!
//! The [`Builder`] records conditions in two streams: a simple equality
//! stream keyed by field, and an ordered advanced stream carrying
//! connective, negation and kind for every entry. The compiler reads both.

use std::collections::BTreeMap;

use crate::condition::{Condition, Term};
use crate::error::Result;
use crate::op::Op;
use crate::value::Scalar;

/// Accumulates filter conditions for one search.
///
/// Each advanced condition is linked to the one recorded before it by its
/// connective, so `a.and(..).or(..)` reads as `a AND (b OR c)` style
/// groups once compiled.
///
/// # Example
///
/// ```
/// use scout_query::{Builder, Op};
///
/// let query = Builder::new()
///     .where_eq("tenant", 7)             // simple stream
///     .and("age", Op::Gte, 18)           // age >= 18
///     .and_eq("status", "open")          // AND (status = open
///     .or_eq("status", "pending")        //      OR status = pending)
///     .and_not_null("email")
///     .build();
///
/// assert_eq!(query.advanced().len(), 4);
/// assert_eq!(query.simple().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Builder {
    simple: BTreeMap<String, Term>,
    advanced: Vec<Condition>,
    text: Option<String>,
}

impl Builder {
    /// Creates a new empty builder.
    ///
    /// An empty builder compiles to an empty boolean query (no filtering).
    pub fn new() -> Self {
        Builder::default()
    }

    // ========================================================================
    // Simple stream
    // ========================================================================

    /// Adds an exact match to the simple stream.
    ///
    /// A later entry for the same field replaces the earlier one.
    pub fn where_eq(mut self, field: &str, value: impl Into<Scalar>) -> Self {
        self.simple
            .insert(field.to_string(), Term::One(value.into()));
        self
    }

    /// Adds a set match to the simple stream.
    pub fn where_in<I, V>(mut self, field: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Scalar>,
    {
        let set = values.into_iter().map(Into::into).collect();
        self.simple.insert(field.to_string(), Term::Many(set));
        self
    }

    /// Sets the free-text query string.
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    // ========================================================================
    // Generic advanced builders
    // ========================================================================

    /// Appends a prepared condition to the advanced stream.
    pub fn push(mut self, condition: Condition) -> Self {
        self.advanced.push(condition);
        self
    }

    /// Adds an AND-connected basic condition.
    pub fn and(self, field: &str, op: Op, value: impl Into<Scalar>) -> Self {
        self.push(Condition::basic(field, op, value))
    }

    /// Adds an OR-connected basic condition.
    pub fn or(self, field: &str, op: Op, value: impl Into<Scalar>) -> Self {
        self.push(Condition::basic(field, op, value).or())
    }

    /// Adds an AND-connected, negated basic condition.
    pub fn and_not(self, field: &str, op: Op, value: impl Into<Scalar>) -> Self {
        self.push(Condition::basic(field, op, value).negate())
    }

    /// Adds an OR-connected, negated basic condition.
    pub fn or_not(self, field: &str, op: Op, value: impl Into<Scalar>) -> Self {
        self.push(Condition::basic(field, op, value).or().negate())
    }

    /// Adds an AND-connected basic condition from an operator token.
    ///
    /// Returns an error if the token is not a supported operator.
    pub fn and_op(self, field: &str, op: &str, value: impl Into<Scalar>) -> Result<Self> {
        let op: Op = op.parse()?;
        Ok(self.and(field, op, value))
    }

    /// Adds an OR-connected basic condition from an operator token.
    pub fn or_op(self, field: &str, op: &str, value: impl Into<Scalar>) -> Result<Self> {
        let op: Op = op.parse()?;
        Ok(self.or(field, op, value))
    }

    // ========================================================================
    // AND shorthand methods
    // ========================================================================

    /// Adds an AND equality clause.
    pub fn and_eq(self, field: &str, value: impl Into<Scalar>) -> Self {
        self.and(field, Op::Eq, value)
    }

    /// Adds an AND not-equal clause.
    pub fn and_ne(self, field: &str, value: impl Into<Scalar>) -> Self {
        self.and(field, Op::Ne, value)
    }

    /// Adds an AND pattern clause (`%` is the wildcard).
    pub fn and_like(self, field: &str, pattern: &str) -> Self {
        self.and(field, Op::Like, pattern)
    }

    /// Adds an AND inclusive range clause.
    pub fn and_between(
        self,
        field: &str,
        low: impl Into<Scalar>,
        high: impl Into<Scalar>,
    ) -> Self {
        self.push(Condition::between(field, low, high))
    }

    /// Adds an AND set membership clause.
    pub fn and_in<I, V>(self, field: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Scalar>,
    {
        self.push(Condition::one_of(field, values))
    }

    /// Adds an AND clause requiring the field to be missing.
    pub fn and_null(self, field: &str) -> Self {
        self.push(Condition::null(field))
    }

    /// Adds an AND clause requiring the field to be present.
    pub fn and_not_null(self, field: &str) -> Self {
        self.push(Condition::null(field).negate())
    }

    /// Adds an AND field presence clause.
    pub fn and_exists(self, field: &str) -> Self {
        self.push(Condition::exists(field))
    }

    /// Adds an AND prefix clause.
    pub fn and_starts_with(self, field: &str, value: impl Into<Scalar>) -> Self {
        self.push(Condition::starts_with(field, value))
    }

    /// Adds an AND suffix clause.
    pub fn and_ends_with(self, field: &str, value: impl Into<Scalar>) -> Self {
        self.push(Condition::ends_with(field, value))
    }

    /// Adds an AND substring clause.
    pub fn and_contains(self, field: &str, value: impl Into<Scalar>) -> Self {
        self.push(Condition::contains(field, value))
    }

    /// Adds an AND sub-query, compiled as its own group.
    pub fn and_nested(self, query: Builder) -> Self {
        self.push(Condition::nested(query))
    }

    // ========================================================================
    // OR shorthand methods
    // ========================================================================

    /// Adds an OR equality clause.
    pub fn or_eq(self, field: &str, value: impl Into<Scalar>) -> Self {
        self.or(field, Op::Eq, value)
    }

    /// Adds an OR not-equal clause.
    pub fn or_ne(self, field: &str, value: impl Into<Scalar>) -> Self {
        self.or(field, Op::Ne, value)
    }

    /// Adds an OR pattern clause.
    pub fn or_like(self, field: &str, pattern: &str) -> Self {
        self.or(field, Op::Like, pattern)
    }

    /// Adds an OR inclusive range clause.
    pub fn or_between(
        self,
        field: &str,
        low: impl Into<Scalar>,
        high: impl Into<Scalar>,
    ) -> Self {
        self.push(Condition::between(field, low, high).or())
    }

    /// Adds an OR set membership clause.
    pub fn or_in<I, V>(self, field: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Scalar>,
    {
        self.push(Condition::one_of(field, values).or())
    }

    /// Adds an OR clause requiring the field to be missing.
    pub fn or_null(self, field: &str) -> Self {
        self.push(Condition::null(field).or())
    }

    /// Adds an OR clause requiring the field to be present.
    pub fn or_not_null(self, field: &str) -> Self {
        self.push(Condition::null(field).or().negate())
    }

    /// Adds an OR field presence clause.
    pub fn or_exists(self, field: &str) -> Self {
        self.push(Condition::exists(field).or())
    }

    /// Adds an OR prefix clause.
    pub fn or_starts_with(self, field: &str, value: impl Into<Scalar>) -> Self {
        self.push(Condition::starts_with(field, value).or())
    }

    /// Adds an OR suffix clause.
    pub fn or_ends_with(self, field: &str, value: impl Into<Scalar>) -> Self {
        self.push(Condition::ends_with(field, value).or())
    }

    /// Adds an OR substring clause.
    pub fn or_contains(self, field: &str, value: impl Into<Scalar>) -> Self {
        self.push(Condition::contains(field, value).or())
    }

    /// Adds an OR sub-query.
    pub fn or_nested(self, query: Builder) -> Self {
        self.push(Condition::nested(query).or())
    }

    // ========================================================================
    // Negated shorthand methods
    // ========================================================================

    /// Adds an AND clause excluding an inclusive range.
    pub fn and_not_between(
        self,
        field: &str,
        low: impl Into<Scalar>,
        high: impl Into<Scalar>,
    ) -> Self {
        self.push(Condition::between(field, low, high).negate())
    }

    /// Adds an OR clause excluding an inclusive range.
    pub fn or_not_between(
        self,
        field: &str,
        low: impl Into<Scalar>,
        high: impl Into<Scalar>,
    ) -> Self {
        self.push(Condition::between(field, low, high).or().negate())
    }

    /// Adds an AND clause excluding a set of values.
    pub fn and_not_in<I, V>(self, field: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Scalar>,
    {
        self.push(Condition::one_of(field, values).negate())
    }

    /// Adds an OR clause excluding a set of values.
    pub fn or_not_in<I, V>(self, field: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Scalar>,
    {
        self.push(Condition::one_of(field, values).or().negate())
    }

    /// Adds an AND clause requiring the field to be absent.
    pub fn and_not_exists(self, field: &str) -> Self {
        self.push(Condition::exists(field).negate())
    }

    /// Adds an OR clause requiring the field to be absent.
    pub fn or_not_exists(self, field: &str) -> Self {
        self.push(Condition::exists(field).or().negate())
    }

    /// Adds an AND negated prefix clause.
    pub fn and_not_starts_with(self, field: &str, value: impl Into<Scalar>) -> Self {
        self.push(Condition::starts_with(field, value).negate())
    }

    /// Adds an OR negated prefix clause.
    pub fn or_not_starts_with(self, field: &str, value: impl Into<Scalar>) -> Self {
        self.push(Condition::starts_with(field, value).or().negate())
    }

    /// Adds an AND negated suffix clause.
    pub fn and_not_ends_with(self, field: &str, value: impl Into<Scalar>) -> Self {
        self.push(Condition::ends_with(field, value).negate())
    }

    /// Adds an OR negated suffix clause.
    pub fn or_not_ends_with(self, field: &str, value: impl Into<Scalar>) -> Self {
        self.push(Condition::ends_with(field, value).or().negate())
    }

    /// Adds an AND negated substring clause.
    pub fn and_not_contains(self, field: &str, value: impl Into<Scalar>) -> Self {
        self.push(Condition::contains(field, value).negate())
    }

    /// Adds an OR negated substring clause.
    pub fn or_not_contains(self, field: &str, value: impl Into<Scalar>) -> Self {
        self.push(Condition::contains(field, value).or().negate())
    }

    /// Adds an AND negated sub-query.
    pub fn and_not_nested(self, query: Builder) -> Self {
        self.push(Condition::nested(query).negate())
    }

    /// Adds an OR negated sub-query.
    pub fn or_not_nested(self, query: Builder) -> Self {
        self.push(Condition::nested(query).or().negate())
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Finalizes the builder.
    pub fn build(self) -> Self {
        self
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Returns the simple equality stream, sorted by field.
    pub fn simple(&self) -> &BTreeMap<String, Term> {
        &self.simple
    }

    /// Returns the advanced stream in recorded order.
    pub fn advanced(&self) -> &[Condition] {
        &self.advanced
    }

    /// Returns the free-text query, if set.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Returns `true` if no conditions were recorded (matches everything).
    ///
    /// Free text does not count as a condition.
    pub fn is_empty(&self) -> bool {
        self.simple.is_empty() && self.advanced.is_empty()
    }
}
