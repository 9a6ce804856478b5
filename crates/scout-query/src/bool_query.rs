//! Boolean query tree.
//!
//! A [`BoolQuery`] holds four ordered clause slots (`must`, `filter`,
//! `should`, `must_not`). Each slot entry is either a literal DSL clause or
//! a nested [`BoolQuery`]. Nodes own their children; the tree has no sharing.
//!
//! Serialization emits the slots in that fixed order and omits empty ones:
//!
//! ```text
//! { "must": [..], "filter": [..], "should": [..], "must_not": [..] }
//! ```

use serde::Serialize;
use serde_json::{json, Value};

/// One slot entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Clause {
    /// Literal query clause, e.g. `{"term": {"status": "open"}}`.
    Leaf(Value),
    /// Nested boolean query, serialized as its bare slot object.
    Bool(BoolQuery),
}

impl From<Value> for Clause {
    fn from(value: Value) -> Self {
        Clause::Leaf(value)
    }
}

impl From<BoolQuery> for Clause {
    fn from(node: BoolQuery) -> Self {
        Clause::Bool(node)
    }
}

/// Boolean query node with `must`, `filter`, `should` and `must_not` slots.
///
/// # Example
///
/// ```
/// use scout_query::BoolQuery;
/// use serde_json::json;
///
/// let mut node = BoolQuery::new();
/// node.add(json!({"term": {"a": 1}}), false, false);
/// node.add(json!({"term": {"b": 2}}), true, true);
///
/// assert_eq!(
///     node.to_value(),
///     json!({
///         "filter": [{"term": {"a": 1}}],
///         "should": [{"must_not": [{"term": {"b": 2}}]}]
///     })
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BoolQuery {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    must: Vec<Clause>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    filter: Vec<Clause>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    should: Vec<Clause>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    must_not: Vec<Clause>,
}

impl BoolQuery {
    /// Creates a node with all four slots empty.
    pub fn new() -> Self {
        BoolQuery::default()
    }

    /// Places a clause according to its negation and disjunction.
    ///
    /// | negated | disjunctive | slot |
    /// |---|---|---|
    /// | no | no | `filter` |
    /// | no | yes | `should` |
    /// | yes | no | `must_not` |
    /// | yes | yes | `should`, wrapped in a new node's `must_not` |
    ///
    /// A negated alternative cannot sit in `should` directly, so it becomes
    /// a sub-query that excludes the clause and is offered as one option.
    pub fn add(&mut self, clause: impl Into<Clause>, negated: bool, disjunctive: bool) {
        let clause = clause.into();
        match (negated, disjunctive) {
            (true, true) => {
                let mut wrapper = BoolQuery::new();
                wrapper.must_not.push(clause);
                self.should.push(Clause::Bool(wrapper));
            }
            (true, false) => self.must_not.push(clause),
            (false, true) => self.should.push(clause),
            (false, false) => self.filter.push(clause),
        }
    }

    /// Same as [`add`](Self::add) with `negated = false`.
    pub fn add_normal(&mut self, clause: impl Into<Clause>, disjunctive: bool) {
        self.add(clause, false, disjunctive);
    }

    /// Same as [`add`](Self::add) with `negated = true`.
    pub fn add_negated(&mut self, clause: impl Into<Clause>, disjunctive: bool) {
        self.add(clause, true, disjunctive);
    }

    /// Appends a clause to `filter` unconditionally.
    pub fn push_filter(&mut self, clause: impl Into<Clause>) {
        self.filter.push(clause.into());
    }

    pub fn must(&self) -> &[Clause] {
        &self.must
    }

    pub fn filter(&self) -> &[Clause] {
        &self.filter
    }

    pub fn should(&self) -> &[Clause] {
        &self.should
    }

    pub fn must_not(&self) -> &[Clause] {
        &self.must_not
    }

    /// Returns `true` if all four slots are empty.
    pub fn is_empty(&self) -> bool {
        self.must.is_empty()
            && self.filter.is_empty()
            && self.should.is_empty()
            && self.must_not.is_empty()
    }

    /// Serializes the node into a JSON object.
    pub fn to_value(&self) -> Value {
        json!(self)
    }
}
