//! Condition compiler.
//!
//! Turns a [`Builder`]'s condition streams into a [`BoolQuery`] tree.
//!
//! # Grouping
//!
//! A condition's connective links it to the condition recorded *before*
//! it. A maximal run of OR-connected conditions therefore belongs together
//! with the condition the first OR attaches to (the run's head):
//!
//! ```text
//! a AND b OR c OR d AND e   =>   a AND (b OR c OR d) AND e
//! ```
//!
//! The advanced stream is scanned in reverse, so the OR members of a run
//! are seen before their head and no lookahead is needed. The scan is a
//! two-state machine ([`Grouping`]): an OR condition opens or extends a
//! run, an AND condition either stands alone or, if a run is open, joins
//! it as its head and seals it. A run left open at the end of the scan
//! began with an OR on the very first condition and is sealed as is.
//!
//! Each sealed run becomes one nested node in the root's `filter` slot
//! whose members are placed disjunctively (`should`).

use log::{debug, trace};
use serde_json::{json, Value};

use crate::bool_query::BoolQuery;
use crate::builder::Builder;
use crate::condition::{Condition, Kind, Operand, Term};
use crate::error::{QueryError, Result};
use crate::op::Op;
use crate::value::Scalar;

/// Compiles a builder into a boolean query tree.
///
/// Simple-stream entries become plain `filter` clauses. Advanced
/// conditions are grouped by connective (see the module docs) and each is
/// compiled through the clause rule of its [`Kind`].
///
/// An empty builder yields a node with all slots empty.
///
/// # Errors
///
/// Returns [`QueryError::MalformedCondition`] when a condition's operand
/// does not fit its kind, including inside nested sub-builders.
pub fn compile(builder: &Builder) -> Result<BoolQuery> {
    let mut root = BoolQuery::new();

    for (field, term) in builder.simple() {
        let clause = match term {
            Term::One(value) => json!({ "term": { field.as_str(): value } }),
            Term::Many(values) => json!({ "terms": { field.as_str(): values } }),
        };
        root.add_normal(clause, false);
    }

    for unit in group(builder.advanced()) {
        match unit {
            Unit::Single(condition) => apply(condition, &mut root, false)?,
            Unit::Run(members) => {
                trace!("sealing OR group of {} conditions", members.len());
                let mut bundle = BoolQuery::new();
                for condition in members {
                    apply(condition, &mut bundle, true)?;
                }
                root.push_filter(bundle);
            }
        }
    }

    debug!(
        "compiled {} simple and {} advanced conditions: filter={} should={} must_not={}",
        builder.simple().len(),
        builder.advanced().len(),
        root.filter().len(),
        root.should().len(),
        root.must_not().len(),
    );

    Ok(root)
}

/// Compiles a builder and serializes the result.
///
/// This is the `bool` object of a search request.
pub fn compile_value(builder: &Builder) -> Result<Value> {
    compile(builder).map(|node| node.to_value())
}

// ============================================================================
// Grouping
// ============================================================================

/// One compilation unit, in recorded order.
#[derive(Debug, PartialEq)]
enum Unit<'a> {
    /// AND-connected condition outside any OR run.
    Single(&'a Condition),
    /// Sealed OR run: head first, then its OR members, in recorded order.
    Run(Vec<&'a Condition>),
}

/// Reverse-scan state.
#[derive(Debug, Default)]
enum Grouping<'a> {
    #[default]
    Closed,
    /// Members of the open run, most recently recorded first.
    Open(Vec<&'a Condition>),
}

impl<'a> Grouping<'a> {
    /// Feeds the next condition of the reverse scan.
    ///
    /// Returns the unit completed by this condition, if any.
    fn step(&mut self, condition: &'a Condition) -> Option<Unit<'a>> {
        match (std::mem::take(self), condition.connective.is_or()) {
            (Grouping::Closed, true) => {
                *self = Grouping::Open(vec![condition]);
                None
            }
            (Grouping::Open(mut run), true) => {
                run.push(condition);
                *self = Grouping::Open(run);
                None
            }
            (Grouping::Closed, false) => Some(Unit::Single(condition)),
            (Grouping::Open(run), false) => Some(Grouping::seal(run, Some(condition))),
        }
    }

    /// Ends the scan, sealing a run that is still open.
    fn finish(self) -> Option<Unit<'a>> {
        match self {
            Grouping::Closed => None,
            Grouping::Open(run) => Some(Grouping::seal(run, None)),
        }
    }

    fn seal(mut run: Vec<&'a Condition>, head: Option<&'a Condition>) -> Unit<'a> {
        run.extend(head);
        run.reverse();
        Unit::Run(run)
    }
}

/// Splits the advanced stream into units, returned in recorded order.
fn group(conditions: &[Condition]) -> Vec<Unit<'_>> {
    let mut state = Grouping::Closed;
    let mut units = Vec::new();

    for condition in conditions.iter().rev() {
        units.extend(state.step(condition));
    }
    units.extend(state.finish());

    units.reverse();
    units
}

// ============================================================================
// Clause rules
// ============================================================================

/// Compiles one condition and places it on `node`.
fn apply(condition: &Condition, node: &mut BoolQuery, disjunctive: bool) -> Result<()> {
    trace!(
        "condition {} on '{}' (negated={}, disjunctive={})",
        condition.kind,
        condition.field,
        condition.negated,
        disjunctive
    );

    let field = condition.field.as_str();
    let negated = condition.negated;

    match condition.kind {
        Kind::Basic(op) => {
            let value = scalar(condition)?;
            let (clause, negated) = match (op, op.range_key()) {
                (_, Some(bound)) => (json!({ "range": { field: { bound: value } } }), negated),
                (Op::Like, None) => {
                    let pattern = text(condition, value)?.replace('%', "*");
                    (json!({ "wildcard": { field: pattern } }), negated)
                }
                // not-equals is an inverted term match
                (Op::Ne, None) => (json!({ "term": { field: value } }), !negated),
                (_, None) => (json!({ "term": { field: value } }), negated),
            };
            node.add(clause, negated, disjunctive);
        }
        Kind::Between => {
            let Operand::Range(low, high) = &condition.operand else {
                return Err(QueryError::malformed(field, "between requires a low and a high bound"));
            };
            let clause = json!({ "range": { field: { "gte": low, "lte": high } } });
            node.add(clause, negated, disjunctive);
        }
        Kind::In => {
            let Operand::Set(values) = &condition.operand else {
                return Err(QueryError::malformed(field, "in requires a set of values"));
            };
            node.add(json!({ "terms": { field: values } }), negated, disjunctive);
        }
        Kind::Null => {
            node.add(json!({ "exists": { "field": field } }), !negated, disjunctive);
        }
        Kind::Exists => {
            node.add(json!({ "exists": { "field": field } }), negated, disjunctive);
        }
        Kind::StartsWith => {
            let prefix = text(condition, scalar(condition)?)?;
            let clause = json!({ "match_phrase_prefix": { field: prefix } });
            node.add(clause, negated, disjunctive);
        }
        Kind::EndsWith => {
            let pattern = format!("*{}", text(condition, scalar(condition)?)?);
            node.add(json!({ "wildcard": { field: pattern } }), negated, disjunctive);
        }
        Kind::Contains => {
            let pattern = format!("*{}*", text(condition, scalar(condition)?)?);
            node.add(json!({ "wildcard": { field: pattern } }), negated, disjunctive);
        }
        Kind::Nested => {
            let Operand::Query(sub) = &condition.operand else {
                return Err(QueryError::malformed(field, "nested condition has no sub-query"));
            };
            node.add(compile(sub)?, negated, disjunctive);
        }
    }

    Ok(())
}

fn scalar(condition: &Condition) -> Result<&Scalar> {
    match &condition.operand {
        Operand::Scalar(value) => Ok(value),
        _ => Err(QueryError::malformed(
            &condition.field,
            "operator requires a single value",
        )),
    }
}

fn text(condition: &Condition, value: &Scalar) -> Result<String> {
    value.as_affix_text().ok_or_else(|| {
        QueryError::malformed(&condition.field, "pattern value must be text or a number")
    })
}
