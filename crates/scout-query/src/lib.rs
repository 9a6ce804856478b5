//! Scout Query - compile filter conditions into search-engine boolean queries.
//!
//! A [`Builder`] records filter conditions through a fluent API. [`compile`]
//! turns them into a [`BoolQuery`] tree shaped like the engine's `bool`
//! query (`must` / `filter` / `should` / `must_not`), which serializes to
//! the query DSL with `serde`.
//!
//! # Quick Start
//!
//! ```rust
//! use scout_query::{compile_value, Builder, Op};
//! use serde_json::json;
//!
//! let query = Builder::new()
//!     .and("age", Op::Gte, 18)
//!     .and_eq("status", "open")
//!     .or_eq("status", "pending")
//!     .and_null("deleted_at")
//!     .build();
//!
//! assert_eq!(
//!     compile_value(&query).unwrap(),
//!     json!({
//!         "filter": [
//!             {"range": {"age": {"gte": 18}}},
//!             {"should": [
//!                 {"term": {"status": "open"}},
//!                 {"term": {"status": "pending"}}
//!             ]}
//!         ],
//!         "must_not": [{"exists": {"field": "deleted_at"}}]
//!     })
//! );
//! ```
//!
//! # Semantics
//!
//! - Conditions are ANDed unless connected with OR.
//! - An OR condition groups with the condition before it; a run of ORs
//!   forms one group placed in `filter`, with its members in `should`.
//! - Negated conditions go to `must_not`; inside an OR group each one is
//!   wrapped in its own `{"must_not": [..]}` alternative.
//! - Nested builders compile recursively into their own group.
//!
//! # Condition Kinds
//!
//! | Kind | Clause |
//! |------|--------|
//! | `=` | `term` |
//! | `!=` | `term`, negation inverted |
//! | `>`, `<`, `>=`, `<=` | `range` |
//! | `like` | `wildcard`, `%` becomes `*` |
//! | between | `range` with `gte` and `lte` |
//! | in | `terms` |
//! | null | `exists`, negation inverted |
//! | exists | `exists` |
//! | starts with | `match_phrase_prefix` |
//! | ends with / contains | `wildcard` |
//! | nested | compiled sub-query |

mod bool_query;
mod builder;
mod compiler;
mod condition;
mod error;
mod op;
mod request;
mod value;

// Re-export public API
pub use bool_query::{BoolQuery, Clause};
pub use builder::Builder;
pub use compiler::{compile, compile_value};
pub use condition::{Condition, Connective, Kind, Operand, Term};
pub use error::{QueryError, Result};
pub use op::Op;
pub use request::search_query;
pub use value::{Number, Scalar};
