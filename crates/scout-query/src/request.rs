//! Search request `query` object.

use serde_json::{json, Value};

use crate::builder::Builder;
use crate::compiler::compile;
use crate::error::Result;

/// Builds the `query` object of a search request.
///
/// The compiled tree sits under `bool`. Its `must` key is then set to a
/// `query_string` clause when the builder carries free text, or to
/// `match_all` otherwise:
///
/// ```
/// use scout_query::{search_query, Builder};
/// use serde_json::json;
///
/// let query = search_query(&Builder::new().and_eq("lang", "en")).unwrap();
/// assert_eq!(
///     query,
///     json!({
///         "bool": {
///             "filter": [{"term": {"lang": "en"}}],
///             "must": {"match_all": {}}
///         }
///     })
/// );
/// ```
pub fn search_query(builder: &Builder) -> Result<Value> {
    let mut tree = compile(builder)?.to_value();

    let must = match builder.text() {
        Some(text) if !text.is_empty() => json!({ "query_string": { "query": text } }),
        _ => json!({ "match_all": {} }),
    };
    if let Value::Object(slots) = &mut tree {
        slots.insert("must".to_string(), must);
    }

    Ok(json!({ "bool": tree }))
}
