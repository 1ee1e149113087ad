use indexmap::IndexMap;
use serde_json::Value as JsonValue;

use crate::{Directive, ResolveError, Schema, Segment};

/// Resolved attributes in schema order: the artifact handed back to the
/// caller for attachment onto an entity object.
pub type AttributeTable = IndexMap<String, JsonValue>;

/// What [`resolve`] does when a directive fails partway through a document.
#[derive(Debug, Clone, PartialEq)]
pub enum FailurePolicy {
    /// Record `sentinel` for the failed attribute and continue with the
    /// remaining attributes.
    SilentDefault { sentinel: JsonValue },

    /// Abort the whole resolution with [`ResolveError::Unresolvable`],
    /// naming the attribute and the offending segment.
    TypedError,

    /// A miss at the very first segment aborts with
    /// [`ResolveError::RootSegmentMissing`] — likely a structural mismatch
    /// between schema and document. Deeper misses record `sentinel` like
    /// [`FailurePolicy::SilentDefault`] — likely an optional field.
    RaiseAtRoot { sentinel: JsonValue },
}

impl FailurePolicy {
    /// Silent-default with a null sentinel. JSON has no NaN, so null stands
    /// in for the conventional not-a-number marker.
    pub fn silent() -> Self {
        FailurePolicy::SilentDefault {
            sentinel: JsonValue::Null,
        }
    }

    /// Raise-at-root with a null sentinel for deeper misses.
    pub fn raise_at_root() -> Self {
        FailurePolicy::RaiseAtRoot {
            sentinel: JsonValue::Null,
        }
    }
}

impl Default for FailurePolicy {
    fn default() -> Self {
        FailurePolicy::silent()
    }
}

struct Miss<'dir> {
    segment: &'dir Segment,
    index: usize,
}

/// Walk `directive` into `document` without any failure handling.
///
/// An empty directive locates the document itself. `Value::get` covers all
/// three failure modes at once: absent key, out-of-range index, and
/// indexing into a non-container.
pub fn locate<'doc>(document: &'doc JsonValue, directive: &Directive) -> Option<&'doc JsonValue> {
    walk(document, directive).ok()
}

fn walk<'doc, 'dir>(
    document: &'doc JsonValue,
    directive: &'dir Directive,
) -> Result<&'doc JsonValue, Miss<'dir>> {
    let mut current = document;
    for (index, segment) in directive.iter().enumerate() {
        let next = match segment {
            Segment::Key(key) => current.get(key.as_str()),
            Segment::Index(i) => current.get(*i),
        };
        current = next.ok_or(Miss { segment, index })?;
    }
    Ok(current)
}

/// Evaluate every directive in `schema` against `document`.
///
/// Attributes are evaluated in schema insertion order and independently of
/// one another; the call is pure, so resolving the same inputs twice yields
/// the same table.
pub fn resolve(
    document: &JsonValue,
    schema: &Schema,
    policy: &FailurePolicy,
) -> Result<AttributeTable, ResolveError> {
    let mut table = AttributeTable::new();
    for (name, directive) in schema.iter() {
        match walk(document, directive) {
            Ok(value) => {
                table.insert(name.to_string(), value.clone());
            }
            Err(miss) => match policy {
                FailurePolicy::SilentDefault { sentinel } => {
                    table.insert(name.to_string(), sentinel.clone());
                }
                FailurePolicy::TypedError => {
                    return Err(ResolveError::Unresolvable {
                        attribute: name.to_string(),
                        segment: miss.segment.clone(),
                        index: miss.index,
                    });
                }
                FailurePolicy::RaiseAtRoot { sentinel } => {
                    if miss.index == 0 {
                        return Err(ResolveError::RootSegmentMissing {
                            attribute: name.to_string(),
                            segment: miss.segment.clone(),
                        });
                    }
                    table.insert(name.to_string(), sentinel.clone());
                }
            },
        }
    }
    Ok(table)
}
