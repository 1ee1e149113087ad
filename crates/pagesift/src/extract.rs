use serde_json::Value as JsonValue;
use thiserror::Error;
use tracing::debug;

use pagesift_directive::{AttributeTable, FailurePolicy, ResolveError, resolve};
use pagesift_flatten::flatten;
use pagesift_schema::{IndeterminateType, SchemaRegistry, UnknownPageType, detect};

/// Options for [`extract_with`].
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Attribute names to load; empty means every attribute in the schema.
    pub include: Vec<String>,
    /// Attribute names to drop after `include` is applied.
    pub exclude: Vec<String>,
    /// What to do when a directive fails to resolve.
    pub policy: FailurePolicy,
}

/// Everything that can go wrong between a raw document and its attribute
/// table.
///
/// `Indeterminate` and `UnknownPageType` mean the whole resolution is
/// untrustworthy and always surface. `Unresolvable` only occurs under the
/// stricter failure policies; the default policy records sentinels instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExtractError {
    #[error(transparent)]
    Indeterminate(#[from] IndeterminateType),

    #[error(transparent)]
    UnknownPageType(#[from] UnknownPageType),

    #[error(transparent)]
    Unresolvable(#[from] ResolveError),
}

/// Extract the full built-in schema for `document`'s detected page type
/// under the default silent policy.
pub fn extract(document: &JsonValue) -> Result<AttributeTable, ExtractError> {
    extract_with(document, &ExtractOptions::default())
}

/// Detect the page type, select and subset its schema, flatten the
/// document, and resolve the directives against the flattened projection.
pub fn extract_with(
    document: &JsonValue,
    options: &ExtractOptions,
) -> Result<AttributeTable, ExtractError> {
    let page_type = detect(document)?;
    let schema = SchemaRegistry::builtin().get(page_type)?;
    debug!(page_type, attributes = schema.len(), "selected schema");

    let include: Vec<&str> = options.include.iter().map(String::as_str).collect();
    let exclude: Vec<&str> = options.exclude.iter().map(String::as_str).collect();
    let schema = schema.subset(&include, &exclude);

    let flat = flatten(document).into_value();
    let table = resolve(&flat, &schema, &options.policy)?;
    debug!(resolved = table.len(), "resolved attribute table");
    Ok(table)
}
