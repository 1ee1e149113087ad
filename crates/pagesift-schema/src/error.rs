use thiserror::Error;

/// The document carries no usable type marker.
///
/// Usually the site served something other than the requested entity page
/// (a login redirect, an error page), so callers must treat this as its own
/// outcome rather than as an unknown-but-valid type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("document type is indeterminate: the `entry_data` marker is missing, not an object, or empty")]
pub struct IndeterminateType;

/// A detected discriminator with no registered schema.
///
/// Always a programmer or configuration error. There is deliberately no
/// fallback schema: resolving the wrong schema against the wrong document
/// shape produces misleading missing-field noise instead of a clear
/// failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no schema registered for page type `{0}`")]
pub struct UnknownPageType(pub String);
