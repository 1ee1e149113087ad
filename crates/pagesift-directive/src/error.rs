use thiserror::Error;

use crate::Segment;

/// Failures surfaced by the directive engine when the active policy calls
/// for them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResolveError {
    /// A directive failed partway into an otherwise well-typed document.
    /// Recoverable by design: real documents legitimately omit optional
    /// fields, so the silent policies substitute a sentinel instead.
    #[error("attribute `{attribute}` is unresolvable: segment {index} (`{segment}`) did not match the document")]
    Unresolvable {
        attribute: String,
        segment: Segment,
        index: usize,
    },

    /// A directive's very first segment found nothing, which usually means
    /// the document's overall shape does not match the schema at all.
    #[error("attribute `{attribute}`: first segment `{segment}` is absent from the document")]
    RootSegmentMissing { attribute: String, segment: Segment },
}
