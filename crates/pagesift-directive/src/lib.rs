//! Path directives, schemas, and the directive engine.
//!
//! A [`Directive`] is an ordered sequence of [`Segment`]s describing how to
//! reach one value inside a JSON document. A [`Schema`] names a set of
//! directives, and [`resolve`] evaluates a schema against a document under a
//! caller-selected [`FailurePolicy`].

/// Directive type and the `directive!` constructor macro.
pub mod directive;

/// Schema evaluation with selectable failure policies.
pub mod engine;

/// Errors surfaced by the directive engine.
pub mod error;

/// Named sets of directives and the `schema!` constructor macro.
pub mod schema;

/// Path segment type.
pub mod segment;

pub use directive::Directive;
pub use engine::{AttributeTable, FailurePolicy, locate, resolve};
pub use error::ResolveError;
pub use schema::Schema;
pub use segment::Segment;
