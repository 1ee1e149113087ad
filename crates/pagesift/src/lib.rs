//! pagesift: structured attribute extraction from page-embedded JSON.
//!
//! Social media pages embed a deeply nested, schema-variable JSON document
//! in their markup. Given that document (already fetched and parsed by the
//! caller), pagesift detects which kind of page it came from, selects the
//! matching schema of path directives, flattens the document into a
//! collision-free single-level table, and resolves each directive into a
//! named attribute.
//!
//! ```
//! use serde_json::json;
//!
//! let document = json!({
//!     "config": {"csrf_token": "abc"},
//!     "entry_data": {
//!         "TagPage": [{
//!             "graphql": {
//!                 "hashtag": {
//!                     "name": "sunset",
//!                     "edge_hashtag_to_media": {"count": 1234}
//!                 }
//!             }
//!         }]
//!     }
//! });
//!
//! let table = pagesift::extract(&document).unwrap();
//! assert_eq!(table["name"], json!("sunset"));
//! assert_eq!(table["amount_of_posts"], json!(1234));
//! ```
//!
//! The pieces compose freely: [`detect`], [`SchemaRegistry`], [`flatten`],
//! and [`resolve`] are each pure functions over their inputs, so anything
//! [`extract`] does can be reassembled by hand.

/// One-call extraction pipeline.
pub mod extract;

pub use extract::{ExtractError, ExtractOptions, extract, extract_with};

pub use pagesift_directive::{
    AttributeTable, Directive, FailurePolicy, ResolveError, Schema, Segment, directive, locate,
    resolve, schema,
};
pub use pagesift_flatten::{DocumentTree, FlatIndex, flatten};
pub use pagesift_schema::{
    ENTRY_MARKER, IndeterminateType, SchemaRegistry, UnknownPageType, detect, page_type, pages,
};
