//! Built-in page schemas, the read-only schema registry, and page-type
//! detection.
//!
//! Every supported page type gets a [`Schema`](pagesift_directive::Schema)
//! composed from a shared base plus type-specific fields. The
//! [`SchemaRegistry`] maps a page-type discriminator (the single key of the
//! document's `entry_data` marker, see [`detect`]) to its schema; unknown
//! discriminators are a hard error by design.

/// Page-type detection from the document's structural marker.
pub mod detect;

/// Registry and detection errors.
pub mod error;

/// Base and per-page-type schema definitions.
pub mod pages;

/// Discriminator → schema registry.
pub mod registry;

pub use detect::{ENTRY_MARKER, detect};
pub use error::{IndeterminateType, UnknownPageType};
pub use registry::SchemaRegistry;

/// Discriminator strings as they appear under the `entry_data` marker.
pub mod page_type {
    pub const PROFILE: &str = "ProfilePage";
    pub const POST: &str = "PostPage";
    pub const TAG: &str = "TagPage";
    pub const LOCATIONS: &str = "LocationsPage";
    pub const LOGIN: &str = "LoginAndSignupPage";
    pub const HTTP_ERROR: &str = "HttpErrorPage";
}
