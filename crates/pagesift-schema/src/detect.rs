use serde_json::Value as JsonValue;

use crate::IndeterminateType;

/// Top-level container whose single key names the page type.
pub const ENTRY_MARKER: &str = "entry_data";

/// Read the page-type discriminator out of `document`.
///
/// Returns the first key of the top-level `entry_data` object. An absent
/// marker, a non-object marker, or an empty marker all yield
/// [`IndeterminateType`]; no document shape panics.
///
/// ```
/// use serde_json::json;
/// use pagesift_schema::detect;
///
/// let document = json!({"entry_data": {"LoginAndSignupPage": [{}]}});
/// assert_eq!(detect(&document), Ok("LoginAndSignupPage"));
/// ```
pub fn detect(document: &JsonValue) -> Result<&str, IndeterminateType> {
    document
        .get(ENTRY_MARKER)
        .and_then(JsonValue::as_object)
        .and_then(|entries| entries.keys().next())
        .map(String::as_str)
        .ok_or(IndeterminateType)
}
