use core::fmt::Display;
use std::borrow::Cow;

/// One step of a directive: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Mapping key like `graphql` or `edge_followed_by`
    Key(String),
    /// Sequence index
    Index(usize),
}

impl Segment {
    /// The bare string form used when synthesizing flat keys: indices
    /// stringify like keys, without brackets.
    pub fn as_flat_key(&self) -> Cow<'_, str> {
        match self {
            Segment::Key(key) => Cow::Borrowed(key),
            Segment::Index(index) => Cow::Owned(index.to_string()),
        }
    }
}

impl Display for Segment {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Segment::Key(key) => write!(f, "{}", key),
            Segment::Index(index) => write!(f, "[{}]", index),
        }
    }
}

impl From<&str> for Segment {
    fn from(key: &str) -> Self {
        Segment::Key(key.to_string())
    }
}

impl From<String> for Segment {
    fn from(key: String) -> Self {
        Segment::Key(key)
    }
}

impl From<usize> for Segment {
    fn from(index: usize) -> Self {
        Segment::Index(index)
    }
}

// Bare integer literals in `directive!` default to i32.
impl From<i32> for Segment {
    fn from(index: i32) -> Self {
        Segment::Index(usize::try_from(index).unwrap_or_default())
    }
}
