use core::fmt::Display;

use crate::Segment;

/// An ordered sequence of path segments locating one value inside a
/// document.
///
/// Directives are immutable once built; the engine walks the segment slice
/// by index, so the same directive value can be evaluated any number of
/// times without defensive copying.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Directive(Vec<Segment>);

impl Directive {
    /// Create an empty directive, which resolves to the document root.
    pub fn root() -> Self {
        Directive(Vec::new())
    }

    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Segment> {
        self.0.iter()
    }
}

impl From<Vec<Segment>> for Directive {
    fn from(segments: Vec<Segment>) -> Self {
        Directive(segments)
    }
}

impl FromIterator<Segment> for Directive {
    fn from_iter<T: IntoIterator<Item = Segment>>(iter: T) -> Self {
        Directive(Vec::from_iter(iter))
    }
}

impl Display for Directive {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.0.is_empty() {
            return write!(f, "(root)");
        }
        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                Segment::Key(key) => {
                    if i != 0 {
                        write!(f, ".")?;
                    }
                    write!(f, "{}", key)?;
                }
                Segment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

/// Build a [`Directive`] from a bracketed list of keys and indices.
///
/// ```
/// use pagesift_directive::directive;
///
/// let caption = directive!["edge_media_to_caption", "edges", 0, "node", "text"];
/// assert_eq!(caption.len(), 5);
/// ```
#[macro_export]
macro_rules! directive {
    [$($segment:expr),* $(,)?] => {
        $crate::Directive::from(::std::vec![$($crate::Segment::from($segment)),*])
    };
}
