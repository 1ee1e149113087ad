use indexmap::IndexMap;

use crate::Directive;

/// A named set of directives: attribute name → path.
///
/// Schemas compose by extension: a base schema [`merged`](Schema::merged)
/// with type-specific entries forms a derived schema, leaving the base
/// untouched. Iteration order is insertion order and is part of the
/// contract — the engine resolves attributes in this order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema(IndexMap<String, Directive>);

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: impl IntoIterator<Item = (String, Directive)>) -> Self {
        Schema(entries.into_iter().collect())
    }

    /// Later insertions of the same name replace the earlier directive.
    pub fn insert(&mut self, name: impl Into<String>, directive: Directive) -> Option<Directive> {
        self.0.insert(name.into(), directive)
    }

    pub fn get(&self, name: &str) -> Option<&Directive> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Directive)> {
        self.0.iter().map(|(name, directive)| (name.as_str(), directive))
    }

    pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Consume `overrides` into a copy of `self`. Overrides win on name
    /// clashes and append after the base entries otherwise.
    pub fn merged(mut self, overrides: Schema) -> Schema {
        self.0.extend(overrides.0);
        self
    }

    /// A filtered copy of this schema.
    ///
    /// An empty `include` selects every attribute; `exclude` is removed
    /// afterwards. Names that select nothing are skipped. The returned
    /// directives never alias this schema's storage, so mutating the result
    /// cannot corrupt a shared definition.
    pub fn subset(&self, include: &[&str], exclude: &[&str]) -> Schema {
        let names: Vec<&str> = if include.is_empty() {
            self.attribute_names().collect()
        } else {
            include.to_vec()
        };
        names
            .into_iter()
            .filter(|name| !exclude.contains(name))
            .filter_map(|name| {
                self.0
                    .get(name)
                    .map(|directive| (name.to_string(), directive.clone()))
            })
            .collect()
    }
}

impl FromIterator<(String, Directive)> for Schema {
    fn from_iter<T: IntoIterator<Item = (String, Directive)>>(iter: T) -> Self {
        Schema(IndexMap::from_iter(iter))
    }
}

impl<'a> FromIterator<(&'a str, Directive)> for Schema {
    fn from_iter<T: IntoIterator<Item = (&'a str, Directive)>>(iter: T) -> Self {
        Schema(
            iter.into_iter()
                .map(|(name, directive)| (name.to_string(), directive))
                .collect(),
        )
    }
}

impl IntoIterator for Schema {
    type Item = (String, Directive);
    type IntoIter = indexmap::map::IntoIter<String, Directive>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Build a [`Schema`] from `name: [segments…]` pairs.
///
/// ```
/// use pagesift_directive::schema;
///
/// let posts = schema! {
///     likes: ["edge_media_preview_like", "count"],
///     caption: ["edge_media_to_caption", "edges", 0, "node", "text"],
/// };
/// assert_eq!(posts.len(), 2);
/// ```
#[macro_export]
macro_rules! schema {
    { $($name:ident : [$($segment:expr),* $(,)?]),* $(,)? } => {
        $crate::Schema::from_entries([
            $((::std::string::String::from(::core::stringify!($name)), $crate::directive![$($segment),*])),*
        ])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directive;

    fn sample() -> Schema {
        schema! {
            likes: ["edge_media_preview_like", "count"],
            comments: ["edge_media_to_comment", "count"],
            shortcode: ["shortcode"],
        }
    }

    #[test]
    fn test_insertion_order() {
        let schema = sample();
        let names: Vec<&str> = schema.attribute_names().collect::<Vec<_>>();
        assert_eq!(names, ["likes", "comments", "shortcode"]);
    }

    #[test]
    fn test_merged_overrides_win() {
        let base = schema! { id: ["id"], caption: ["text"] };
        let derived = base.clone().merged(schema! {
            caption: ["edge_media_to_caption", "edges", 0, "node", "text"],
            likes: ["edge_media_preview_like", "count"],
        });
        assert_eq!(derived.len(), 3);
        assert_eq!(
            derived.get("caption"),
            Some(&directive![
                "edge_media_to_caption",
                "edges",
                0,
                "node",
                "text"
            ])
        );
        // The base is untouched.
        assert_eq!(base.get("caption"), Some(&directive!["text"]));
    }

    #[test]
    fn test_subset_include() {
        let subset = sample().subset(&["likes"], &[]);
        assert_eq!(subset.len(), 1);
        assert!(subset.contains("likes"));
    }

    #[test]
    fn test_subset_exclude() {
        let subset = sample().subset(&[], &["comments"]);
        let names: Vec<&str> = subset.attribute_names().collect();
        assert_eq!(names, ["likes", "shortcode"]);
    }

    #[test]
    fn test_subset_unknown_names_skipped() {
        let subset = sample().subset(&["likes", "no_such_attribute"], &[]);
        assert_eq!(subset.len(), 1);
    }

    #[test]
    fn test_subset_is_a_copy() {
        let schema = sample();
        let mut subset = schema.subset(&["likes"], &[]);
        subset.insert("likes", directive!["somewhere", "else"]);
        assert_eq!(
            schema.get("likes"),
            Some(&directive!["edge_media_preview_like", "count"])
        );
    }
}
