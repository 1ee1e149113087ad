use std::sync::LazyLock;

use ahash::AHashMap;
use pagesift_directive::Schema;

use crate::{UnknownPageType, page_type, pages};

static BUILTIN: LazyLock<SchemaRegistry> = LazyLock::new(SchemaRegistry::with_builtin_pages);

/// Read-only map from page-type discriminator to schema.
///
/// The built-in instance is constructed once per process; schemas are never
/// mutated after registration, and [`get`](SchemaRegistry::get) hands out
/// shared references — callers needing a variant go through
/// [`Schema::subset`], which deep-copies.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    schemas: AHashMap<String, Schema>,
}

impl SchemaRegistry {
    /// An empty registry, for callers bringing their own page types.
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry of built-in page types.
    pub fn builtin() -> &'static SchemaRegistry {
        &BUILTIN
    }

    fn with_builtin_pages() -> Self {
        let mut registry = SchemaRegistry::new();
        registry.register(page_type::PROFILE, pages::profile());
        registry.register(page_type::POST, pages::post());
        registry.register(page_type::TAG, pages::hashtag());
        registry.register(page_type::LOCATIONS, pages::location());
        registry.register(page_type::LOGIN, pages::login());
        registry.register(page_type::HTTP_ERROR, pages::http_error());
        registry
    }

    /// Register a schema. A later registration under the same discriminator
    /// replaces the earlier one and returns it.
    pub fn register(
        &mut self,
        discriminator: impl Into<String>,
        schema: Schema,
    ) -> Option<Schema> {
        self.schemas.insert(discriminator.into(), schema)
    }

    /// Look up the schema for a discriminator. Unknown discriminators are a
    /// hard error — there is no fallback schema.
    pub fn get(&self, discriminator: &str) -> Result<&Schema, UnknownPageType> {
        self.schemas
            .get(discriminator)
            .ok_or_else(|| UnknownPageType(discriminator.to_string()))
    }

    pub fn contains(&self, discriminator: &str) -> bool {
        self.schemas.contains_key(discriminator)
    }

    pub fn page_types(&self) -> impl Iterator<Item = &str> {
        self.schemas.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
