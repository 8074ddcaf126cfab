use crate::route::SchemaItemCollection;

const RESERVED_PREFIX: &str = "__";

/// Indicates if a name is a legal, non-reserved graph name:
/// `[A-Za-z_][A-Za-z0-9_]*` not beginning with `__`.
pub fn is_valid_graph_name(name: &str) -> bool {
    let mut chars = name.chars();
    let starts_ok = match chars.next() {
        Some(first) => first == '_' || first.is_ascii_alphabetic(),
        None => false,
    };

    starts_ok
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
        && !name.starts_with(RESERVED_PREFIX)
}

/// An ordered path of name segments rooted at a [`SchemaItemCollection`].
///
/// Construction never fails. Segments are normalized (split on `/`, trimmed,
/// empty parts dropped) but not validated; templates report invalid routes
/// during validation via [`SchemaItemPath::is_valid`].
#[derive(
    Clone,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct SchemaItemPath {
    collection: SchemaItemCollection,
    path: String,
    segments: Vec<String>,
}
impl SchemaItemPath {
    pub fn join<I, S>(collection: SchemaItemCollection, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let segments: Vec<String> =
            segments.into_iter()
                .flat_map(|raw| {
                    raw.as_ref()
                        .split('/')
                        .map(str::trim)
                        .filter(|part| !part.is_empty())
                        .map(str::to_string)
                        .collect::<Vec<_>>()
                })
                .collect();

        let mut path = collection.marker().to_string();
        for segment in &segments {
            path.push('/');
            path.push_str(segment);
        }

        Self {
            collection,
            path,
            segments,
        }
    }

    /// Produces a new path one level deeper than this one.
    pub fn child(&self, name: &str) -> Self {
        Self::join(
            self.collection,
            self.segments.iter()
                .map(String::as_str)
                .chain(std::iter::once(name)),
        )
    }

    pub fn collection(&self) -> SchemaItemCollection {
        self.collection
    }

    /// Segments that are not legal graph names, in path order.
    pub fn invalid_segments(&self) -> Vec<&str> {
        self.segments.iter()
            .map(String::as_str)
            .filter(|segment| !is_valid_graph_name(segment))
            .collect()
    }

    /// A path is valid when it has at least one segment and every segment is a
    /// legal graph name.
    pub fn is_valid(&self) -> bool {
        !self.segments.is_empty() && self.invalid_segments().is_empty()
    }

    /// The final segment, which is the schema-facing name of the item.
    pub fn name(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// The path of the owning item, if this path has an owner.
    pub fn parent(&self) -> Option<Self> {
        let (_, parent_segments) = self.segments.split_last()?;
        if parent_segments.is_empty() {
            return None;
        }
        Some(Self::join(self.collection, parent_segments))
    }

    /// The fully joined form (e.g. `[query]/Users/Search`).
    pub fn path(&self) -> &str {
        self.path.as_str()
    }

    pub fn segments(&self) -> &[String] {
        self.segments.as_slice()
    }
}
impl std::fmt::Display for SchemaItemPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path.as_str())
    }
}
