/// The root collection a [`SchemaItemPath`](crate::route::SchemaItemPath) is
/// anchored in.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
pub enum SchemaItemCollection {
    Directives,
    Enums,
    Mutation,
    Query,
    #[default]
    Types,
}
impl SchemaItemCollection {
    /// The bracketed marker that leads the joined form of a path.
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Directives => "[directive]",
            Self::Enums => "[enum]",
            Self::Mutation => "[mutation]",
            Self::Query => "[query]",
            Self::Types => "[type]",
        }
    }

    /// Query and mutation collections hold root operation fields.
    pub fn is_operation_root(&self) -> bool {
        matches!(self, Self::Mutation | Self::Query)
    }
}
impl std::fmt::Display for SchemaItemCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.marker())
    }
}
