/// Identifies the directive an [`Annotation::ApplyDirective`] applies.
///
/// [`Annotation::ApplyDirective`]: crate::meta::Annotation::ApplyDirective
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectiveReference {
    /// The schema-facing directive name (e.g. `deprecated`).
    Name(String),

    /// The internal name of a type implementing the directive.
    Type(String),
}
impl DirectiveReference {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Name(name) | Self::Type(name) => name.as_str(),
        }
    }
}
impl std::fmt::Display for DirectiveReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name(name) => write!(f, "@{name}"),
            Self::Type(type_name) => f.write_str(type_name),
        }
    }
}
