/// The kind of graph item a type is expected to become within a schema.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeKind {
    Controller,
    Directive,
    Enum,
    InputObject,
    Interface,
    Object,
    Scalar,
    Union,
}
impl TypeKind {
    pub fn name(&self) -> &str {
        match self {
            Self::Controller => "CONTROLLER",
            Self::Directive => "DIRECTIVE",
            Self::Enum => "ENUM",
            Self::InputObject => "INPUT_OBJECT",
            Self::Interface => "INTERFACE",
            Self::Object => "OBJECT",
            Self::Scalar => "SCALAR",
            Self::Union => "UNION",
        }
    }

    /// Union members may only be object-like kinds.
    pub fn is_valid_union_member(&self) -> bool {
        !matches!(self, Self::Enum | Self::Interface | Self::Scalar)
    }

    /// Indicates whether values of this kind are only ever produced by
    /// resolvers (as opposed to being supplied by a caller).
    pub fn is_output_only(&self) -> bool {
        matches!(self, Self::Interface | Self::Object | Self::Union)
    }
}
impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
