/// The language-level shape of a described type.
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
#[serde(rename_all = "snake_case")]
pub enum TypeShape {
    /// A reference type.
    #[default]
    Class,
    Enum,
    Interface,

    /// A value type.
    Struct,
}
impl TypeShape {
    /// Values of value-shaped types are never absent unless wrapped in an
    /// `Option`.
    pub fn is_value_type(&self) -> bool {
        matches!(self, Self::Enum | Self::Struct)
    }

    pub fn is_object_like(&self) -> bool {
        matches!(self, Self::Class | Self::Struct)
    }
}
