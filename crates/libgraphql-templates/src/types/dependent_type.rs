use crate::types::TypeKind;

/// A requirement, emitted by a template, that another type be present in the
/// compiled schema as a graph type of the given kind.
#[derive(
    Clone,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct DependentType {
    pub(crate) expected_kind: TypeKind,
    pub(crate) type_name: String,
}
impl DependentType {
    pub fn new(type_name: impl Into<String>, expected_kind: TypeKind) -> Self {
        Self {
            expected_kind,
            type_name: type_name.into(),
        }
    }

    pub fn expected_kind(&self) -> TypeKind {
        self.expected_kind
    }

    /// The internal name of the required type.
    pub fn type_name(&self) -> &str {
        self.type_name.as_str()
    }
}
impl std::fmt::Display for DependentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.type_name, self.expected_kind)
    }
}
