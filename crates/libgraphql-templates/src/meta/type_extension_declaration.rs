use crate::meta::FieldDeclaration;
use crate::templates::FieldResolutionMode;

/// Declares a method as a field added to another (target) type.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct TypeExtensionDeclaration {
    /// Internal name of the extended type.
    pub target: String,

    #[serde(default)]
    pub mode: FieldResolutionMode,

    #[serde(flatten)]
    pub field: FieldDeclaration,
}
