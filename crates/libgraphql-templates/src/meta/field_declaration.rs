use crate::meta::UnionDeclaration;

/// The payload shared by every annotation that declares a graph field
/// (`GraphField`, `Query`, `Mutation` and `TypeExtension`).
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct FieldDeclaration {
    /// Overrides the field name. May contain the `[action]` placeholder.
    pub name: Option<String>,

    /// An explicit GraphQL-syntax type expression such as `[Widget!]!`.
    pub type_expression: Option<String>,

    /// Internal names of the concrete types the field may return.
    pub types: Vec<String>,

    pub union: Option<UnionDeclaration>,

    pub complexity: Option<f64>,

    /// Drops the owning controller's route segments from an action's route.
    pub root: bool,
}
