/// Registers a language-level type as a graph scalar.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ScalarDeclaration {
    /// The internal type name (e.g. `i32`).
    pub type_name: String,

    /// The schema-facing scalar name (e.g. `Int`).
    pub graph_name: String,

    /// Value-typed scalars are non-null unless wrapped in an `Option`.
    #[serde(default)]
    pub value_type: bool,
}
impl ScalarDeclaration {
    pub fn new(
        type_name: impl Into<String>,
        graph_name: impl Into<String>,
        value_type: bool,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            graph_name: graph_name.into(),
            value_type,
        }
    }
}
