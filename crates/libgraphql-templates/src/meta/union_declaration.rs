/// A union declared inline on a field: a name plus its member types.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UnionDeclaration {
    pub name: String,

    /// Internal names of the member types.
    #[serde(default)]
    pub types: Vec<String>,
}
