use crate::meta::DirectiveReference;
use crate::Value;

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct DirectiveApplication {
    pub directive: DirectiveReference,

    /// Positional argument values passed to the directive.
    #[serde(default)]
    pub arguments: Vec<Value>,
}
