use crate::constants;

/// Options controlling which members are compiled into fields.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct TemplateOptions {
    /// Methods on object and interface types are only exposed when
    /// annotated with a field declaration.
    pub require_method_declarations: bool,

    /// Properties are only exposed when annotated with a field declaration.
    pub require_property_declarations: bool,

    /// Prepended to the graph name of input objects that are not explicitly
    /// renamed.
    pub input_object_prefix: String,
}
impl Default for TemplateOptions {
    fn default() -> Self {
        Self {
            require_method_declarations: true,
            require_property_declarations: false,
            input_object_prefix: constants::DEFAULT_INPUT_OBJECT_PREFIX.to_string(),
        }
    }
}
