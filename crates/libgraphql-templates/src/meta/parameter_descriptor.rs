use crate::meta::Annotation;
use crate::meta::AnnotationProvider;
use crate::meta::TypeRef;
use crate::Value;

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ParameterDescriptor {
    pub name: String,
    pub type_ref: TypeRef,

    /// The language-level default, if the parameter is optional.
    #[serde(default)]
    pub default_value: Option<Value>,

    #[serde(default)]
    pub annotations: Vec<Annotation>,
}
impl ParameterDescriptor {
    pub fn new(name: impl Into<String>, type_ref: TypeRef) -> Self {
        Self {
            name: name.into(),
            type_ref,
            default_value: None,
            annotations: vec![],
        }
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn with_default(mut self, value: Value) -> Self {
        self.default_value = Some(value);
        self
    }
}
impl AnnotationProvider for ParameterDescriptor {
    fn declared_annotations(&self) -> &[Annotation] {
        self.annotations.as_slice()
    }
}
