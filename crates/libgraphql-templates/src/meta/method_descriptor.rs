use crate::meta::Annotation;
use crate::meta::AnnotationProvider;
use crate::meta::ParameterDescriptor;
use crate::meta::TypeRef;

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct MethodDescriptor {
    pub name: String,
    pub return_type: TypeRef,

    #[serde(default)]
    pub parameters: Vec<ParameterDescriptor>,

    /// Whether the method declares its own type parameters.
    #[serde(default)]
    pub is_generic: bool,

    #[serde(default)]
    pub annotations: Vec<Annotation>,

    /// Annotations declared on the overridden method of a base type.
    #[serde(default)]
    pub inherited_annotations: Vec<Annotation>,
}
impl MethodDescriptor {
    pub fn new(name: impl Into<String>, return_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            return_type,
            parameters: vec![],
            is_generic: false,
            annotations: vec![],
            inherited_annotations: vec![],
        }
    }

    pub fn generic(mut self) -> Self {
        self.is_generic = true;
        self
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn with_parameter(mut self, parameter: ParameterDescriptor) -> Self {
        self.parameters.push(parameter);
        self
    }
}
impl AnnotationProvider for MethodDescriptor {
    fn declared_annotations(&self) -> &[Annotation] {
        self.annotations.as_slice()
    }

    fn inherited_annotations(&self) -> &[Annotation] {
        self.inherited_annotations.as_slice()
    }
}
