use crate::meta::Annotation;
use crate::meta::AnnotationProvider;
use crate::meta::TypeRef;

fn default_true() -> bool {
    true
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct PropertyDescriptor {
    pub name: String,
    pub type_ref: TypeRef,

    #[serde(default = "default_true")]
    pub has_getter: bool,

    #[serde(default = "default_true")]
    pub has_setter: bool,

    #[serde(default)]
    pub annotations: Vec<Annotation>,

    /// Annotations declared on the overridden property of a base type.
    #[serde(default)]
    pub inherited_annotations: Vec<Annotation>,
}
impl PropertyDescriptor {
    pub fn new(name: impl Into<String>, type_ref: TypeRef) -> Self {
        Self {
            name: name.into(),
            type_ref,
            has_getter: true,
            has_setter: true,
            annotations: vec![],
            inherited_annotations: vec![],
        }
    }

    pub fn read_only(mut self) -> Self {
        self.has_setter = false;
        self
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }
}
impl AnnotationProvider for PropertyDescriptor {
    fn declared_annotations(&self) -> &[Annotation] {
        self.annotations.as_slice()
    }

    fn inherited_annotations(&self) -> &[Annotation] {
        self.inherited_annotations.as_slice()
    }
}
