use crate::meta::Annotation;
use crate::meta::AnnotationProvider;

/// One label of an enumeration.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumMemberDescriptor {
    pub name: String,
    pub value: i128,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}
impl EnumMemberDescriptor {
    pub fn new(name: impl Into<String>, value: i128) -> Self {
        Self {
            name: name.into(),
            value,
            annotations: vec![],
        }
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }
}
impl AnnotationProvider for EnumMemberDescriptor {
    fn declared_annotations(&self) -> &[Annotation] {
        self.annotations.as_slice()
    }
}
