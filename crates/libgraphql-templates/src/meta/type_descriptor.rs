use crate::meta::Annotation;
use crate::meta::AnnotationProvider;
use crate::meta::EnumMemberDescriptor;
use crate::meta::EnumRepr;
use crate::meta::MethodDescriptor;
use crate::meta::PropertyDescriptor;
use crate::meta::TypeShape;

fn default_true() -> bool {
    true
}

/// Describes one language-level type: its shape, ancestry, annotations and
/// members.
///
/// Type names are internal, fully qualified names (e.g. `shop.Widget`); the
/// segment after the last `.` is the default graph name.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct TypeDescriptor {
    pub name: String,

    #[serde(default)]
    pub shape: TypeShape,

    /// Only meaningful for [`TypeShape::Enum`].
    #[serde(default)]
    pub enum_repr: EnumRepr,

    /// Internal names of the types this type directly derives from.
    #[serde(default)]
    pub base_types: Vec<String>,

    /// Internal names of the interfaces this type directly implements.
    #[serde(default)]
    pub interfaces: Vec<String>,

    #[serde(default)]
    pub annotations: Vec<Annotation>,

    #[serde(default)]
    pub inherited_annotations: Vec<Annotation>,

    #[serde(default)]
    pub properties: Vec<PropertyDescriptor>,

    #[serde(default)]
    pub methods: Vec<MethodDescriptor>,

    #[serde(default)]
    pub enum_members: Vec<EnumMemberDescriptor>,

    #[serde(default = "default_true")]
    pub has_default_constructor: bool,
}
impl TypeDescriptor {
    pub fn new(name: impl Into<String>, shape: TypeShape) -> Self {
        Self {
            name: name.into(),
            shape,
            enum_repr: EnumRepr::default(),
            base_types: vec![],
            interfaces: vec![],
            annotations: vec![],
            inherited_annotations: vec![],
            properties: vec![],
            methods: vec![],
            enum_members: vec![],
            has_default_constructor: true,
        }
    }

    /// The type name without its namespace (e.g. `Widget` for
    /// `shop.Widget`).
    pub fn short_name(&self) -> &str {
        short_name(self.name.as_str())
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn with_base_type(mut self, base_type: impl Into<String>) -> Self {
        self.base_types.push(base_type.into());
        self
    }

    pub fn with_enum_member(mut self, member: EnumMemberDescriptor) -> Self {
        self.enum_members.push(member);
        self
    }

    pub fn with_enum_repr(mut self, enum_repr: EnumRepr) -> Self {
        self.enum_repr = enum_repr;
        self
    }

    pub fn with_interface(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    pub fn with_method(mut self, method: MethodDescriptor) -> Self {
        self.methods.push(method);
        self
    }

    pub fn with_property(mut self, property: PropertyDescriptor) -> Self {
        self.properties.push(property);
        self
    }

    pub fn without_default_constructor(mut self) -> Self {
        self.has_default_constructor = false;
        self
    }
}
impl AnnotationProvider for TypeDescriptor {
    fn declared_annotations(&self) -> &[Annotation] {
        self.annotations.as_slice()
    }

    fn inherited_annotations(&self) -> &[Annotation] {
        self.inherited_annotations.as_slice()
    }
}

pub(crate) fn short_name(type_name: &str) -> &str {
    type_name.rsplit('.').next().unwrap_or(type_name)
}
