use crate::route::SchemaItemPath;
use crate::templates::SecurityGroup;
use crate::types::TypeKind;

/// What a [`FieldTemplate`](crate::templates::FieldTemplate) needs to know
/// about the graph type (or controller) declaring it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldOwner {
    /// Route segments prepended to action routes beneath the operation root.
    pub(crate) action_segments: Vec<String>,
    pub(crate) internal_name: String,
    pub(crate) kind: TypeKind,
    pub(crate) route: SchemaItemPath,
    pub(crate) security: SecurityGroup,
}
impl FieldOwner {
    pub fn new(
        internal_name: impl Into<String>,
        kind: TypeKind,
        route: SchemaItemPath,
    ) -> Self {
        Self {
            action_segments: vec![],
            internal_name: internal_name.into(),
            kind,
            route,
            security: SecurityGroup::default(),
        }
    }

    pub fn action_segments(&self) -> &[String] {
        self.action_segments.as_slice()
    }

    pub fn internal_name(&self) -> &str {
        self.internal_name.as_str()
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn route(&self) -> &SchemaItemPath {
        &self.route
    }

    pub fn security(&self) -> &SecurityGroup {
        &self.security
    }

    pub fn with_action_segments(mut self, segments: Vec<String>) -> Self {
        self.action_segments = segments;
        self
    }

    pub fn with_security(mut self, security: SecurityGroup) -> Self {
        self.security = security;
        self
    }
}
