use crate::route::SchemaItemPath;
use crate::templates::FieldResolutionMode;

/// What an [`ArgumentTemplate`](crate::templates::ArgumentTemplate) needs
/// to know about the field (or directive) declaring it.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ArgumentOwner {
    pub(crate) internal_name: String,
    pub(crate) resolution_mode: FieldResolutionMode,
    pub(crate) route: SchemaItemPath,

    /// Internal name of the type whose instances the owner resolves against.
    pub(crate) source_type: Option<String>,
}
impl ArgumentOwner {
    pub fn new(
        internal_name: impl Into<String>,
        route: SchemaItemPath,
        source_type: Option<String>,
        resolution_mode: FieldResolutionMode,
    ) -> Self {
        Self {
            internal_name: internal_name.into(),
            resolution_mode,
            route,
            source_type,
        }
    }

    pub fn internal_name(&self) -> &str {
        self.internal_name.as_str()
    }

    pub fn resolution_mode(&self) -> FieldResolutionMode {
        self.resolution_mode
    }

    pub fn route(&self) -> &SchemaItemPath {
        &self.route
    }

    pub fn source_type(&self) -> Option<&str> {
        self.source_type.as_deref()
    }
}
