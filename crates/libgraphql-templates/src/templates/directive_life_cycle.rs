use crate::constants;

/// When, relative to query execution, a lifecycle method runs.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DirectiveLifeCyclePhase {
    /// While a request is being executed.
    Execution,

    /// While the schema is being assembled.
    TypeSystem,
}

/// The lifecycle hooks a directive implementation may provide.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DirectiveLifeCycle {
    AfterResolution,
    AlterTypeSystem,
    BeforeResolution,
}
impl DirectiveLifeCycle {
    /// Maps a method name (optionally suffixed with `Async`) to the
    /// lifecycle it implements.
    pub fn from_method_name(method_name: &str) -> Option<Self> {
        let name =
            method_name.strip_suffix(constants::ASYNC_METHOD_SUFFIX)
                .unwrap_or(method_name);
        match name {
            constants::AFTER_RESOLUTION_METHOD_NAME => Some(Self::AfterResolution),
            constants::ALTER_TYPE_SYSTEM_METHOD_NAME => Some(Self::AlterTypeSystem),
            constants::BEFORE_RESOLUTION_METHOD_NAME => Some(Self::BeforeResolution),
            _ => None,
        }
    }

    pub fn phase(&self) -> DirectiveLifeCyclePhase {
        match self {
            Self::AfterResolution | Self::BeforeResolution => DirectiveLifeCyclePhase::Execution,
            Self::AlterTypeSystem => DirectiveLifeCyclePhase::TypeSystem,
        }
    }
}
impl std::fmt::Display for DirectiveLifeCycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::AfterResolution => "AfterResolution",
            Self::AlterTypeSystem => "AlterTypeSystem",
            Self::BeforeResolution => "BeforeResolution",
        })
    }
}
