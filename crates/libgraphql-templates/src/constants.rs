//! Names and placeholders shared across the template compiler.

/// Internal names of the framework types the compiler treats specially.
pub mod well_known {
    /// The generic object type. Every type is assignable to it.
    pub const OBJECT: &str = "graph.Object";

    /// The indirection type returned by resolvers whose real payload type is
    /// declared through annotations rather than the signature.
    pub const ACTION_RESULT: &str = "graph.ActionResult";

    /// The cooperative cancellation signal a resolver may accept.
    pub const CANCELLATION_SIGNAL: &str = "graph.CancellationSignal";

    /// Base type of every directive implementation.
    pub const DIRECTIVE_BASE: &str = "graph.Directive";

    /// Base type of every controller (action container).
    pub const CONTROLLER_BASE: &str = "graph.Controller";
}

/// Replaced with the member name inside an explicitly declared field name.
pub const ACTION_NAME_PLACEHOLDER: &str = "[action]";

/// Replaced with the declared parameter name inside an explicitly declared
/// argument name.
pub const PARAMETER_NAME_PLACEHOLDER: &str = "[parameter]";

/// Stripped from a controller's type name to derive its route segment.
pub const CONTROLLER_NAME_SUFFIX: &str = "Controller";

/// Stripped from a directive's type name to derive its graph name.
pub const DIRECTIVE_NAME_SUFFIX: &str = "Directive";

pub const DEFAULT_INPUT_OBJECT_PREFIX: &str = "Input_";

pub const BEFORE_RESOLUTION_METHOD_NAME: &str = "BeforeFieldResolution";
pub const AFTER_RESOLUTION_METHOD_NAME: &str = "AfterFieldResolution";
pub const ALTER_TYPE_SYSTEM_METHOD_NAME: &str = "AlterTypeSystem";
pub const ASYNC_METHOD_SUFFIX: &str = "Async";

/// The core type name an explicit type expression may use to stand for the
/// member's own type (e.g. `[Type!]!`).
pub const TYPE_EXPRESSION_PLACEHOLDER: &str = "Type";
