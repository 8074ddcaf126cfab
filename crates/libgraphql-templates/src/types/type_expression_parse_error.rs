use thiserror::Error;

/// Describes why an explicitly declared type expression (e.g. `"[Type!]!"`)
/// could not be parsed.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum TypeExpressionParseError {
    #[error("a type expression must not be empty")]
    Empty,

    #[error(
        "`{declaration}` marks the same level as non-null more than once"
    )]
    DuplicateNonNullMarker {
        declaration: String,
    },

    #[error("`{name}` is not a valid core type name")]
    InvalidCoreTypeName {
        name: String,
    },

    #[error("`{declaration}` has unbalanced list brackets")]
    UnbalancedBrackets {
        declaration: String,
    },
}
