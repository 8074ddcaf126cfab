use thiserror::Error;

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum TypeRefParseError {
    #[error("expected a type name at offset {offset} of `{input}`")]
    ExpectedTypeName {
        input: String,
        offset: usize,
    },

    #[error("expected `{expected}` at offset {offset} of `{input}`")]
    ExpectedToken {
        input: String,
        expected: char,
        offset: usize,
    },

    #[error("unexpected trailing input at offset {offset} of `{input}`")]
    TrailingInput {
        input: String,
        offset: usize,
    },

    #[error("`{wrapper}` is not a known type wrapper in `{input}`")]
    UnknownWrapper {
        input: String,
        wrapper: String,
    },

    #[error("`{wrapper}` expects {expected} type parameter(s) in `{input}`")]
    WrongParameterCount {
        input: String,
        wrapper: String,
        expected: usize,
    },
}
