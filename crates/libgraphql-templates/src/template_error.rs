use crate::templates::DirectiveLifeCycle;
use crate::types::TypeExpressionParseError;
use crate::types::TypeKind;
use thiserror::Error;

/// The broad class a [`TemplateError`] belongs to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TemplateErrorKind {
    /// Several offending items reported together in one error.
    Aggregate,

    /// A single invalid declaration on a type, member or parameter.
    Declaration,

    /// The template API was used out of order or against the wrong kind of
    /// backing type.
    Usage,
}

/// One schema path claimed by more than one member.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DuplicatePath {
    pub path: String,
    pub members: Vec<String>,
}
impl std::fmt::Display for DuplicatePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "`{}` (claimed by {})", self.path, self.members.join(", "))
    }
}

/// One lifecycle phase that more than one directive method registered for.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DuplicateLifeCycle {
    pub life_cycle: DirectiveLifeCycle,
    pub methods: Vec<String>,
}
impl std::fmt::Display for DuplicateLifeCycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (registered by {})", self.life_cycle, self.methods.join(", "))
    }
}

/// One canonical enum value shared by more than one included label.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DuplicateEnumValue {
    pub value: String,
    pub labels: Vec<String>,
}
impl std::fmt::Display for DuplicateEnumValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.labels.join(", "), self.value)
    }
}

fn join_display<T: std::fmt::Display>(items: &[T]) -> String {
    items.iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum TemplateError {
    #[error(
        "Batch mode is only supported on type extensions: `{internal_name}` \
        declares batch resolution but does not extend a type"
    )]
    BatchModeNotSupported {
        internal_name: String,
    },

    #[error(
        "Duplicate argument names: `{internal_name}` (`{route}`) exposes more \
        than one argument named {}",
        names.join(", "),
    )]
    DuplicateArgumentNames {
        internal_name: String,
        route: String,
        names: Vec<String>,
    },

    #[error(
        "Duplicate enum values: `{internal_name}` declares labels that share \
        an underlying value: {}",
        join_display(duplicates),
    )]
    DuplicateEnumValues {
        internal_name: String,
        duplicates: Vec<DuplicateEnumValue>,
    },

    #[error(
        "Duplicate schema paths: `{internal_name}` declares more than one \
        member at the same path: {}",
        join_display(duplicates),
    )]
    DuplicateFieldPaths {
        internal_name: String,
        duplicates: Vec<DuplicatePath>,
    },

    #[error(
        "Duplicate lifecycle methods: the `{internal_name}` directive \
        registers more than one method for the same lifecycle phase: {}",
        join_display(duplicates),
    )]
    DuplicateLifeCycleRegistrations {
        internal_name: String,
        duplicates: Vec<DuplicateLifeCycle>,
    },

    #[error(
        "Empty possible types: no concrete graph type could be determined for \
        `{internal_name}` (`{route}`)"
    )]
    EmptyPossibleTypes {
        internal_name: String,
        route: String,
    },

    #[error(
        "Empty union: the `{union_name}` union declared on `{internal_name}` \
        has no member types"
    )]
    EmptyUnion {
        internal_name: String,
        union_name: String,
    },

    #[error("`{internal_name}` is marked to be skipped and can not be compiled")]
    ExcludedItem {
        internal_name: String,
    },

    #[error(
        "Generic methods can not be exposed on a graph: `{internal_name}` \
        declares generic parameters"
    )]
    GenericMethod {
        internal_name: String,
    },

    #[error(
        "Incompatible type expression: `{internal_name}` declares `{declared}`, \
        which does not match the list structure or type of its natural \
        expression `{natural}`"
    )]
    IncompatibleTypeExpression {
        internal_name: String,
        declared: String,
        natural: String,
    },

    #[error(
        "Invalid argument type: the `{internal_name}` argument is declared as \
        `{argument_type}`, but {reason}"
    )]
    InvalidArgumentType {
        internal_name: String,
        argument_type: String,
        reason: String,
    },

    #[error(
        "Invalid batch return type: the batch field `{internal_name}` returns \
        `{return_type}`, but batch fields must return the action result type \
        or a map keyed by `{source_type}` whose values fit every possible type"
    )]
    InvalidBatchReturnType {
        internal_name: String,
        return_type: String,
        source_type: String,
    },

    #[error(
        "Invalid directive method: `{internal_name}` must return \
        `graph.ActionResult`, but returns `{return_type}`"
    )]
    InvalidDirectiveMethodReturnType {
        internal_name: String,
        return_type: String,
    },

    #[error(
        "Invalid directive reference: `{internal_name}` applies \
        `{directive}`, which {reason}"
    )]
    InvalidDirectiveReference {
        internal_name: String,
        directive: String,
        reason: String,
    },

    #[error(
        "Invalid field type: `{internal_name}` is declared as \
        `{field_type}`, but {reason}"
    )]
    InvalidFieldType {
        internal_name: String,
        field_type: String,
        reason: String,
    },

    #[error(
        "Invalid route: `{internal_name}` resolves to `{route}`, which \
        contains invalid segments: {}",
        invalid_segments.join(", "),
    )]
    InvalidRoute {
        internal_name: String,
        route: String,
        invalid_segments: Vec<String>,
    },

    #[error(
        "Invalid template shape: `{internal_name}` can not be compiled as a \
        {kind} template: {reason}"
    )]
    InvalidTemplateShape {
        internal_name: String,
        kind: TypeKind,
        reason: String,
    },

    #[error(
        "Invalid type expression: `{internal_name}` declares \
        `{declaration}`: {error}"
    )]
    InvalidTypeExpression {
        internal_name: String,
        declaration: String,
        error: TypeExpressionParseError,
    },

    #[error(
        "Invalid type extension: `{internal_name}` extends `{target}`, which \
        is not an object, interface or input object type"
    )]
    InvalidTypeExtensionTarget {
        internal_name: String,
        target: String,
    },

    #[error(
        "Invalid union member: the `{union_name}` union declared on \
        `{internal_name}` includes `{member}`, which is a {member_kind}"
    )]
    InvalidUnionMember {
        internal_name: String,
        union_name: String,
        member: String,
        member_kind: TypeKind,
    },

    #[error(
        "Invalid union name: `{internal_name}` declares a union named \
        `{union_name}`, which is not a valid graph name"
    )]
    InvalidUnionName {
        internal_name: String,
        union_name: String,
    },

    #[error(
        "Map return type outside batch mode: `{internal_name}` returns \
        `{return_type}`, which is only allowed on batch type extensions"
    )]
    MapReturnOutsideBatch {
        internal_name: String,
        return_type: String,
    },

    #[error(
        "Missing batch input: the batch field `{internal_name}` must accept a \
        `List<{source_type}>` parameter carrying the items being resolved"
    )]
    MissingBatchSourceArgument {
        internal_name: String,
        source_type: String,
    },

    #[error(
        "Missing default constructor: the input object `{internal_name}` can \
        not be instantiated without arguments"
    )]
    MissingDefaultConstructor {
        internal_name: String,
    },

    #[error(
        "Missing directive lifecycle methods: the `{internal_name}` directive \
        declares no lifecycle methods"
    )]
    MissingDirectiveLifeCycleMethods {
        internal_name: String,
    },

    #[error(
        "Missing directive locations: the `{internal_name}` directive declares \
        no locations it may be applied to"
    )]
    MissingDirectiveLocations {
        internal_name: String,
    },

    #[error(
        "Mismatched directive signatures: on the `{internal_name}` directive, \
        `{method}` declares `{signature}` but `{reference_method}` declares \
        `{reference_signature}`"
    )]
    MismatchedDirectiveSignatures {
        internal_name: String,
        reference_method: String,
        reference_signature: String,
        method: String,
        signature: String,
    },

    #[error(
        "Negative complexity: `{internal_name}` declares a complexity of \
        {complexity}, but complexity must be zero or greater"
    )]
    NegativeComplexity {
        internal_name: String,
        complexity: f64,
    },

    #[error("`{internal_name}` must be parsed before it can be validated")]
    NotParsed {
        internal_name: String,
    },

    #[error(
        "Unassignable possible type: `{internal_name}` declares \
        `{possible_type}` as a possible type, but it can not be assigned to \
        the field's type `{object_type}`"
    )]
    UnassignablePossibleType {
        internal_name: String,
        possible_type: String,
        object_type: String,
    },

    #[error("Unknown backing type: no type named `{type_name}` is described")]
    UnknownBackingType {
        type_name: String,
    },

    #[error(
        "Unknown type: `{internal_name}` refers to `{type_name}`, which is not \
        a described type or registered scalar"
    )]
    UnknownType {
        internal_name: String,
        type_name: String,
    },

    #[error(
        "Void return type: `{internal_name}` must return a value to be \
        exposed on a graph"
    )]
    VoidReturnType {
        internal_name: String,
    },
}
impl TemplateError {
    pub fn kind(&self) -> TemplateErrorKind {
        match self {
            Self::DuplicateArgumentNames { .. }
                | Self::DuplicateEnumValues { .. }
                | Self::DuplicateFieldPaths { .. }
                | Self::DuplicateLifeCycleRegistrations { .. }
                => TemplateErrorKind::Aggregate,

            Self::InvalidTemplateShape { .. }
                | Self::NotParsed { .. }
                | Self::UnknownBackingType { .. }
                => TemplateErrorKind::Usage,

            _ => TemplateErrorKind::Declaration,
        }
    }

    /// The internal name of the item this error was raised for.
    pub fn internal_name(&self) -> &str {
        match self {
            Self::UnknownBackingType { type_name } => type_name.as_str(),
            Self::BatchModeNotSupported { internal_name }
                | Self::DuplicateArgumentNames { internal_name, .. }
                | Self::DuplicateEnumValues { internal_name, .. }
                | Self::DuplicateFieldPaths { internal_name, .. }
                | Self::DuplicateLifeCycleRegistrations { internal_name, .. }
                | Self::EmptyPossibleTypes { internal_name, .. }
                | Self::EmptyUnion { internal_name, .. }
                | Self::ExcludedItem { internal_name }
                | Self::GenericMethod { internal_name }
                | Self::IncompatibleTypeExpression { internal_name, .. }
                | Self::InvalidArgumentType { internal_name, .. }
                | Self::InvalidBatchReturnType { internal_name, .. }
                | Self::InvalidDirectiveMethodReturnType { internal_name, .. }
                | Self::InvalidDirectiveReference { internal_name, .. }
                | Self::InvalidFieldType { internal_name, .. }
                | Self::InvalidRoute { internal_name, .. }
                | Self::InvalidTemplateShape { internal_name, .. }
                | Self::InvalidTypeExpression { internal_name, .. }
                | Self::InvalidTypeExtensionTarget { internal_name, .. }
                | Self::InvalidUnionMember { internal_name, .. }
                | Self::InvalidUnionName { internal_name, .. }
                | Self::MapReturnOutsideBatch { internal_name, .. }
                | Self::MissingBatchSourceArgument { internal_name, .. }
                | Self::MissingDefaultConstructor { internal_name }
                | Self::MissingDirectiveLifeCycleMethods { internal_name }
                | Self::MissingDirectiveLocations { internal_name }
                | Self::MismatchedDirectiveSignatures { internal_name, .. }
                | Self::NegativeComplexity { internal_name, .. }
                | Self::NotParsed { internal_name }
                | Self::UnassignablePossibleType { internal_name, .. }
                | Self::UnknownType { internal_name, .. }
                | Self::VoidReturnType { internal_name }
                => internal_name.as_str(),
        }
    }
}
