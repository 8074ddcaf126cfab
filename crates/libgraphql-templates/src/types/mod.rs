mod dependent_type;
mod directive_location;
mod type_expression;
mod type_expression_parse_error;
mod type_kind;
mod type_wrapper;

pub use dependent_type::DependentType;
pub use directive_location::DirectiveLocation;
pub use type_expression::TypeExpression;
pub use type_expression_parse_error::TypeExpressionParseError;
pub use type_kind::TypeKind;
pub use type_wrapper::TypeWrapper;
