//! Compiles annotated type metadata into immutable, validated templates for
//! every item of a GraphQL schema (types, fields, arguments, enum values,
//! directives and applied directives).
//!
//! Templates are built from [`meta::TypeDescriptor`]s resolved through a
//! [`meta::TypeResolver`]. Each template is parsed once, validated once, and
//! afterwards exposes the set of [`types::DependentType`]s a schema assembler
//! needs in order to produce a self-consistent schema.

pub mod constants;
pub mod meta;
pub mod route;
mod template_error;
pub mod templates;
pub mod types;
mod value;

pub use template_error::DuplicateEnumValue;
pub use template_error::DuplicateLifeCycle;
pub use template_error::DuplicatePath;
pub use template_error::TemplateError;
pub use template_error::TemplateErrorKind;
pub use value::Value;
