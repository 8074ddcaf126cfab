//! The metadata model templates are compiled from.
//!
//! Descriptors stand in for reflected language elements (types, properties,
//! methods, parameters and enum members). Each carries the [`Annotation`]s
//! declared on it and is looked up by name through a [`TypeResolver`].

mod annotation;
mod annotation_family;
mod annotation_provider;
mod directive_application;
mod directive_reference;
mod enum_member_descriptor;
mod enum_repr;
mod field_declaration;
mod manifest;
mod metadata_error;
mod method_descriptor;
mod parameter_descriptor;
mod property_descriptor;
mod scalar_declaration;
mod type_catalog;
mod type_descriptor;
mod type_extension_declaration;
mod type_ref;
mod type_ref_parse_error;
mod type_resolver;
mod type_shape;
mod union_declaration;

pub use annotation::Annotation;
pub use annotation_family::AnnotationFamily;
pub use annotation_provider::AnnotationProvider;
pub use directive_application::DirectiveApplication;
pub use directive_reference::DirectiveReference;
pub use enum_member_descriptor::EnumMemberDescriptor;
pub use enum_repr::EnumRepr;
pub use field_declaration::FieldDeclaration;
pub use manifest::MetadataManifest;
pub use metadata_error::MetadataError;
pub use method_descriptor::MethodDescriptor;
pub use parameter_descriptor::ParameterDescriptor;
pub use property_descriptor::PropertyDescriptor;
pub use scalar_declaration::ScalarDeclaration;
pub use type_catalog::TypeCatalog;
pub use type_descriptor::TypeDescriptor;
pub use type_extension_declaration::TypeExtensionDeclaration;
pub use type_ref::TypeRef;
pub use type_ref_parse_error::TypeRefParseError;
pub use type_resolver::SharedTypeResolver;
pub use type_resolver::TypeResolver;
pub use type_shape::TypeShape;
pub use union_declaration::UnionDeclaration;
pub(crate) use type_descriptor::short_name;

#[cfg(test)]
mod tests;
