//! Templates: the parsed, validated intermediate representation of every
//! schema item.
//!
//! Every template follows the same lifecycle (see [`SchemaItemTemplate`]):
//! it is constructed from metadata, parsed exactly once, validated, and is
//! afterwards read-only. [`TemplateProvider`] drives that lifecycle for
//! whole graph types and caches the results.

mod applied_directive_template;
mod applied_security_policy;
mod argument_modifiers;
mod argument_owner;
mod argument_template;
mod controller_template;
mod deprecation;
mod directive_life_cycle;
mod directive_method_container;
mod directive_method_template;
mod directive_template;
mod duplicate_collector;
mod enum_type_template;
mod enum_value_template;
mod field_container;
mod field_owner;
mod field_resolution_mode;
mod field_source;
mod field_template;
mod graph_type_template;
mod input_object_type_template;
mod interface_type_template;
mod object_type_template;
mod schema_item_template;
mod security_group;
mod template_helpers;
mod template_options;
mod template_provider;
mod type_template_core;

pub use applied_directive_template::AppliedDirectiveTemplate;
pub use applied_security_policy::AppliedSecurityPolicy;
pub use argument_modifiers::ArgumentModifiers;
pub use argument_owner::ArgumentOwner;
pub use argument_template::ArgumentTemplate;
pub use controller_template::ControllerTemplate;
pub use deprecation::Deprecation;
pub use directive_life_cycle::DirectiveLifeCycle;
pub use directive_life_cycle::DirectiveLifeCyclePhase;
pub use directive_method_container::DirectiveMethodContainer;
pub use directive_method_template::DirectiveMethodTemplate;
pub use directive_template::DirectiveTemplate;
pub(crate) use duplicate_collector::DuplicateCollector;
pub use enum_type_template::EnumTypeTemplate;
pub use enum_value_template::EnumValueTemplate;
pub use field_container::FieldContainer;
pub use field_owner::FieldOwner;
pub use field_resolution_mode::FieldResolutionMode;
pub use field_source::FieldSource;
pub use field_template::FieldTemplate;
pub use graph_type_template::GraphTypeTemplate;
pub use input_object_type_template::InputObjectTypeTemplate;
pub use interface_type_template::InterfaceTypeTemplate;
pub use object_type_template::ObjectTypeTemplate;
pub use schema_item_template::SchemaItemTemplate;
pub use security_group::SecurityGroup;
pub(crate) use template_helpers::TemplateHelpers;
pub use template_options::TemplateOptions;
pub use template_provider::TemplateProvider;
pub(crate) use type_template_core::TypeTemplateCore;

#[cfg(test)]
mod tests;
