use crate::TemplateError;
use crate::constants::well_known;
use crate::meta::MethodDescriptor;
use crate::meta::SharedTypeResolver;
use crate::meta::TypeRef;
use crate::route::SchemaItemPath;
use crate::templates::ArgumentModifiers;
use crate::templates::ArgumentOwner;
use crate::templates::ArgumentTemplate;
use crate::templates::DirectiveLifeCycle;
use crate::templates::FieldResolutionMode;
use crate::templates::SchemaItemTemplate;
use crate::templates::TemplateHelpers;
use crate::types::DependentType;
use inherent::inherent;

type Result<T> = std::result::Result<T, TemplateError>;

/// One lifecycle method of a directive. Its schema-facing parameters are the
/// directive's arguments.
#[derive(Clone, Debug)]
pub struct DirectiveMethodTemplate {
    arguments: Vec<ArgumentTemplate>,
    internal_name: String,
    life_cycle: DirectiveLifeCycle,
    method: MethodDescriptor,
    parsed: bool,
    resolver: SharedTypeResolver,
    route: SchemaItemPath,
}
impl DirectiveMethodTemplate {
    pub fn new(
        method: MethodDescriptor,
        life_cycle: DirectiveLifeCycle,
        directive_internal_name: &str,
        directive_route: &SchemaItemPath,
        resolver: SharedTypeResolver,
    ) -> Self {
        Self {
            arguments: vec![],
            internal_name: format!("{directive_internal_name}.{}", method.name),
            life_cycle,
            method,
            parsed: false,
            resolver,
            route: directive_route.to_owned(),
        }
    }

    pub fn arguments(&self) -> &[ArgumentTemplate] {
        self.arguments.as_slice()
    }

    pub fn life_cycle(&self) -> DirectiveLifeCycle {
        self.life_cycle
    }

    pub fn method(&self) -> &MethodDescriptor {
        &self.method
    }

    pub fn schema_arguments(&self) -> impl Iterator<Item = &ArgumentTemplate> {
        self.arguments.iter().filter(|arg| arg.is_part_of_schema())
    }

    /// Whether `other` takes the same schema-facing parameters: the same
    /// count, and at every position the same name, declared type and
    /// schema type.
    pub fn has_same_signature(&self, other: &DirectiveMethodTemplate) -> bool {
        self.schema_arguments().count() == other.schema_arguments().count()
            && self.schema_arguments()
                .zip(other.schema_arguments())
                .all(|(arg, other_arg)| {
                    arg.name() == other_arg.name()
                        && arg.parameter().type_ref == other_arg.parameter().type_ref
                        && arg.type_expression() == other_arg.type_expression()
                })
    }

    /// The schema-facing parameter list, e.g. `(reason: String, ttl: Int!)`.
    pub fn signature(&self) -> String {
        format!(
            "({})",
            self.schema_arguments()
                .map(|arg| arg.signature())
                .collect::<Vec<_>>()
                .join(", "),
        )
    }
}

#[inherent]
impl SchemaItemTemplate for DirectiveMethodTemplate {
    pub fn internal_name(&self) -> &str {
        self.internal_name.as_str()
    }

    pub fn is_parsed(&self) -> bool {
        self.parsed
    }

    pub fn parse(&mut self) {
        if self.parsed {
            return;
        }
        log::trace!("Parsing directive method `{}`", self.internal_name);

        let owner = ArgumentOwner::new(
            self.internal_name.as_str(),
            self.route.to_owned(),
            None,
            FieldResolutionMode::PerSourceItem,
        );
        let mut claimed = ArgumentModifiers::empty();
        self.arguments =
            self.method.parameters.iter()
                .map(|parameter| {
                    let mut argument = ArgumentTemplate::new(
                        parameter.to_owned(),
                        &owner,
                        self.resolver.clone(),
                    );
                    claimed = argument.parse_with_siblings(claimed);
                    argument
                })
                .collect();
        self.parsed = true;
    }

    pub fn required_types(&self) -> Vec<DependentType> {
        TemplateHelpers::dedupe_dependent_types(
            self.arguments.iter().flat_map(|arg| arg.required_types()),
        )
    }

    pub fn validate_or_throw(&self, validate_children: bool) -> Result<()> {
        if !self.parsed {
            return Err(TemplateError::NotParsed {
                internal_name: self.internal_name.to_owned(),
            });
        }
        if self.method.is_generic {
            return Err(TemplateError::GenericMethod {
                internal_name: self.internal_name.to_owned(),
            });
        }

        let returns_action_result = matches!(
            self.method.return_type.unwrap_async(),
            TypeRef::Named(type_name) if type_name == well_known::ACTION_RESULT,
        );
        if !returns_action_result {
            return Err(TemplateError::InvalidDirectiveMethodReturnType {
                internal_name: self.internal_name.to_owned(),
                return_type: self.method.return_type.to_string(),
            });
        }

        if validate_children {
            for argument in &self.arguments {
                argument.validate_or_throw(true)?;
            }
        }
        Ok(())
    }
}
