use crate::TemplateError;
use crate::Value;
use crate::constants;
use crate::constants::well_known;
use crate::meta::Annotation;
use crate::meta::AnnotationFamily;
use crate::meta::AnnotationProvider;
use crate::meta::ParameterDescriptor;
use crate::meta::SharedTypeResolver;
use crate::meta::TypeRef;
use crate::route::SchemaItemPath;
use crate::templates::ArgumentModifiers;
use crate::templates::ArgumentOwner;
use crate::templates::FieldResolutionMode;
use crate::templates::SchemaItemTemplate;
use crate::templates::TemplateHelpers;
use crate::types::DependentType;
use crate::types::TypeExpression;
use crate::types::TypeExpressionParseError;
use crate::types::TypeKind;
use inherent::inherent;

type Result<T> = std::result::Result<T, TemplateError>;

/// A single parameter of a resolver (or directive lifecycle method).
///
/// Parameters that receive the source item, the cancellation signal or a
/// host-supplied service are recognized structurally and excluded from the
/// schema.
#[derive(Clone, Debug)]
pub struct ArgumentTemplate {
    declaration: Option<String>,
    declared_expression: Option<std::result::Result<TypeExpression, TypeExpressionParseError>>,
    default_value: Option<Value>,
    internal_name: String,
    kind: TypeKind,
    modifiers: ArgumentModifiers,
    name: String,
    owner: ArgumentOwner,
    parameter: ParameterDescriptor,
    parsed: bool,
    resolver: SharedTypeResolver,
    route: SchemaItemPath,
    type_expression: Option<TypeExpression>,
}
impl ArgumentTemplate {
    pub fn new(
        parameter: ParameterDescriptor,
        owner: &ArgumentOwner,
        resolver: SharedTypeResolver,
    ) -> Self {
        Self {
            declaration: None,
            declared_expression: None,
            default_value: None,
            internal_name: format!("{}({})", owner.internal_name, parameter.name),
            kind: TypeKind::Scalar,
            modifiers: ArgumentModifiers::empty(),
            name: parameter.name.to_owned(),
            owner: owner.to_owned(),
            parameter,
            parsed: false,
            resolver,
            route: SchemaItemPath::default(),
            type_expression: None,
        }
    }

    /// Internal name of the argument's core type.
    pub fn core_type_name(&self) -> &str {
        self.parameter.type_ref.core_type_name()
    }

    pub fn declared_type(&self) -> &TypeRef {
        &self.parameter.type_ref
    }

    /// The default value, with numeric enum defaults coerced to labels.
    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    /// A parameter receives the request's cancellation signal when it is
    /// typed as the well-known cancellation signal type.
    pub fn is_cancellation_argument(&self) -> bool {
        matches!(
            self.parameter.type_ref.unwrap_optional(),
            TypeRef::Named(type_name) if type_name == well_known::CANCELLATION_SIGNAL,
        )
    }

    /// A parameter is supplied by the host when annotated `FromServices`.
    pub fn is_internal_argument(&self) -> bool {
        self.parameter.has_annotation(AnnotationFamily::FromServices)
    }

    pub fn is_part_of_schema(&self) -> bool {
        self.modifiers.is_part_of_schema()
    }

    /// A parameter receives the source item when it is typed as the owner's
    /// source type (or, in batch mode, as a list of it).
    pub fn is_source_data_argument(&self) -> bool {
        let Some(source_type) = self.owner.source_type.as_deref() else {
            return false;
        };
        let source = TypeRef::named(source_type);
        let shape = self.parameter.type_ref.unwrap_optional();
        match self.owner.resolution_mode {
            FieldResolutionMode::PerSourceItem => *shape == source,
            FieldResolutionMode::Batch => *shape == TypeRef::list(source),
        }
    }

    /// The graph kind of the argument's core type.
    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn modifiers(&self) -> ArgumentModifiers {
        self.modifiers
    }

    /// The schema-facing argument name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn parameter(&self) -> &ParameterDescriptor {
        &self.parameter
    }

    /// Parses this argument given the modifiers already claimed by the
    /// arguments declared before it, returning the updated claimed set.
    pub fn parse_with_siblings(&mut self, claimed: ArgumentModifiers) -> ArgumentModifiers {
        if self.parsed {
            return claimed | (self.modifiers & ArgumentModifiers::CLAIMABLE);
        }
        log::trace!("Parsing argument `{}`", self.internal_name);

        let (name_override, declaration) =
            match self.parameter.first_annotation(AnnotationFamily::FromGraphQL) {
                Some(Annotation::FromGraphQL { name, type_expression }) =>
                    (name.to_owned(), type_expression.to_owned()),
                _ => (None, None),
            };

        self.name =
            name_override
                .map(|name| {
                    name.replace(
                        constants::PARAMETER_NAME_PLACEHOLDER,
                        self.parameter.name.as_str(),
                    )
                    .trim()
                    .to_string()
                })
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| self.parameter.name.to_owned());
        self.route = self.owner.route.child(self.name.as_str());

        let core_type = self.parameter.type_ref.core_type_name().to_string();
        self.kind = self.resolver.resolve_type_kind(core_type.as_str(), TypeKind::InputObject);
        let graph_type_name = self.resolver.graph_type_name(core_type.as_str(), self.kind);

        let natural =
            TypeExpression::from_type_ref(&self.parameter.type_ref, &*self.resolver)
                .clone_to(graph_type_name);
        self.declared_expression =
            declaration.as_deref().map(TypeExpression::parse);
        self.declaration = declaration;
        self.type_expression = Some(match &self.declared_expression {
            Some(Ok(declared)) => natural.with_declaration(declared),
            _ if self.parameter.default_value.is_some() => natural.unwrap_outer_not_null(),
            _ => natural,
        });

        self.default_value = self.parameter.default_value.as_ref().map(|value| {
            self.coerce_default_value(core_type.as_str(), value)
        });

        self.modifiers =
            if self.is_internal_argument() {
                ArgumentModifiers::INTERNAL_ONLY
            } else if !claimed.contains(ArgumentModifiers::CANCELLATION_SIGNAL)
                && self.is_cancellation_argument() {
                ArgumentModifiers::CANCELLATION_SIGNAL
            } else if !claimed.contains(ArgumentModifiers::SOURCE_DATA)
                && self.is_source_data_argument() {
                ArgumentModifiers::SOURCE_DATA
            } else {
                ArgumentModifiers::PART_OF_SCHEMA
            };

        self.parsed = true;
        claimed | (self.modifiers & ArgumentModifiers::CLAIMABLE)
    }

    pub fn route(&self) -> &SchemaItemPath {
        &self.route
    }

    /// `name: Type` as it appears in a schema, followed by ` = default` when
    /// the argument has a default value.
    pub fn signature(&self) -> String {
        let signature = match &self.type_expression {
            Some(expr) => format!("{}: {expr}", self.name),
            None => format!("{}: {}", self.name, self.parameter.type_ref),
        };
        match &self.default_value {
            Some(default_value) => format!("{signature} = {default_value}"),
            None => signature,
        }
    }

    pub fn type_expression(&self) -> Option<&TypeExpression> {
        self.type_expression.as_ref()
    }

    fn coerce_default_value(&self, core_type: &str, value: &Value) -> Value {
        if self.kind != TypeKind::Enum {
            return value.to_owned();
        }
        let (Some(numeric), Some(descriptor)) = (value.as_int(), self.resolver.find_type(core_type)) else {
            return value.to_owned();
        };

        let target = descriptor.enum_repr.canonical_value(numeric as i128);
        descriptor.enum_members.iter()
            .find(|member| descriptor.enum_repr.canonical_value(member.value) == target)
            .map(|member| {
                let label =
                    member.first_annotation(AnnotationFamily::EnumValue)
                        .and_then(|annot| match annot {
                            Annotation::EnumValue { name } => Some(name.trim().to_string()),
                            _ => None,
                        })
                        .unwrap_or_else(|| member.name.to_owned());
                Value::Enum(label)
            })
            .unwrap_or_else(|| value.to_owned())
    }
}

#[inherent]
impl SchemaItemTemplate for ArgumentTemplate {
    pub fn internal_name(&self) -> &str {
        self.internal_name.as_str()
    }

    pub fn is_parsed(&self) -> bool {
        self.parsed
    }

    pub fn parse(&mut self) {
        self.parse_with_siblings(ArgumentModifiers::empty());
    }

    pub fn required_types(&self) -> Vec<DependentType> {
        if !self.is_part_of_schema() {
            return vec![];
        }
        vec![DependentType::new(self.core_type_name(), self.kind)]
    }

    pub fn validate_or_throw(&self, _validate_children: bool) -> Result<()> {
        if !self.parsed {
            return Err(TemplateError::NotParsed {
                internal_name: self.internal_name.to_owned(),
            });
        }
        if !self.is_part_of_schema() {
            return Ok(());
        }

        if TemplateHelpers::is_skipped(&self.parameter) {
            return Err(TemplateError::ExcludedItem {
                internal_name: self.internal_name.to_owned(),
            });
        }

        if !self.route.is_valid() {
            return Err(TemplateHelpers::invalid_route(self.internal_name.as_str(), &self.route));
        }

        if let Some(Err(error)) = &self.declared_expression {
            return Err(TemplateError::InvalidTypeExpression {
                internal_name: self.internal_name.to_owned(),
                declaration: self.declaration.to_owned().unwrap_or_default(),
                error: error.to_owned(),
            });
        }
        if let (Some(Ok(declared)), Some(expr)) = (&self.declared_expression, &self.type_expression) {
            let natural =
                TypeExpression::from_type_ref(&self.parameter.type_ref, &*self.resolver)
                    .clone_to(expr.type_name());
            if !TemplateHelpers::declaration_matches(declared, &natural) {
                return Err(TemplateError::IncompatibleTypeExpression {
                    internal_name: self.internal_name.to_owned(),
                    declared: declared.to_string(),
                    natural: natural.to_string(),
                });
            }
        }

        let argument_type = self.parameter.type_ref.to_string();
        if self.parameter.type_ref.is_void() {
            return Err(TemplateError::InvalidArgumentType {
                internal_name: self.internal_name.to_owned(),
                argument_type,
                reason: "arguments must carry a value".to_string(),
            });
        }

        let core_type = self.core_type_name();
        if !self.resolver.is_known_type(core_type) {
            return Err(TemplateError::UnknownType {
                internal_name: self.internal_name.to_owned(),
                type_name: core_type.to_string(),
            });
        }
        if core_type == well_known::ACTION_RESULT {
            return Err(TemplateError::InvalidArgumentType {
                internal_name: self.internal_name.to_owned(),
                argument_type,
                reason: "action results can only be returned from resolvers".to_string(),
            });
        }
        if self.kind == TypeKind::Interface {
            return Err(TemplateError::InvalidArgumentType {
                internal_name: self.internal_name.to_owned(),
                argument_type,
                reason: "interfaces can not be supplied as input".to_string(),
            });
        }

        Ok(())
    }
}
