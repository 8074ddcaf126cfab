use crate::TemplateError;
use crate::constants;
use crate::constants::well_known;
use crate::meta::Annotation;
use crate::meta::AnnotationFamily;
use crate::meta::FieldDeclaration;
use crate::meta::SharedTypeResolver;
use crate::meta::TypeRef;
use crate::meta::UnionDeclaration;
use crate::route;
use crate::route::SchemaItemCollection;
use crate::route::SchemaItemPath;
use crate::templates::AppliedDirectiveTemplate;
use crate::templates::ArgumentModifiers;
use crate::templates::ArgumentOwner;
use crate::templates::ArgumentTemplate;
use crate::templates::Deprecation;
use crate::templates::DuplicateCollector;
use crate::templates::FieldOwner;
use crate::templates::FieldResolutionMode;
use crate::templates::FieldSource;
use crate::templates::SchemaItemTemplate;
use crate::templates::SecurityGroup;
use crate::templates::TemplateHelpers;
use crate::types::DependentType;
use crate::types::TypeExpression;
use crate::types::TypeExpressionParseError;
use crate::types::TypeKind;
use indexmap::IndexSet;
use inherent::inherent;

type Result<T> = std::result::Result<T, TemplateError>;

/// A single field of a graph type, compiled from a property, a method, a
/// controller action or a type extension.
#[derive(Clone, Debug)]
pub struct FieldTemplate {
    applied_directives: Vec<AppliedDirectiveTemplate>,
    arguments: Vec<ArgumentTemplate>,
    complexity: Option<f64>,
    declaration: Option<String>,
    declared_expression: Option<std::result::Result<TypeExpression, TypeExpressionParseError>>,
    deprecation: Option<Deprecation>,
    description: Option<String>,
    internal_name: String,
    is_skipped: bool,
    mode: FieldResolutionMode,
    name: String,
    natural_expression: Option<TypeExpression>,
    object_type: String,
    owner: FieldOwner,
    parsed: bool,
    possible_types: IndexSet<String>,
    resolver: SharedTypeResolver,
    return_type: TypeRef,
    route: SchemaItemPath,
    security: SecurityGroup,
    source: FieldSource,
    type_expression: Option<TypeExpression>,
    type_extension_target: Option<String>,
    union: Option<UnionDeclaration>,
}
impl FieldTemplate {
    pub fn new(source: FieldSource, owner: FieldOwner, resolver: SharedTypeResolver) -> Self {
        let internal_name = format!("{}.{}", owner.internal_name, source.member_name());
        let return_type = source.declared_type().to_owned();
        Self {
            applied_directives: vec![],
            arguments: vec![],
            complexity: None,
            declaration: None,
            declared_expression: None,
            deprecation: None,
            description: None,
            internal_name,
            is_skipped: false,
            mode: FieldResolutionMode::PerSourceItem,
            name: source.member_name().to_string(),
            natural_expression: None,
            object_type: well_known::OBJECT.to_string(),
            owner,
            parsed: false,
            possible_types: IndexSet::new(),
            resolver,
            return_type,
            route: SchemaItemPath::default(),
            security: SecurityGroup::default(),
            source,
            type_expression: None,
            type_extension_target: None,
            union: None,
        }
    }

    pub fn applied_directives(&self) -> &[AppliedDirectiveTemplate] {
        self.applied_directives.as_slice()
    }

    /// Every parameter of the backing method, including those excluded from
    /// the schema.
    pub fn arguments(&self) -> &[ArgumentTemplate] {
        self.arguments.as_slice()
    }

    pub fn complexity(&self) -> Option<f64> {
        self.complexity
    }

    /// The member's type as declared: a property's type or a method's
    /// return type.
    pub fn declared_return_type(&self) -> &TypeRef {
        self.source.declared_type()
    }

    pub fn deprecation(&self) -> Option<&Deprecation> {
        self.deprecation.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_skipped(&self) -> bool {
        self.is_skipped
    }

    pub fn mode(&self) -> FieldResolutionMode {
        self.mode
    }

    /// The schema-facing field name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Internal name of the type the field's values are expected to be.
    ///
    /// For resolvers returning the action result type this is re-resolved
    /// from the field's declarations.
    pub fn object_type(&self) -> &str {
        self.object_type.as_str()
    }

    pub fn owner(&self) -> &FieldOwner {
        &self.owner
    }

    /// Internal names of every concrete type the field may return, in
    /// declaration order.
    pub fn possible_types(&self) -> &IndexSet<String> {
        &self.possible_types
    }

    pub fn route(&self) -> &SchemaItemPath {
        &self.route
    }

    /// The schema-facing arguments, in declaration order.
    pub fn schema_arguments(&self) -> impl Iterator<Item = &ArgumentTemplate> {
        self.arguments.iter().filter(|arg| arg.is_part_of_schema())
    }

    /// The security requirements that apply to this field: the owner's
    /// followed by the field's own.
    pub fn security_groups(&self) -> Vec<&SecurityGroup> {
        vec![&self.owner.security, &self.security]
    }

    pub fn source(&self) -> &FieldSource {
        &self.source
    }

    /// Internal name of the type whose instances this field resolves
    /// against: the extended type for type extensions, the owner for members
    /// of a graph type, and nothing for controller actions.
    pub fn source_type(&self) -> Option<&str> {
        match &self.source {
            FieldSource::Action(_) => None,
            FieldSource::TypeExtension(_) => self.type_extension_target.as_deref(),
            FieldSource::Method(_) | FieldSource::Property(_) =>
                Some(self.owner.internal_name.as_str()),
        }
    }

    pub fn type_expression(&self) -> Option<&TypeExpression> {
        self.type_expression.as_ref()
    }

    pub fn union(&self) -> Option<&UnionDeclaration> {
        self.union.as_ref()
    }

    fn build_route(&self, declaration: Option<&FieldDeclaration>) -> SchemaItemPath {
        let name = self.name.as_str();
        match &self.source {
            FieldSource::Method(_) | FieldSource::Property(_) =>
                self.owner.route.child(name),

            FieldSource::Action(method) => {
                let collection =
                    if self.source.is_mutation() {
                        SchemaItemCollection::Mutation
                    } else {
                        SchemaItemCollection::Query
                    };
                let is_root =
                    declaration.is_some_and(|decl| decl.root)
                        || method.annotations.iter().any(|annot| *annot == Annotation::GraphRoot);
                let segments: &[String] =
                    if is_root {
                        &[]
                    } else {
                        self.owner.action_segments.as_slice()
                    };
                SchemaItemPath::join(
                    collection,
                    segments.iter()
                        .map(String::as_str)
                        .chain(std::iter::once(name)),
                )
            },

            FieldSource::TypeExtension(_) => {
                let target = self.type_extension_target.as_deref().unwrap_or_default();
                let target_kind = self.resolver.resolve_type_kind(target, TypeKind::Object);
                SchemaItemPath::join(
                    SchemaItemCollection::Types,
                    [self.resolver.graph_type_name(target, target_kind).as_str(), name],
                )
            },
        }
    }

    fn invalid_field_type(&self, reason: &str) -> TemplateError {
        TemplateError::InvalidFieldType {
            internal_name: self.internal_name.to_owned(),
            field_type: self.source.declared_type().to_string(),
            reason: reason.to_string(),
        }
    }

    fn validate_batch_shape(&self) -> Result<()> {
        let source_type = self.source_type().unwrap_or_default().to_string();
        let has_source_argument =
            self.arguments.iter()
                .any(|arg| arg.modifiers().contains(ArgumentModifiers::SOURCE_DATA));
        if !has_source_argument {
            return Err(TemplateError::MissingBatchSourceArgument {
                internal_name: self.internal_name.to_owned(),
                source_type,
            });
        }

        let returned = self.source.declared_type().unwrap_async();
        let is_valid = match returned {
            TypeRef::Named(type_name) => type_name == well_known::ACTION_RESULT,
            TypeRef::Map(key, value) => {
                let value_type = value.core_type_name();
                self.resolver.is_assignable(source_type.as_str(), key.core_type_name())
                    && self.possible_types.iter()
                        .all(|possible| self.resolver.is_assignable(possible, value_type))
            },
            _ => false,
        };
        if !is_valid {
            return Err(TemplateError::InvalidBatchReturnType {
                internal_name: self.internal_name.to_owned(),
                return_type: returned.to_string(),
                source_type,
            });
        }

        Ok(())
    }

    fn validate_possible_types(&self) -> Result<()> {
        if self.possible_types.is_empty() {
            return Err(TemplateError::EmptyPossibleTypes {
                internal_name: self.internal_name.to_owned(),
                route: self.route.to_string(),
            });
        }

        for possible_type in &self.possible_types {
            if !self.resolver.is_known_type(possible_type) {
                return Err(TemplateError::UnknownType {
                    internal_name: self.internal_name.to_owned(),
                    type_name: possible_type.to_owned(),
                });
            }

            match &self.union {
                Some(union) => {
                    let member_kind =
                        self.resolver.resolve_type_kind(possible_type, TypeKind::Object);
                    if !member_kind.is_valid_union_member() {
                        return Err(TemplateError::InvalidUnionMember {
                            internal_name: self.internal_name.to_owned(),
                            union_name: union.name.to_owned(),
                            member: possible_type.to_owned(),
                            member_kind,
                        });
                    }
                },

                None if self.mode == FieldResolutionMode::PerSourceItem => {
                    if !self.resolver.is_assignable(possible_type, self.object_type.as_str()) {
                        return Err(TemplateError::UnassignablePossibleType {
                            internal_name: self.internal_name.to_owned(),
                            possible_type: possible_type.to_owned(),
                            object_type: self.object_type.to_owned(),
                        });
                    }
                },

                None => (),
            }
        }

        Ok(())
    }
}

#[inherent]
impl SchemaItemTemplate for FieldTemplate {
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
        log::trace!("Parsing field `{}`", self.internal_name);

        let declaration = self.source.declaration().cloned();
        let member_name = self.source.member_name().to_string();
        let provider = self.source.annotations();

        self.name =
            declaration.as_ref()
                .and_then(|decl| decl.name.as_deref())
                .map(|name| {
                    name.replace(constants::ACTION_NAME_PLACEHOLDER, member_name.as_str())
                        .trim()
                        .to_string()
                })
                .filter(|name| !name.is_empty())
                .unwrap_or(member_name);
        self.description = TemplateHelpers::description(provider);
        self.deprecation = TemplateHelpers::deprecation(provider);
        self.security = TemplateHelpers::security_group(provider);
        self.is_skipped = TemplateHelpers::is_skipped(provider);
        self.applied_directives = TemplateHelpers::applied_directives(
            provider,
            self.internal_name.as_str(),
            &self.resolver,
        );
        self.complexity = declaration.as_ref().and_then(|decl| decl.complexity);
        self.union = declaration.as_ref().and_then(|decl| decl.union.to_owned());

        if let Some(extension) = self.source.type_extension() {
            self.type_extension_target = Some(extension.target.trim().to_string());
        }
        self.mode = self.source.resolution_mode();
        self.route = self.build_route(declaration.as_ref());

        let unwrapped = self.source.declared_type().unwrap_async();
        self.return_type = match (self.mode, unwrapped) {
            (FieldResolutionMode::Batch, TypeRef::Map(_, value)) => (**value).to_owned(),
            _ => unwrapped.to_owned(),
        };
        let core_type = self.return_type.core_type_name().to_string();

        self.declaration = declaration.as_ref().and_then(|decl| decl.type_expression.to_owned());
        self.declared_expression =
            self.declaration.as_deref().map(TypeExpression::parse);

        let inline_types: Vec<String> =
            declaration.as_ref()
                .map(|decl| decl.types.iter().map(|type_name| type_name.trim().to_string()).collect())
                .unwrap_or_default();
        let mut possible_types = IndexSet::new();
        match &self.union {
            // A union's members are exactly the types it declares.
            Some(union) =>
                possible_types.extend(union.types.iter().map(|type_name| type_name.trim().to_string())),

            None => {
                for annot in self.source.annotations().annotations(AnnotationFamily::PossibleTypes, true) {
                    if let Annotation::PossibleTypes { types } = annot {
                        possible_types.extend(types.iter().map(|type_name| type_name.trim().to_string()));
                    }
                }
                possible_types.extend(inline_types.iter().cloned());
            },
        }

        self.object_type =
            if core_type == well_known::ACTION_RESULT {
                if self.union.is_some() {
                    well_known::OBJECT.to_string()
                } else if let Some(first) = inline_types.first() {
                    first.to_owned()
                } else if let Some(first) = possible_types.first() {
                    first.to_owned()
                } else {
                    well_known::OBJECT.to_string()
                }
            } else {
                if self.union.is_none() && core_type != well_known::OBJECT {
                    possible_types.shift_insert(0, core_type.to_owned());
                }
                core_type.to_owned()
            };
        self.possible_types = possible_types;

        let natural = TypeExpression::from_type_ref(&self.return_type, &*self.resolver);
        let core_graph_name = match &self.union {
            Some(union) => union.name.trim().to_string(),
            None => {
                let kind = self.resolver.resolve_type_kind(self.object_type.as_str(), self.owner.kind);
                self.resolver.graph_type_name(self.object_type.as_str(), kind)
            },
        };
        let natural = natural.clone_to(core_graph_name);
        self.type_expression = Some(match &self.declared_expression {
            Some(Ok(declared)) => natural.with_declaration(declared),
            _ => natural.to_owned(),
        });
        self.natural_expression = Some(natural);

        let argument_owner = ArgumentOwner::new(
            self.internal_name.as_str(),
            self.route.to_owned(),
            self.source_type().map(str::to_string),
            self.mode,
        );
        let mut claimed = ArgumentModifiers::empty();
        self.arguments =
            self.source.parameters()
                .iter()
                .map(|parameter| {
                    let mut argument = ArgumentTemplate::new(
                        parameter.to_owned(),
                        &argument_owner,
                        self.resolver.clone(),
                    );
                    claimed = argument.parse_with_siblings(claimed);
                    argument
                })
                .collect();

        self.parsed = true;
    }

    pub fn required_types(&self) -> Vec<DependentType> {
        let union_members: IndexSet<&str> =
            self.union.iter()
                .flat_map(|union| union.types.iter().map(|type_name| type_name.trim()))
                .collect();

        let possible_types = self.possible_types.iter().map(|possible_type| {
            let kind =
                if union_members.contains(possible_type.as_str()) {
                    TypeKind::Object
                } else {
                    self.resolver.resolve_type_kind(possible_type, self.owner.kind)
                };
            DependentType::new(possible_type.as_str(), kind)
        });

        let object_type =
            (self.union.is_none()
                && self.object_type != well_known::OBJECT
                && self.object_type != well_known::ACTION_RESULT)
                .then(|| DependentType::new(
                    self.object_type.as_str(),
                    self.resolver.resolve_type_kind(self.object_type.as_str(), self.owner.kind),
                ));

        TemplateHelpers::dedupe_dependent_types(
            possible_types
                .chain(object_type)
                .chain(self.arguments.iter().flat_map(|arg| arg.required_types()))
                .chain(TemplateHelpers::directive_required_types(&self.applied_directives)),
        )
    }

    pub fn validate_or_throw(&self, validate_children: bool) -> Result<()> {
        if !self.parsed {
            return Err(TemplateError::NotParsed {
                internal_name: self.internal_name.to_owned(),
            });
        }
        log::trace!("Validating field `{}`", self.internal_name);

        if self.is_skipped {
            return Err(TemplateError::ExcludedItem {
                internal_name: self.internal_name.to_owned(),
            });
        }

        if !self.route.is_valid() {
            return Err(TemplateHelpers::invalid_route(self.internal_name.as_str(), &self.route));
        }

        for directive in &self.applied_directives {
            directive.validate_or_throw(validate_children)?;
        }

        if self.source.method().is_some_and(|method| method.is_generic) {
            return Err(TemplateError::GenericMethod {
                internal_name: self.internal_name.to_owned(),
            });
        }
        let declared_type = self.source.declared_type();
        if declared_type.is_void() {
            return Err(TemplateError::VoidReturnType {
                internal_name: self.internal_name.to_owned(),
            });
        }
        if declared_type.is_generic_map() && self.mode != FieldResolutionMode::Batch {
            return Err(TemplateError::MapReturnOutsideBatch {
                internal_name: self.internal_name.to_owned(),
                return_type: declared_type.to_string(),
            });
        }
        if self.mode == FieldResolutionMode::Batch
            && !matches!(self.source, FieldSource::TypeExtension(_)) {
            return Err(TemplateError::BatchModeNotSupported {
                internal_name: self.internal_name.to_owned(),
            });
        }

        match (&self.declared_expression, &self.natural_expression) {
            (Some(Err(error)), _) => return Err(TemplateError::InvalidTypeExpression {
                internal_name: self.internal_name.to_owned(),
                declaration: self.declaration.to_owned().unwrap_or_default(),
                error: error.to_owned(),
            }),

            (Some(Ok(declared)), Some(natural))
                if self.return_type.core_type_name() != well_known::ACTION_RESULT
                    && !TemplateHelpers::declaration_matches(declared, natural)
                => return Err(TemplateError::IncompatibleTypeExpression {
                    internal_name: self.internal_name.to_owned(),
                    declared: declared.to_string(),
                    natural: natural.to_string(),
                }),

            _ => (),
        }

        if let Some(union) = &self.union {
            if union.types.is_empty() {
                return Err(TemplateError::EmptyUnion {
                    internal_name: self.internal_name.to_owned(),
                    union_name: union.name.to_owned(),
                });
            }
            if !route::is_valid_graph_name(union.name.trim()) {
                return Err(TemplateError::InvalidUnionName {
                    internal_name: self.internal_name.to_owned(),
                    union_name: union.name.to_owned(),
                });
            }
        }

        self.validate_possible_types()?;

        if let Some(complexity) = self.complexity.filter(|complexity| *complexity < 0.0) {
            return Err(TemplateError::NegativeComplexity {
                internal_name: self.internal_name.to_owned(),
                complexity,
            });
        }

        if self.owner.kind == TypeKind::InputObject {
            let core_type = self.return_type.core_type_name();
            if core_type == well_known::ACTION_RESULT {
                return Err(self.invalid_field_type(
                    "input fields can not be action results",
                ));
            }
            if self.resolver.resolve_type_kind(core_type, TypeKind::InputObject) == TypeKind::Interface {
                return Err(self.invalid_field_type(
                    "input fields can not be interfaces",
                ));
            }
        }

        if let Some(target) = &self.type_extension_target {
            let is_valid_target =
                self.resolver.find_type(target).is_some()
                    && !matches!(
                        self.resolver.resolve_type_kind(target, TypeKind::Object),
                        TypeKind::Enum | TypeKind::Scalar,
                    );
            if !is_valid_target {
                return Err(TemplateError::InvalidTypeExtensionTarget {
                    internal_name: self.internal_name.to_owned(),
                    target: target.to_owned(),
                });
            }
        }

        if self.mode == FieldResolutionMode::Batch {
            self.validate_batch_shape()?;
        }

        let mut argument_names = DuplicateCollector::new();
        for argument in self.schema_arguments() {
            argument_names.add(argument.name(), argument.internal_name());
        }
        let duplicates = argument_names.into_duplicates();
        if !duplicates.is_empty() {
            return Err(TemplateError::DuplicateArgumentNames {
                internal_name: self.internal_name.to_owned(),
                route: self.route.to_string(),
                names:
                    duplicates.into_iter()
                        .map(|(name, _)| name.to_string())
                        .collect(),
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
