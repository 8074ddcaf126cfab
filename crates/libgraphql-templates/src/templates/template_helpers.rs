use crate::constants;
use crate::meta::Annotation;
use crate::meta::AnnotationFamily;
use crate::meta::AnnotationProvider;
use crate::meta::SharedTypeResolver;
use crate::meta::TypeDescriptor;
use crate::meta::TypeResolver;
use crate::meta::TypeShape;
use crate::route::SchemaItemPath;
use crate::templates::AppliedDirectiveTemplate;
use crate::templates::AppliedSecurityPolicy;
use crate::templates::Deprecation;
use crate::templates::FieldContainer;
use crate::templates::FieldOwner;
use crate::templates::FieldSource;
use crate::templates::FieldTemplate;
use crate::templates::SecurityGroup;
use crate::templates::TemplateOptions;
use crate::TemplateError;
use crate::types::DependentType;
use crate::types::TypeExpression;
use indexmap::IndexSet;

/// Reads the annotations every kind of template interprets the same way.
pub(crate) struct TemplateHelpers;
impl TemplateHelpers {
    /// Builds (and parses) a template for every `ApplyDirective` annotation,
    /// in declaration order.
    pub fn applied_directives<P: AnnotationProvider + ?Sized>(
        provider: &P,
        owner_name: &str,
        resolver: &SharedTypeResolver,
    ) -> Vec<AppliedDirectiveTemplate> {
        provider.annotations(AnnotationFamily::ApplyDirective, true)
            .into_iter()
            .filter_map(|annot| match annot {
                Annotation::ApplyDirective(application) => {
                    let mut template = AppliedDirectiveTemplate::new(
                        owner_name,
                        application,
                        resolver.clone(),
                    );
                    template.parse();
                    Some(template)
                },
                _ => None,
            })
            .collect()
    }

    /// An explicit type expression is accepted when, ignoring nullability,
    /// it has the same list structure as the natural expression and names
    /// either the `Type` placeholder or the natural core type.
    pub fn declaration_matches(declared: &TypeExpression, natural: &TypeExpression) -> bool {
        let candidate =
            if declared.type_name() == constants::TYPE_EXPRESSION_PLACEHOLDER {
                declared.clone_to(natural.type_name())
            } else {
                declared.to_owned()
            };
        TypeExpression::are_compatible(
            &candidate.without_nullability(),
            &natural.without_nullability(),
        )
    }

    /// The interfaces a type implements (or extends) that are described as
    /// interfaces.
    pub fn declared_interfaces(
        descriptor: &TypeDescriptor,
        resolver: &dyn TypeResolver,
    ) -> Vec<String> {
        descriptor.interfaces.iter()
            .filter(|iface| {
                resolver.find_type(iface)
                    .is_some_and(|iface| iface.shape == TypeShape::Interface)
            })
            .cloned()
            .collect()
    }

    pub fn deprecation<P: AnnotationProvider + ?Sized>(provider: &P) -> Option<Deprecation> {
        provider.first_annotation(AnnotationFamily::Deprecated)
            .and_then(|annot| match annot {
                Annotation::Deprecated { reason } => Some(Deprecation {
                    reason: reason.as_deref()
                        .map(str::trim)
                        .filter(|reason| !reason.is_empty())
                        .map(str::to_string),
                }),
                _ => None,
            })
    }

    pub fn description<P: AnnotationProvider + ?Sized>(provider: &P) -> Option<String> {
        provider.first_annotation(AnnotationFamily::Description)
            .and_then(|annot| match annot {
                Annotation::Description { text } => Some(text.trim().to_string()),
                _ => None,
            })
            .filter(|text| !text.is_empty())
    }

    /// Deduplicates dependent types, keeping first-seen order.
    pub fn dedupe_dependent_types(
        types: impl IntoIterator<Item = DependentType>,
    ) -> Vec<DependentType> {
        types.into_iter()
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn directive_required_types(
        directives: &[AppliedDirectiveTemplate],
    ) -> impl Iterator<Item = DependentType> + '_ {
        directives.iter().flat_map(|directive| directive.required_types())
    }

    pub fn invalid_route(internal_name: &str, route: &SchemaItemPath) -> TemplateError {
        TemplateError::InvalidRoute {
            internal_name: internal_name.to_string(),
            route: route.to_string(),
            invalid_segments:
                route.invalid_segments()
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
        }
    }

    pub fn is_skipped<P: AnnotationProvider + ?Sized>(provider: &P) -> bool {
        provider.has_annotation(AnnotationFamily::Skip)
    }

    pub fn security_group<P: AnnotationProvider + ?Sized>(provider: &P) -> SecurityGroup {
        let mut group = SecurityGroup::default();
        for annot in provider.declared_annotations()
            .iter()
            .chain(provider.inherited_annotations().iter()) {
            match annot {
                Annotation::AllowAnonymous => group.allow_anonymous = true,
                Annotation::Authorize { policy, roles } =>
                    group.policies.push(AppliedSecurityPolicy {
                        policy: policy.to_owned(),
                        roles: roles.to_owned(),
                    }),
                _ => (),
            }
        }
        group
    }

    /// Collects the fields of an object or interface type: properties with
    /// a getter, and methods that return a value and are not generic.
    /// Members marked `Skip` are never collected. Depending on `options`,
    /// members without a `GraphField` declaration are left out as well.
    pub fn output_fields(
        descriptor: &TypeDescriptor,
        owner: &FieldOwner,
        resolver: &SharedTypeResolver,
        options: &TemplateOptions,
    ) -> FieldContainer {
        let mut fields = FieldContainer::new();

        for property in &descriptor.properties {
            if Self::is_skipped(property) {
                continue;
            }
            let is_declared = property.has_annotation(AnnotationFamily::GraphField);
            let is_auto_included =
                !options.require_property_declarations && property.has_getter;
            if is_declared || is_auto_included {
                fields.push(FieldTemplate::new(
                    FieldSource::Property(property.to_owned()),
                    owner.to_owned(),
                    resolver.clone(),
                ));
            }
        }

        for method in &descriptor.methods {
            if Self::is_skipped(method) {
                continue;
            }
            let is_declared = method.has_annotation(AnnotationFamily::GraphField);
            let is_auto_included =
                !options.require_method_declarations
                    && !method.return_type.is_void()
                    && !method.is_generic
                    && method.first_annotation(AnnotationFamily::Query).is_none()
                    && method.first_annotation(AnnotationFamily::Mutation).is_none()
                    && method.first_annotation(AnnotationFamily::TypeExtension).is_none();
            if is_declared || is_auto_included {
                fields.push(FieldTemplate::new(
                    FieldSource::Method(method.to_owned()),
                    owner.to_owned(),
                    resolver.clone(),
                ));
            }
        }

        fields
    }
}
