use crate::TemplateError;
use crate::meta::Annotation;
use crate::meta::AnnotationFamily;
use crate::meta::AnnotationProvider;
use crate::meta::EnumMemberDescriptor;
use crate::meta::EnumRepr;
use crate::meta::SharedTypeResolver;
use crate::route::SchemaItemPath;
use crate::templates::AppliedDirectiveTemplate;
use crate::templates::Deprecation;
use crate::templates::SchemaItemTemplate;
use crate::templates::TemplateHelpers;
use crate::types::DependentType;
use inherent::inherent;

type Result<T> = std::result::Result<T, TemplateError>;

/// One label of an enum type.
#[derive(Clone, Debug)]
pub struct EnumValueTemplate {
    applied_directives: Vec<AppliedDirectiveTemplate>,
    deprecation: Option<Deprecation>,
    description: Option<String>,
    internal_name: String,
    is_skipped: bool,
    member: EnumMemberDescriptor,
    name: String,
    parsed: bool,
    repr: EnumRepr,
    resolver: SharedTypeResolver,
    route: SchemaItemPath,
    value: String,
}
impl EnumValueTemplate {
    pub fn new(
        member: EnumMemberDescriptor,
        enum_internal_name: &str,
        enum_route: &SchemaItemPath,
        repr: EnumRepr,
        resolver: SharedTypeResolver,
    ) -> Self {
        Self {
            applied_directives: vec![],
            deprecation: None,
            description: None,
            internal_name: format!("{enum_internal_name}.{}", member.name),
            is_skipped: false,
            name: member.name.to_owned(),
            parsed: false,
            repr,
            resolver,
            route: enum_route.child(member.name.as_str()),
            value: repr.canonical_value(member.value),
            member,
        }
    }

    pub fn applied_directives(&self) -> &[AppliedDirectiveTemplate] {
        self.applied_directives.as_slice()
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

    /// The language-level label.
    pub fn label(&self) -> &str {
        self.member.name.as_str()
    }

    /// The schema-facing name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn route(&self) -> &SchemaItemPath {
        &self.route
    }

    /// The underlying numeric value as rendered by the enum's
    /// representation (e.g. `-1` for `255` in an `i8` enum).
    pub fn value(&self) -> &str {
        self.value.as_str()
    }
}

#[inherent]
impl SchemaItemTemplate for EnumValueTemplate {
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

        let renamed =
            self.member.first_annotation(AnnotationFamily::EnumValue)
                .and_then(|annot| match annot {
                    Annotation::EnumValue { name } => Some(name.trim().to_string()),
                    _ => None,
                })
                .filter(|name| !name.is_empty());
        if let Some(name) = renamed {
            self.route = self.route.parent().unwrap_or_default().child(name.as_str());
            self.name = name;
        }

        self.value = self.repr.canonical_value(self.member.value);
        self.description = TemplateHelpers::description(&self.member);
        self.deprecation = TemplateHelpers::deprecation(&self.member);
        self.is_skipped = TemplateHelpers::is_skipped(&self.member);
        self.applied_directives = TemplateHelpers::applied_directives(
            &self.member,
            self.internal_name.as_str(),
            &self.resolver,
        );
        self.parsed = true;
    }

    pub fn required_types(&self) -> Vec<DependentType> {
        TemplateHelpers::dedupe_dependent_types(
            TemplateHelpers::directive_required_types(&self.applied_directives),
        )
    }

    pub fn validate_or_throw(&self, validate_children: bool) -> Result<()> {
        if !self.parsed {
            return Err(TemplateError::NotParsed {
                internal_name: self.internal_name.to_owned(),
            });
        }
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
        Ok(())
    }
}
