use crate::TemplateError;
use crate::constants::well_known;
use crate::meta::SharedTypeResolver;
use crate::meta::TypeShape;
use crate::templates::GraphTypeTemplate;
use crate::templates::TemplateOptions;
use crate::types::TypeKind;
use dashmap::DashMap;
use std::sync::Arc;

type Result<T> = std::result::Result<T, TemplateError>;

/// Builds, parses and validates graph-type templates, and caches the
/// validated results by backing type name and kind.
///
/// The provider is `Sync`, so one instance can serve concurrent schema
/// builds. Templates that fail to compile are never cached.
#[derive(Debug)]
pub struct TemplateProvider {
    cache: DashMap<(String, TypeKind), Arc<GraphTypeTemplate>>,
    options: TemplateOptions,
    resolver: SharedTypeResolver,
}
impl TemplateProvider {
    pub fn new(resolver: SharedTypeResolver, options: TemplateOptions) -> Self {
        Self {
            cache: DashMap::new(),
            options,
            resolver,
        }
    }

    pub fn cached_count(&self) -> usize {
        self.cache.len()
    }

    pub fn clear(&self) {
        log::debug!("Clearing {} cached template(s)", self.cache.len());
        self.cache.clear();
    }

    /// The template kind a backing type compiles to when no kind is
    /// requested explicitly. Input objects are only ever produced on
    /// request.
    pub fn infer_kind(&self, type_name: &str) -> Result<TypeKind> {
        if self.resolver.is_scalar(type_name) {
            return Ok(TypeKind::Scalar);
        }
        let descriptor =
            self.resolver.find_type(type_name)
                .ok_or_else(|| TemplateError::UnknownBackingType {
                    type_name: type_name.to_string(),
                })?;

        let derives_from = |base: &str| {
            type_name != base && self.resolver.is_assignable(type_name, base)
        };
        Ok(if derives_from(well_known::DIRECTIVE_BASE) {
            TypeKind::Directive
        } else if derives_from(well_known::CONTROLLER_BASE) {
            TypeKind::Controller
        } else {
            match descriptor.shape {
                TypeShape::Enum => TypeKind::Enum,
                TypeShape::Interface => TypeKind::Interface,
                TypeShape::Class | TypeShape::Struct => TypeKind::Object,
            }
        })
    }

    pub fn options(&self) -> &TemplateOptions {
        &self.options
    }

    /// Compiles the template of `kind` for the named backing type, or
    /// returns the cached one.
    pub fn parse_type(&self, type_name: &str, kind: TypeKind) -> Result<Arc<GraphTypeTemplate>> {
        let key = (type_name.to_string(), kind);
        if let Some(cached) = self.cache.get(&key) {
            log::debug!("Template cache hit for {kind} `{type_name}`");
            return Ok(cached.value().clone());
        }

        log::debug!("Template cache miss for {kind} `{type_name}`");
        let descriptor =
            self.resolver.find_type(type_name)
                .ok_or_else(|| TemplateError::UnknownBackingType {
                    type_name: type_name.to_string(),
                })?;
        let mut template = GraphTypeTemplate::new(
            descriptor,
            kind,
            self.resolver.clone(),
            self.options.to_owned(),
        )?;
        template.parse();
        template.validate_or_throw(true)?;

        // A concurrent build of the same type may have landed first.
        let template = self.cache.entry(key)
            .or_insert_with(|| Arc::new(template))
            .value()
            .clone();
        Ok(template)
    }

    /// Compiles the named backing type as the kind [`Self::infer_kind`]
    /// picks for it.
    pub fn parse_type_auto(&self, type_name: &str) -> Result<Arc<GraphTypeTemplate>> {
        let kind = self.infer_kind(type_name)?;
        self.parse_type(type_name, kind)
    }

    pub fn resolver(&self) -> &SharedTypeResolver {
        &self.resolver
    }
}
