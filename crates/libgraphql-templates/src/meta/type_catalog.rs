use crate::constants;
use crate::constants::well_known;
use crate::meta::Annotation;
use crate::meta::AnnotationFamily;
use crate::meta::AnnotationProvider;
use crate::meta::MetadataError;
use crate::meta::ScalarDeclaration;
use crate::meta::TypeDescriptor;
use crate::meta::TypeResolver;
use crate::meta::TypeShape;
use crate::meta::short_name;
use crate::types::TypeKind;
use indexmap::IndexMap;
use std::sync::Arc;

type Result<T> = std::result::Result<T, MetadataError>;

/// The default [`TypeResolver`]: an in-memory set of [`TypeDescriptor`]s and
/// [`ScalarDeclaration`]s.
///
/// A new catalog is pre-loaded with the built-in scalars and the well-known
/// framework types.
#[derive(Debug)]
pub struct TypeCatalog {
    input_object_prefix: String,
    scalars: IndexMap<String, ScalarDeclaration>,
    types: IndexMap<String, Arc<TypeDescriptor>>,
}
impl TypeCatalog {
    pub fn new() -> Self {
        let mut catalog = Self {
            input_object_prefix: constants::DEFAULT_INPUT_OBJECT_PREFIX.to_string(),
            scalars: IndexMap::new(),
            types: IndexMap::new(),
        };

        for (type_name, graph_name, value_type) in BUILTIN_SCALARS {
            catalog.scalars.insert(
                type_name.to_string(),
                ScalarDeclaration::new(*type_name, *graph_name, *value_type),
            );
        }

        let object = TypeDescriptor::new(well_known::OBJECT, TypeShape::Class);
        let action_result =
            TypeDescriptor::new(well_known::ACTION_RESULT, TypeShape::Interface);
        let cancellation_signal =
            TypeDescriptor::new(well_known::CANCELLATION_SIGNAL, TypeShape::Struct);
        let directive_base =
            TypeDescriptor::new(well_known::DIRECTIVE_BASE, TypeShape::Class);
        let controller_base =
            TypeDescriptor::new(well_known::CONTROLLER_BASE, TypeShape::Class);
        for descriptor in [
            object,
            action_result,
            cancellation_signal,
            directive_base,
            controller_base,
        ] {
            catalog.types.insert(descriptor.name.to_owned(), Arc::new(descriptor));
        }

        catalog
    }

    /// Adds a described type.
    pub fn insert_type(&mut self, descriptor: TypeDescriptor) -> Result<()> {
        if self.types.contains_key(descriptor.name.as_str())
            || self.scalars.contains_key(descriptor.name.as_str()) {
            return Err(MetadataError::DuplicateType {
                type_name: descriptor.name,
            });
        }
        log::trace!("Cataloging type `{}`", descriptor.name);
        self.types.insert(descriptor.name.to_owned(), Arc::new(descriptor));
        Ok(())
    }

    /// Registers an additional scalar.
    pub fn register_scalar(&mut self, scalar: ScalarDeclaration) -> Result<()> {
        if self.scalars.contains_key(scalar.type_name.as_str())
            || self.types.contains_key(scalar.type_name.as_str()) {
            return Err(MetadataError::DuplicateScalar {
                type_name: scalar.type_name,
            });
        }
        self.scalars.insert(scalar.type_name.to_owned(), scalar);
        Ok(())
    }

    pub fn scalars(&self) -> impl Iterator<Item = &ScalarDeclaration> {
        self.scalars.values()
    }

    pub fn set_input_object_prefix(&mut self, prefix: impl Into<String>) {
        self.input_object_prefix = prefix.into();
    }

    pub fn types(&self) -> impl Iterator<Item = &Arc<TypeDescriptor>> {
        self.types.values()
    }

    pub fn with_types(
        types: impl IntoIterator<Item = TypeDescriptor>,
    ) -> Result<Self> {
        let mut catalog = Self::new();
        for descriptor in types {
            catalog.insert_type(descriptor)?;
        }
        Ok(catalog)
    }
}
impl Default for TypeCatalog {
    fn default() -> Self {
        Self::new()
    }
}
impl TypeResolver for TypeCatalog {
    fn find_type(&self, type_name: &str) -> Option<Arc<TypeDescriptor>> {
        self.types.get(type_name).cloned()
    }

    fn graph_type_name(&self, type_name: &str, kind: TypeKind) -> String {
        if let Some(scalar) = self.scalars.get(type_name) {
            return scalar.graph_name.to_owned();
        }

        let Some(descriptor) = self.types.get(type_name) else {
            return short_name(type_name).to_string();
        };

        let explicit_name =
            descriptor.annotations(AnnotationFamily::GraphType, false)
                .into_iter()
                .find_map(|annot| match annot {
                    Annotation::GraphType { name } => Some(name.trim()),
                    _ => None,
                })
                .filter(|name| !name.is_empty());

        match (explicit_name, kind) {
            (Some(name), _) => name.to_string(),
            (None, TypeKind::InputObject) =>
                format!("{}{}", self.input_object_prefix, descriptor.short_name()),
            (None, _) => descriptor.short_name().to_string(),
        }
    }

    fn is_scalar(&self, type_name: &str) -> bool {
        self.scalars.contains_key(type_name)
    }

    fn is_value_type(&self, type_name: &str) -> bool {
        if let Some(scalar) = self.scalars.get(type_name) {
            return scalar.value_type;
        }
        self.types.get(type_name)
            .is_some_and(|descriptor| descriptor.shape.is_value_type())
    }
}

const BUILTIN_SCALARS: &[(&str, &str, bool)] = &[
    ("i32", "Int", true),
    ("i64", "Long", true),
    ("u32", "UInt", true),
    ("u64", "ULong", true),
    ("f64", "Float", true),
    ("decimal", "Decimal", true),
    ("bool", "Boolean", true),
    ("String", "String", false),
    ("graph.Id", "ID", true),
    ("graph.DateTime", "DateTime", true),
];
