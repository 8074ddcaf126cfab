use crate::constants::well_known;
use crate::meta::TypeDescriptor;
use crate::meta::TypeRef;
use crate::meta::TypeShape;
use crate::types::TypeKind;
use indexmap::IndexSet;
use std::collections::VecDeque;
use std::sync::Arc;

pub type SharedTypeResolver = Arc<dyn TypeResolver>;

/// Resolves internal type names to their descriptors, scalar registrations
/// and schema-facing names.
pub trait TypeResolver: std::fmt::Debug + Send + Sync {
    fn find_type(&self, type_name: &str) -> Option<Arc<TypeDescriptor>>;

    /// The schema-facing name of a type when it is used as the given kind.
    fn graph_type_name(&self, type_name: &str, kind: TypeKind) -> String;

    fn is_scalar(&self, type_name: &str) -> bool;

    /// Whether values of the type are never absent unless wrapped in an
    /// `Option`.
    fn is_value_type(&self, type_name: &str) -> bool;

    fn core_type_name<'a>(&self, type_ref: &'a TypeRef) -> &'a str {
        type_ref.core_type_name()
    }

    /// Whether a value of `from` can be used where `to` is expected: `from`
    /// is `to`, derives from it, or implements it. Everything is assignable
    /// to the generic object type.
    fn is_assignable(&self, from: &str, to: &str) -> bool {
        if from == to || to == well_known::OBJECT {
            return true;
        }

        let mut seen = IndexSet::new();
        let mut queue = VecDeque::from([from.to_string()]);
        while let Some(current) = queue.pop_front() {
            if !seen.insert(current.to_owned()) {
                continue;
            }
            let Some(descriptor) = self.find_type(current.as_str()) else {
                continue;
            };
            for ancestor in descriptor.base_types.iter().chain(descriptor.interfaces.iter()) {
                if ancestor == to {
                    return true;
                }
                queue.push_back(ancestor.to_owned());
            }
        }
        false
    }

    fn is_known_type(&self, type_name: &str) -> bool {
        self.is_scalar(type_name) || self.find_type(type_name).is_some()
    }

    /// Infers the graph kind a type takes when referenced from an item of
    /// `owner_kind`. References from input objects (and arguments, which
    /// pass [`TypeKind::InputObject`]) resolve object-like types as input
    /// objects.
    fn resolve_type_kind(&self, type_name: &str, owner_kind: TypeKind) -> TypeKind {
        if self.is_scalar(type_name) {
            return TypeKind::Scalar;
        }
        match self.find_type(type_name).map(|descriptor| descriptor.shape) {
            Some(TypeShape::Enum) => TypeKind::Enum,
            Some(TypeShape::Interface) => TypeKind::Interface,
            _ if owner_kind == TypeKind::InputObject => TypeKind::InputObject,
            _ => TypeKind::Object,
        }
    }
}
