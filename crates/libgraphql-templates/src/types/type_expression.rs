use crate::meta::TypeRef;
use crate::meta::TypeResolver;
use crate::route;
use crate::types::TypeExpressionParseError;
use crate::types::TypeWrapper;
use smallvec::SmallVec;

type Wrappers = SmallVec<[TypeWrapper; 4]>;

/// The canonical list/nullability-annotated reference to a core named type
/// (e.g. `[Int!]!`).
///
/// Wrappers are stored outermost first: `[Int!]!` is
/// `[NotNull, List, NotNull]` around the core type `Int`. An expression with no
/// wrappers is a nullable reference to its core type.
#[derive(
    Clone,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct TypeExpression {
    type_name: String,
    wrappers: Wrappers,
}
impl TypeExpression {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            wrappers: SmallVec::new(),
        }
    }

    /// Two expressions are compatible when their wrapper stacks are
    /// structurally identical and their core type names match.
    pub fn are_compatible(a: &Self, b: &Self) -> bool {
        a.wrappers == b.wrappers && a.type_name == b.type_name
    }

    /// Produces a copy of this expression that keeps every wrapper but refers
    /// to a different core type.
    pub fn clone_to(&self, type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            wrappers: self.wrappers.clone(),
        }
    }

    /// Builds the natural expression for a language-level type shape.
    ///
    /// Lists are reference shapes and are therefore nullable. A named value
    /// type is non-null unless it is wrapped in `Option`. Named reference types
    /// are nullable. Asynchronous wrappers are transparent. A `Map` is
    /// described by its value type. The resulting core type name is the
    /// internal name of the innermost type; callers relabel it with
    /// [`TypeExpression::clone_to`] once the schema-facing name is known.
    pub fn from_type_ref(type_ref: &TypeRef, resolver: &dyn TypeResolver) -> Self {
        let mut wrappers = Wrappers::new();
        let type_name =
            Self::collect_wrappers(type_ref, resolver, false, &mut wrappers);
        Self {
            type_name: type_name.to_string(),
            wrappers,
        }
    }

    fn collect_wrappers<'a>(
        type_ref: &'a TypeRef,
        resolver: &dyn TypeResolver,
        optional: bool,
        wrappers: &mut Wrappers,
    ) -> &'a str {
        match type_ref {
            TypeRef::Async(inner) =>
                Self::collect_wrappers(inner, resolver, optional, wrappers),

            TypeRef::Optional(inner) =>
                Self::collect_wrappers(inner, resolver, true, wrappers),

            TypeRef::List(inner) => {
                wrappers.push(TypeWrapper::List);
                Self::collect_wrappers(inner, resolver, false, wrappers)
            },

            TypeRef::Map(_, value) =>
                Self::collect_wrappers(value, resolver, optional, wrappers),

            TypeRef::Named(name) => {
                if !optional && resolver.is_value_type(name) {
                    wrappers.push(TypeWrapper::NotNull);
                }
                name.as_str()
            },

            TypeRef::Void => TypeRef::VOID_NAME,
        }
    }

    /// Parses a GraphQL-syntax declaration such as `[Type!]!`.
    ///
    /// The core type name inside a declaration is only a placeholder; apply
    /// the declaration to a concrete expression with
    /// [`TypeExpression::with_declaration`].
    pub fn parse(declaration: &str) -> Result<Self, TypeExpressionParseError> {
        let trimmed: String =
            declaration.chars()
                .filter(|c| !c.is_whitespace())
                .collect();
        if trimmed.is_empty() {
            return Err(TypeExpressionParseError::Empty);
        }

        let mut wrappers = Wrappers::new();
        let mut remaining = trimmed.as_str();
        loop {
            if let Some(inner) = remaining.strip_suffix('!') {
                if inner.ends_with('!') {
                    return Err(TypeExpressionParseError::DuplicateNonNullMarker {
                        declaration: declaration.to_string(),
                    });
                }
                wrappers.push(TypeWrapper::NotNull);
                remaining = inner;
            }

            match (remaining.strip_prefix('['), remaining.ends_with(']')) {
                (Some(rest), true) => {
                    wrappers.push(TypeWrapper::List);
                    remaining = &rest[..rest.len() - 1];
                },

                (None, false) => break,

                _ => return Err(TypeExpressionParseError::UnbalancedBrackets {
                    declaration: declaration.to_string(),
                }),
            }
        }

        if remaining.contains(['[', ']']) {
            return Err(TypeExpressionParseError::UnbalancedBrackets {
                declaration: declaration.to_string(),
            });
        }
        if !route::is_valid_graph_name(remaining) {
            return Err(TypeExpressionParseError::InvalidCoreTypeName {
                name: remaining.to_string(),
            });
        }

        Ok(Self {
            type_name: remaining.to_string(),
            wrappers,
        })
    }

    /// Replaces this expression's wrappers wholesale with those of an
    /// explicit declaration while keeping this expression's core type.
    pub fn with_declaration(&self, declaration: &Self) -> Self {
        declaration.clone_to(self.type_name.as_str())
    }

    /// Indicates if any level of this expression is a list.
    pub fn is_list(&self) -> bool {
        self.wrappers.contains(&TypeWrapper::List)
    }

    /// Indicates if the outermost level of this expression accepts `null`.
    pub fn is_nullable(&self) -> bool {
        self.wrappers.first() != Some(&TypeWrapper::NotNull)
    }

    /// The core type name this expression wraps.
    pub fn type_name(&self) -> &str {
        self.type_name.as_str()
    }

    /// Removes a leading [`TypeWrapper::NotNull`], if present.
    pub fn unwrap_outer_not_null(&self) -> Self {
        let mut wrappers = self.wrappers.clone();
        if wrappers.first() == Some(&TypeWrapper::NotNull) {
            wrappers.remove(0);
        }
        Self {
            type_name: self.type_name.to_owned(),
            wrappers,
        }
    }

    /// Strips every [`TypeWrapper::NotNull`], keeping only the list structure.
    pub fn without_nullability(&self) -> Self {
        Self {
            type_name: self.type_name.to_owned(),
            wrappers:
                self.wrappers.iter()
                    .copied()
                    .filter(|wrapper| *wrapper != TypeWrapper::NotNull)
                    .collect(),
        }
    }

    /// Adds a new outermost wrapper.
    pub fn wrap(mut self, wrapper: TypeWrapper) -> Self {
        self.wrappers.insert(0, wrapper);
        self
    }

    /// The wrapper stack, outermost first.
    pub fn wrappers(&self) -> &[TypeWrapper] {
        self.wrappers.as_slice()
    }
}
impl std::fmt::Display for TypeExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut rendered = self.type_name.to_owned();
        for wrapper in self.wrappers.iter().rev() {
            rendered = match wrapper {
                TypeWrapper::List => format!("[{rendered}]"),
                TypeWrapper::NotNull => format!("{rendered}!"),
            };
        }
        f.write_str(rendered.as_str())
    }
}
