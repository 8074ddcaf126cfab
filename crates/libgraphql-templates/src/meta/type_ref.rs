use crate::meta::TypeRefParseError;
use std::str::FromStr;

type Result<T> = std::result::Result<T, TypeRefParseError>;

/// The language-level shape of a declared type: a property's type, a
/// method's return type or a parameter's type.
///
/// Written and parsed as `void`, `Name`, `Option<T>`, `List<T>`,
/// `Map<K, V>` or `Async<T>` (e.g. `Async<Map<shop.Order, List<shop.Item>>>`).
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(try_from = "String", into = "String")]
pub enum TypeRef {
    /// A deferred value; transparent to the graph.
    Async(Box<TypeRef>),
    List(Box<TypeRef>),
    Map(Box<TypeRef>, Box<TypeRef>),
    Named(String),
    Optional(Box<TypeRef>),
    Void,
}
impl TypeRef {
    pub const VOID_NAME: &'static str = "void";

    pub fn asynchronous(inner: TypeRef) -> Self {
        Self::Async(Box::new(inner))
    }

    pub fn list(inner: TypeRef) -> Self {
        Self::List(Box::new(inner))
    }

    pub fn map(key: TypeRef, value: TypeRef) -> Self {
        Self::Map(Box::new(key), Box::new(value))
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn optional(inner: TypeRef) -> Self {
        Self::Optional(Box::new(inner))
    }

    /// The innermost named type. A `Map` is described by its value type.
    pub fn core_type_name(&self) -> &str {
        match self {
            Self::Async(inner)
                | Self::List(inner)
                | Self::Optional(inner)
                | Self::Map(_, inner)
                => inner.core_type_name(),
            Self::Named(name) => name.as_str(),
            Self::Void => Self::VOID_NAME,
        }
    }

    pub fn is_generic_map(&self) -> bool {
        matches!(self.unwrap_async(), Self::Map(_, _))
    }

    /// `void` and `Async<void>` both produce no value.
    pub fn is_void(&self) -> bool {
        matches!(self.unwrap_async(), Self::Void)
    }

    /// Strips any number of `Async` wrappers.
    pub fn unwrap_async(&self) -> &TypeRef {
        match self {
            Self::Async(inner) => inner.unwrap_async(),
            other => other,
        }
    }

    /// Strips a top-level `Option` (after any `Async` wrappers).
    pub fn unwrap_optional(&self) -> &TypeRef {
        match self.unwrap_async() {
            Self::Optional(inner) => inner,
            other => other,
        }
    }
}
impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Async(inner) => write!(f, "Async<{inner}>"),
            Self::List(inner) => write!(f, "List<{inner}>"),
            Self::Map(key, value) => write!(f, "Map<{key}, {value}>"),
            Self::Named(name) => f.write_str(name),
            Self::Optional(inner) => write!(f, "Option<{inner}>"),
            Self::Void => f.write_str(Self::VOID_NAME),
        }
    }
}
impl FromStr for TypeRef {
    type Err = TypeRefParseError;

    fn from_str(input: &str) -> Result<Self> {
        let mut parser = TypeRefParser {
            input,
            offset: 0,
        };
        let type_ref = parser.parse_type_ref()?;
        parser.skip_whitespace();
        if parser.offset < input.len() {
            return Err(TypeRefParseError::TrailingInput {
                input: input.to_string(),
                offset: parser.offset,
            });
        }
        Ok(type_ref)
    }
}
impl TryFrom<String> for TypeRef {
    type Error = TypeRefParseError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}
impl From<TypeRef> for String {
    fn from(value: TypeRef) -> Self {
        value.to_string()
    }
}

struct TypeRefParser<'src> {
    input: &'src str,
    offset: usize,
}
impl<'src> TypeRefParser<'src> {
    fn expect(&mut self, expected: char) -> Result<()> {
        self.skip_whitespace();
        if self.remaining().starts_with(expected) {
            self.offset += expected.len_utf8();
            Ok(())
        } else {
            Err(TypeRefParseError::ExpectedToken {
                input: self.input.to_string(),
                expected,
                offset: self.offset,
            })
        }
    }

    fn parse_name(&mut self) -> Result<&'src str> {
        self.skip_whitespace();
        let remaining = self.remaining();
        let len =
            remaining.find(|c: char| !(c.is_alphanumeric() || c == '_' || c == '.'))
                .unwrap_or(remaining.len());
        if len == 0 {
            return Err(TypeRefParseError::ExpectedTypeName {
                input: self.input.to_string(),
                offset: self.offset,
            });
        }
        self.offset += len;
        Ok(&remaining[..len])
    }

    fn parse_type_ref(&mut self) -> Result<TypeRef> {
        let name = self.parse_name()?;
        self.skip_whitespace();
        if !self.remaining().starts_with('<') {
            return Ok(match name {
                TypeRef::VOID_NAME => TypeRef::Void,
                _ => TypeRef::named(name),
            });
        }

        self.expect('<')?;
        let mut params = vec![self.parse_type_ref()?];
        loop {
            self.skip_whitespace();
            if self.remaining().starts_with(',') {
                self.expect(',')?;
                params.push(self.parse_type_ref()?);
            } else {
                break;
            }
        }
        self.expect('>')?;

        let mut params = params.into_iter();
        match (name, params.next(), params.next(), params.next()) {
            ("Async", Some(inner), None, None) => Ok(TypeRef::asynchronous(inner)),
            ("List", Some(inner), None, None) => Ok(TypeRef::list(inner)),
            ("Option", Some(inner), None, None) => Ok(TypeRef::optional(inner)),
            ("Map", Some(key), Some(value), None) => Ok(TypeRef::map(key, value)),
            ("Async" | "List" | "Option" | "Map", _, _, _) =>
                Err(TypeRefParseError::WrongParameterCount {
                    input: self.input.to_string(),
                    wrapper: name.to_string(),
                    expected: if name == "Map" { 2 } else { 1 },
                }),
            _ => Err(TypeRefParseError::UnknownWrapper {
                input: self.input.to_string(),
                wrapper: name.to_string(),
            }),
        }
    }

    fn remaining(&self) -> &'src str {
        &self.input[self.offset..]
    }

    fn skip_whitespace(&mut self) {
        let remaining = self.remaining();
        self.offset += remaining.len() - remaining.trim_start().len();
    }
}
