use indexmap::IndexMap;

/// A language-level constant: a parameter's default value, an input field's
/// initial value, or an argument passed to an applied directive.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Object(IndexMap<String, Value>),

    /// An enum label. Never produced by deserialization (a JSON string is
    /// always a [`Value::String`]); produced when a numeric default is coerced
    /// into the matching label of an enum-typed argument.
    Enum(String),
}
impl Value {
    pub fn as_int(&self) -> Option<i64> {
        if let Self::Int(int) = self {
            Some(*int)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(str) | Self::Enum(str) => Some(str.as_str()),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Renders this value using GraphQL literal syntax.
    pub fn to_graphql_string(&self) -> String {
        match self {
            Self::Null => "null".to_string(),
            Self::Bool(value) => value.to_string(),
            Self::Int(value) => value.to_string(),
            Self::Float(value) => value.to_string(),
            Self::String(value) => format!("{value:?}"),
            Self::Enum(label) => label.to_string(),
            Self::List(values) => format!(
                "[{}]",
                values.iter()
                    .map(|value| value.to_graphql_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            Self::Object(entries) => format!(
                "{{{}}}",
                entries.iter()
                    .map(|(key, value)| format!("{key}: {}", value.to_graphql_string()))
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
        }
    }
}
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_graphql_string())
    }
}
