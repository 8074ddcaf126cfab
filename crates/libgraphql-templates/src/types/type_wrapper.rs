/// One level of wrapping applied to the core type of a
/// [`TypeExpression`](crate::types::TypeExpression).
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeWrapper {
    List,
    NotNull,
}
