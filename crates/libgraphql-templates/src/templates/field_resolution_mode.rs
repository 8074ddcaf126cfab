/// How a field's resolver is invoked.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FieldResolutionMode {
    /// Once for every source item being resolved.
    #[default]
    PerSourceItem,

    /// Once for the whole set of source items, returning a value per item.
    Batch,
}
