use crate::TemplateError;
use crate::types::DependentType;

type Result<T> = std::result::Result<T, TemplateError>;

/// The lifecycle shared by every template: construct, [`parse`], then
/// [`validate_or_throw`], after which the template is only queried.
///
/// [`parse`]: SchemaItemTemplate::parse
/// [`validate_or_throw`]: SchemaItemTemplate::validate_or_throw
pub trait SchemaItemTemplate {
    /// The fully qualified internal name of the backing metadata element
    /// (e.g. `shop.Widget.Price`).
    fn internal_name(&self) -> &str;

    fn is_parsed(&self) -> bool;

    /// Walks the backing metadata once. Calling this again has no effect.
    ///
    /// Parsing never fails; anything wrong with the metadata is reported by
    /// [`SchemaItemTemplate::validate_or_throw`].
    fn parse(&mut self);

    /// Every type this item needs present in the schema, deduplicated, in
    /// first-seen order.
    fn required_types(&self) -> Vec<DependentType>;

    /// Returns the first structural violation found. Child templates are
    /// only validated when `validate_children` is set.
    fn validate_or_throw(&self, validate_children: bool) -> Result<()>;
}
