/// Marks a field or enum value as deprecated.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Deprecation {
    pub(crate) reason: Option<String>,
}
impl Deprecation {
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }
}
