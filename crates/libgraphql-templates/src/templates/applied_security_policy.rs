/// One declared security requirement: a named policy, a set of roles, or
/// both.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct AppliedSecurityPolicy {
    pub(crate) policy: Option<String>,
    pub(crate) roles: Vec<String>,
}
impl AppliedSecurityPolicy {
    pub fn policy(&self) -> Option<&str> {
        self.policy.as_deref()
    }

    pub fn roles(&self) -> &[String] {
        self.roles.as_slice()
    }
}
