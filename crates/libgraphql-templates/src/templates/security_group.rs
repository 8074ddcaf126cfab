use crate::templates::AppliedSecurityPolicy;

/// The security requirements declared on a single schema item.
///
/// Requirements are aggregated for a downstream authorizer; they are never
/// evaluated here.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SecurityGroup {
    pub(crate) allow_anonymous: bool,
    pub(crate) policies: Vec<AppliedSecurityPolicy>,
}
impl SecurityGroup {
    pub fn allow_anonymous(&self) -> bool {
        self.allow_anonymous
    }

    pub fn is_empty(&self) -> bool {
        !self.allow_anonymous && self.policies.is_empty()
    }

    pub fn policies(&self) -> &[AppliedSecurityPolicy] {
        self.policies.as_slice()
    }
}
