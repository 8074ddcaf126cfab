use indexmap::IndexMap;
use std::hash::Hash;

/// Groups members by a key and reports every key claimed more than once,
/// in first-seen order.
#[derive(Debug)]
pub(crate) struct DuplicateCollector<K> {
    groups: IndexMap<K, Vec<String>>,
}
impl<K: Eq + Hash> DuplicateCollector<K> {
    pub fn new() -> Self {
        Self {
            groups: IndexMap::new(),
        }
    }

    pub fn add(&mut self, key: K, member: impl Into<String>) {
        self.groups.entry(key).or_default().push(member.into());
    }

    pub fn into_duplicates(self) -> Vec<(K, Vec<String>)> {
        self.groups.into_iter()
            .filter(|(_, members)| members.len() > 1)
            .collect()
    }
}
