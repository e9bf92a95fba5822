use super::release_record::Namespace;
use crate::drift_inventory::services::unique_in_order;

/// Distinct namespaces that host at least one Helm release
///
/// Membership is unique; iteration follows first-seen order so that
/// runs over the same cluster visit namespaces in a stable order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceSet {
    namespaces: Vec<Namespace>,
}

impl NamespaceSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.namespaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }

    pub fn contains(&self, namespace: &str) -> bool {
        self.namespaces.iter().any(|ns| ns.as_str() == namespace)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Namespace> {
        self.namespaces.iter()
    }
}

impl FromIterator<Namespace> for NamespaceSet {
    fn from_iter<T: IntoIterator<Item = Namespace>>(iter: T) -> Self {
        Self {
            namespaces: unique_in_order(iter),
        }
    }
}

impl<'a> IntoIterator for &'a NamespaceSet {
    type Item = &'a Namespace;
    type IntoIter = std::slice::Iter<'a, Namespace>;

    fn into_iter(self) -> Self::IntoIter {
        self.namespaces.iter()
    }
}
