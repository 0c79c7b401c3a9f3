//! `InstallPlan`: dependency-ordered app ids for one install request

use std::fmt;

/// Ordered app ids, dependencies first and the requested root last
///
/// Plans are built fresh for each request and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPlan {
    ids: Vec<String>,
}

impl InstallPlan {
    pub(crate) fn new(ids: Vec<String>) -> Self {
        debug_assert!(!ids.is_empty(), "a plan always contains its root");
        Self { ids }
    }

    /// The requested application (always the last entry)
    pub fn root(&self) -> &str {
        self.ids.last().map_or("", String::as_str)
    }

    /// Every id in install order, root included
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Ids that must be installed before the root, in order
    pub fn dependencies(&self) -> &[String] {
        &self.ids[..self.ids.len().saturating_sub(1)]
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

impl fmt::Display for InstallPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.ids.join(" -> "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_accessors() {
        let plan = InstallPlan::new(vec!["c".into(), "b".into(), "a".into()]);
        assert_eq!(plan.root(), "a");
        assert_eq!(plan.dependencies(), ["c", "b"]);
        assert_eq!(plan.len(), 3);
        assert_eq!(plan.iter().collect::<Vec<_>>(), vec!["c", "b", "a"]);
        assert_eq!(plan.to_string(), "c -> b -> a");
    }

    #[test]
    fn test_single_entry_plan_has_no_dependencies() {
        let plan = InstallPlan::new(vec!["a".into()]);
        assert_eq!(plan.root(), "a");
        assert!(plan.dependencies().is_empty());
    }
}
