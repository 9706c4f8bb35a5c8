//! Set reconciliation for many-to-many associations.

use std::collections::HashSet;

/// Difference between the names currently linked to an entity and the desired names.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Reconciliation {
    /// Currently linked names that are absent from the desired set.
    pub to_remove: Vec<String>,
    /// Desired names that are not linked yet, in request order.
    pub to_add: Vec<String>,
}

/// Computes which links to drop and which to add so that `current` becomes `desired`.
///
/// Names present in both sets are left out of the result. Duplicates in `desired`
/// produce a single addition.
pub fn reconcile(current: &[String], desired: &[String]) -> Reconciliation {
    let current_set: HashSet<&str> = current.iter().map(String::as_str).collect();
    let desired_set: HashSet<&str> = desired.iter().map(String::as_str).collect();

    let to_remove = current
        .iter()
        .filter(|name| !desired_set.contains(name.as_str()))
        .cloned()
        .collect();

    let to_add = dedupe(desired)
        .into_iter()
        .filter(|name| !current_set.contains(name.as_str()))
        .collect();

    Reconciliation { to_remove, to_add }
}

/// Removes repeated names, keeping the first occurrence of each.
pub fn dedupe(names: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();

    names
        .iter()
        .filter(|name| seen.insert(name.as_str()))
        .cloned()
        .collect()
}
