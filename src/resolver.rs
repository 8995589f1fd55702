//! Dependency resolution over the component registry
//!
//! Expands a requested set of component ids into the full set to install:
//! the requested components plus every transitive internal dependency, in
//! stable first-visit order. Unknown ids are collected as diagnostics so a
//! batch containing a typo still proceeds for the valid subset.

use std::collections::{HashSet, VecDeque};

use crate::registry::Registry;

/// Result of expanding a requested component set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Resolved ids in first-visit order: requested components first, then
    /// dependencies as they are discovered
    pub components: Vec<String>,

    /// Requested names not found in the registry, as originally typed
    pub unknown: Vec<String>,
}

impl Resolution {
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

/// Compute the transitive closure of the requested ids over internal
/// dependencies.
///
/// Requested names are normalized to lowercase before lookup. The worklist
/// only enqueues ids not yet visited, so the traversal terminates on any
/// finite registry; the registry's cycle-free invariant (enforced at
/// construction) matters only for keeping results intentional.
pub fn resolve(registry: &Registry, requested: &[String]) -> Resolution {
    let mut resolution = Resolution::default();
    let mut visited: HashSet<String> = HashSet::new();
    let mut unknown_seen: HashSet<String> = HashSet::new();
    let mut worklist: VecDeque<String> = VecDeque::new();

    for name in requested {
        worklist.push_back(name.trim().to_lowercase());
    }

    let mut originals = requested.iter();

    while let Some(id) = worklist.pop_front() {
        // Keep the original spelling for unknown-name diagnostics on the
        // requested entries; dependency ids come straight from the registry
        // and are already canonical.
        let original = originals.next().map(|s| s.as_str());

        if visited.contains(&id) {
            continue;
        }

        match registry.get(&id) {
            Some(def) => {
                visited.insert(id.clone());
                resolution.components.push(id);
                for dep in def.component_deps {
                    if !visited.contains(*dep) {
                        worklist.push_back((*dep).to_string());
                    }
                }
            }
            None => {
                let reported = original.unwrap_or(id.as_str()).to_string();
                if unknown_seen.insert(reported.clone()) {
                    resolution.unknown.push(reported);
                }
            }
        }
    }

    resolution
}

/// Union of third-party package dependencies for a resolved set, duplicates
/// removed, in first-seen order.
pub fn package_deps_for(registry: &Registry, ids: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut packages = Vec::new();

    for id in ids {
        let Some(def) = registry.get(id) else {
            continue;
        };
        for package in def.package_deps {
            if seen.insert(*package) {
                packages.push((*package).to_string());
            }
        }
    }

    packages
}
