//! Component registry
//!
//! The registry is the static table of every component Veneer can install:
//! its metadata, third-party package dependencies, internal component
//! dependencies, and the template files that make it up.
//!
//! The table is an explicitly constructed, read-only value passed into the
//! resolver and the operations rather than process-global state, so tests can
//! substitute small fake registries. [`Registry::builtin`] builds the table
//! shipped in the binary.

pub mod builtin;

use std::collections::HashMap;

use crate::error::{Result, VeneerError};

pub use builtin::EmbeddedTemplates;

/// Metadata for a single installable component.
///
/// Ids are lowercase; callers normalize user input before lookup. Every
/// shipped definition has exactly one file today, but `files` is a list and
/// all copy/compare/delete logic iterates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentDefinition {
    /// Unique lowercase key
    pub id: &'static str,

    /// Human-readable name
    pub display_name: &'static str,

    /// Human-readable description
    pub description: &'static str,

    /// Third-party packages the component needs at runtime
    pub package_deps: &'static [&'static str],

    /// Other registry ids this component requires to function
    pub component_deps: &'static [&'static str],

    /// Template files, relative to the template root, in copy order
    pub files: &'static [&'static str],
}

/// Source-of-truth template store, addressed by the same relative names as
/// [`ComponentDefinition::files`].
pub trait TemplateStore {
    /// Returns the template content, or `None` if no such template exists.
    fn read(&self, relative: &str) -> Option<&str>;
}

/// Read-only component table with registration-order iteration and id lookup.
#[derive(Debug, Clone)]
pub struct Registry {
    definitions: Vec<ComponentDefinition>,
    index: HashMap<&'static str, usize>,
}

impl Registry {
    /// Build a registry from a list of definitions, validating the documented
    /// invariants: unique lowercase ids, no self-dependencies, internal
    /// dependencies that exist in the table, and a cycle-free dependency
    /// graph.
    pub fn new(definitions: Vec<ComponentDefinition>) -> Result<Self> {
        let mut index = HashMap::new();
        for (pos, def) in definitions.iter().enumerate() {
            if def.id != def.id.to_lowercase() {
                return Err(VeneerError::RegistryInvalid {
                    message: format!("component id '{}' is not lowercase", def.id),
                });
            }
            if index.insert(def.id, pos).is_some() {
                return Err(VeneerError::RegistryInvalid {
                    message: format!("duplicate component id '{}'", def.id),
                });
            }
        }

        let registry = Self { definitions, index };
        registry.validate_dependencies()?;
        Ok(registry)
    }

    /// The component table compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::new(builtin::definitions())
    }

    /// All component ids in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.definitions.iter().map(|def| def.id)
    }

    /// All definitions in registration order.
    pub fn definitions(&self) -> &[ComponentDefinition] {
        &self.definitions
    }

    /// Look up a definition by id. Keys are lowercase; callers normalize.
    pub fn get(&self, id: &str) -> Option<&ComponentDefinition> {
        self.index.get(id).map(|&pos| &self.definitions[pos])
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    fn validate_dependencies(&self) -> Result<()> {
        for def in &self.definitions {
            for dep in def.component_deps {
                if *dep == def.id {
                    return Err(VeneerError::RegistryInvalid {
                        message: format!("component '{}' depends on itself", def.id),
                    });
                }
                if !self.index.contains_key(dep) {
                    return Err(VeneerError::RegistryInvalid {
                        message: format!(
                            "component '{}' depends on unknown component '{dep}'",
                            def.id
                        ),
                    });
                }
            }
        }
        self.check_cycles()
    }

    /// Depth-first cycle check over the internal dependency graph.
    ///
    /// The resolver's visited-set traversal terminates even on a cyclic
    /// graph, but a cycle would silently pull unintended components into
    /// every resolution, so registry construction rejects it outright.
    fn check_cycles(&self) -> Result<()> {
        #[derive(Clone, Copy, PartialEq)]
        enum Mark {
            Unvisited,
            InProgress,
            Done,
        }

        let mut marks = vec![Mark::Unvisited; self.definitions.len()];

        for start in 0..self.definitions.len() {
            if marks[start] != Mark::Unvisited {
                continue;
            }
            // Iterative DFS; (node, next child index) frames
            let mut stack = vec![(start, 0usize)];
            marks[start] = Mark::InProgress;

            while let Some((node, child)) = stack.pop() {
                let deps = self.definitions[node].component_deps;
                if child >= deps.len() {
                    marks[node] = Mark::Done;
                    continue;
                }
                stack.push((node, child + 1));

                let dep_pos = self.index[deps[child]];
                match marks[dep_pos] {
                    Mark::InProgress => {
                        return Err(VeneerError::RegistryInvalid {
                            message: format!(
                                "dependency cycle through '{}' and '{}'",
                                self.definitions[node].id, self.definitions[dep_pos].id
                            ),
                        });
                    }
                    Mark::Unvisited => {
                        marks[dep_pos] = Mark::InProgress;
                        stack.push((dep_pos, 0));
                    }
                    Mark::Done => {}
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn def(
        id: &'static str,
        component_deps: &'static [&'static str],
    ) -> ComponentDefinition {
        ComponentDefinition {
            id,
            display_name: id,
            description: "test component",
            package_deps: &[],
            component_deps,
            files: &[],
        }
    }

    #[test]
    fn test_builtin_registry_is_valid() {
        let registry = Registry::builtin().unwrap();
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_builtin_templates_exist_for_every_file() {
        let registry = Registry::builtin().unwrap();
        let templates = EmbeddedTemplates;
        for component in registry.definitions() {
            assert!(!component.files.is_empty(), "{} has no files", component.id);
            for file in component.files {
                assert!(
                    templates.read(file).is_some(),
                    "missing template {file} for {}",
                    component.id
                );
            }
        }
    }

    #[test]
    fn test_lookup_and_order() {
        let registry = Registry::new(vec![def("b", &[]), def("a", &["b"])]).unwrap();
        assert_eq!(registry.ids().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(registry.get("a").unwrap().component_deps, &["b"]);
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn test_rejects_duplicate_id() {
        let err = Registry::new(vec![def("a", &[]), def("a", &[])]).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_rejects_uppercase_id() {
        let err = Registry::new(vec![def("Button", &[])]).unwrap_err();
        assert!(err.to_string().contains("not lowercase"));
    }

    #[test]
    fn test_rejects_self_dependency() {
        let err = Registry::new(vec![def("a", &["a"])]).unwrap_err();
        assert!(err.to_string().contains("depends on itself"));
    }

    #[test]
    fn test_rejects_unknown_dependency() {
        let err = Registry::new(vec![def("a", &["ghost"])]).unwrap_err();
        assert!(err.to_string().contains("unknown component 'ghost'"));
    }

    #[test]
    fn test_rejects_cycle() {
        let err =
            Registry::new(vec![def("a", &["b"]), def("b", &["c"]), def("c", &["a"])]).unwrap_err();
        assert!(err.to_string().contains("dependency cycle"));
    }

    #[test]
    fn test_accepts_diamond() {
        // a -> b, a -> c, b -> d, c -> d is a DAG, not a cycle
        let registry = Registry::new(vec![
            def("d", &[]),
            def("b", &["d"]),
            def("c", &["d"]),
            def("a", &["b", "c"]),
        ]);
        assert!(registry.is_ok());
    }
}
