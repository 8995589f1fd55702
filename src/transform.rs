//! Content transform applied to every copied or compared template
//!
//! Template sources import the shared class-name helper from a fixed
//! specifier. On the way into a project that specifier is rewritten to the
//! project's configured utils alias. This is the only substitution Veneer
//! performs; it is deterministic and is applied identically when copying and
//! when comparing, so an untouched installed file always compares equal.

/// Import specifier used by every bundled template.
pub const TEMPLATE_UTILS_IMPORT: &str = "@/lib/utils";

/// Rewrite the fixed template import to the project's utils alias.
pub fn rewrite_imports(content: &str, utils_alias: &str) -> String {
    content.replace(TEMPLATE_UTILS_IMPORT, utils_alias)
}
