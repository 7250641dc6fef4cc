//! Cheap gate applied before classification.

use routegen_decl::{DeclFlags, TypeDeclaration};

/// Whether a declaration could possibly be a route entity.
///
/// Interfaces, generic, nested, non-public, static and abstract declarations
/// are rejected, as are declarations with neither annotations nor a base list.
pub fn is_candidate(declaration: &TypeDeclaration) -> bool {
    let rejected = DeclFlags::INTERFACE | DeclFlags::GENERIC | DeclFlags::NESTED | DeclFlags::STATIC | DeclFlags::ABSTRACT;
    declaration.is_public()
        && !declaration.flags.intersects(rejected)
        && (!declaration.annotations.is_empty() || declaration.has_base_list())
}
