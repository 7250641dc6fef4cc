//! Declaration views for the routegen resolver.
//!
//! The resolver never parses source text. A host compiler (or a recorded dump)
//! supplies fully-resolved declaration information through this crate:
//! - `DeclarationSet` / `DeclId` - arena of declared types with ancestor walks
//! - `Annotation` / `AnnotationValue` - attributes with positional and named arguments
//! - `Member` and friends - properties, methods and parameters with modifiers
//! - `TypeRef` / `TypeDescriptor` - type text with and without nullability markers
//! - `Expr` - default-value expression trees, including comment/whitespace trivia

pub mod annotations;
pub use annotations::{Annotation, AnnotationValue};

pub mod arena;
pub use arena::{DeclId, DeclarationSet, SelfAndAncestors, TypeView};

pub mod declaration;
pub use declaration::{Accessibility, DeclFlags, TypeDeclaration};

pub mod expr;
pub use expr::{Expr, InterpolationPart, Literal, Trivia};

pub mod members;
pub use members::{Member, MemberFlags, MethodDecl, MethodKind, ParameterDecl, PropertyDecl, RefKind};

pub mod types;
pub use types::{TypeDescriptor, TypeRef};

#[cfg(test)]
#[path = "tests/arena_tests.rs"]
mod arena_tests;
#[cfg(test)]
#[path = "tests/expr_tests.rs"]
mod expr_tests;
