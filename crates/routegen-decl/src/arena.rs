//! Declaration arena and inheritance walks.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::annotations::Annotation;
use crate::declaration::TypeDeclaration;
use crate::members::Member;

/// Handle to a declaration stored in a [`DeclarationSet`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DeclId(pub u32);

impl DeclId {
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// All declarations visible to one analysis pass.
///
/// Declarations keep their insertion order; `DeclId`s are stable for the
/// lifetime of the set.
#[derive(Clone, Debug, Default)]
pub struct DeclarationSet {
    declarations: Vec<TypeDeclaration>,
    by_name: FxHashMap<String, DeclId>,
}

#[derive(Serialize, Deserialize)]
struct DeclarationDump {
    declarations: Vec<TypeDeclaration>,
}

impl DeclarationSet {
    pub fn new(declarations: impl IntoIterator<Item = TypeDeclaration>) -> Self {
        let mut set = Self::default();
        set.extend(declarations);
        set
    }

    /// Parse a dump of the form `{ "declarations": [...] }`.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let dump: DeclarationDump = serde_json::from_str(text)?;
        Ok(Self::new(dump.declarations))
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let dump = DeclarationDump {
            declarations: self.declarations.clone(),
        };
        serde_json::to_string_pretty(&dump)
    }

    pub fn into_declarations(self) -> Vec<TypeDeclaration> {
        self.declarations
    }

    /// Append declarations.
    ///
    /// A declaration whose qualified name is already present is another view of
    /// the same type (a partial fragment recorded separately); its fragments,
    /// annotations and members are folded into the existing entry.
    pub fn extend(&mut self, declarations: impl IntoIterator<Item = TypeDeclaration>) {
        for mut declaration in declarations {
            declaration.normalize();
            if let Some(&existing) = self.by_name.get(&declaration.qualified_name) {
                debug!(
                    name = %declaration.qualified_name,
                    "folding repeated declaration into existing entry"
                );
                let target = &mut self.declarations[existing.index()];
                merge_fragment(target, declaration);
                continue;
            }
            let id = DeclId(self.declarations.len() as u32);
            self.by_name.insert(declaration.qualified_name.clone(), id);
            self.declarations.push(declaration);
        }
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn get(&self, id: DeclId) -> &TypeDeclaration {
        &self.declarations[id.index()]
    }

    pub fn lookup(&self, qualified_name: &str) -> Option<DeclId> {
        self.by_name.get(qualified_name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DeclId, &TypeDeclaration)> + '_ {
        self.declarations
            .iter()
            .enumerate()
            .map(|(index, declaration)| (DeclId(index as u32), declaration))
    }

    /// Walk `id` and then its ancestors, nearest first.
    ///
    /// A base that is not declared in the set yields a [`TypeView::External`]
    /// and ends the walk. A repeated identity ends the walk as well.
    pub fn self_and_ancestors(&self, id: DeclId) -> SelfAndAncestors<'_> {
        SelfAndAncestors {
            set: self,
            next: Some(TypeView::Declared(id, self.get(id))),
            visited: FxHashSet::default(),
        }
    }
}

fn merge_fragment(target: &mut TypeDeclaration, other: TypeDeclaration) {
    for fragment in other.fragments {
        if !target.fragments.contains(&fragment) {
            target.fragments.push(fragment);
        }
    }
    if target.base.is_none() {
        target.base = other.base;
    }
    target.flags |= other.flags;
    target.interfaces.extend(other.interfaces);
    target.annotations.extend(other.annotations);
    for member in other.members {
        if !target
            .members
            .iter()
            .any(|existing| existing.display_signature() == member.display_signature())
        {
            target.members.push(member);
        }
    }
}

/// One step of an inheritance walk.
#[derive(Clone, Copy, Debug)]
pub enum TypeView<'a> {
    Declared(DeclId, &'a TypeDeclaration),
    /// A base type outside the declaration set, known only by identity.
    External(&'a str),
}

impl<'a> TypeView<'a> {
    /// Display identity (`Microsoft.AspNetCore.Mvc.Controller`).
    pub fn identity(&self) -> &'a str {
        match self {
            Self::Declared(_, declaration) => &declaration.qualified_name,
            Self::External(name) => name,
        }
    }

    pub fn annotations(&self) -> &'a [Annotation] {
        match self {
            Self::Declared(_, declaration) => &declaration.annotations,
            Self::External(_) => &[],
        }
    }

    pub fn members(&self) -> &'a [Member] {
        match self {
            Self::Declared(_, declaration) => &declaration.members,
            Self::External(_) => &[],
        }
    }

    pub fn declaration(&self) -> Option<&'a TypeDeclaration> {
        match self {
            Self::Declared(_, declaration) => Some(declaration),
            Self::External(_) => None,
        }
    }
}

/// Iterator returned by [`DeclarationSet::self_and_ancestors`].
pub struct SelfAndAncestors<'a> {
    set: &'a DeclarationSet,
    next: Option<TypeView<'a>>,
    visited: FxHashSet<&'a str>,
}

impl<'a> Iterator for SelfAndAncestors<'a> {
    type Item = TypeView<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        if !self.visited.insert(current.identity()) {
            debug!(identity = current.identity(), "inheritance cycle; ending ancestor walk");
            return None;
        }
        if let TypeView::Declared(_, declaration) = current {
            self.next = declaration.base.as_deref().map(|base| match self.set.lookup(base) {
                Some(id) => TypeView::Declared(id, self.set.get(id)),
                None => TypeView::External(base),
            });
        }
        Some(current)
    }
}
