//! Nullability reconciliation for types that share a generated declaration.

use indexmap::IndexMap;
use routegen_decl::TypeDescriptor;

/// One canonical descriptor per distinct nullability-insensitive type.
///
/// Within a group, a descriptor observed with annotations disabled wins;
/// otherwise identical annotated texts are kept as they are; otherwise the
/// group falls back to the unannotated text with annotations disabled.
/// The result is sorted by fully-qualified text.
pub fn consolidate<'a, I>(descriptors: I) -> Vec<TypeDescriptor>
where
    I: IntoIterator<Item = &'a TypeDescriptor>,
{
    let mut groups: IndexMap<&str, Vec<&TypeDescriptor>> = IndexMap::new();
    for descriptor in descriptors {
        groups
            .entry(descriptor.fully_qualified_sans_annotations.as_str())
            .or_default()
            .push(descriptor);
    }

    let mut consolidated: Vec<TypeDescriptor> = groups
        .into_iter()
        .map(|(sans, group)| {
            let first = group[0];
            let any_disabled = group.iter().any(|descriptor| !descriptor.annotations_enabled);
            let all_identical = group
                .iter()
                .all(|descriptor| descriptor.fully_qualified == first.fully_qualified);
            if !any_disabled && all_identical {
                first.clone()
            } else {
                TypeDescriptor::new(sans, sans, false)
            }
        })
        .collect();

    consolidated.sort_by(|a, b| {
        a.fully_qualified
            .cmp(&b.fully_qualified)
            .then_with(|| a.fully_qualified_sans_annotations.cmp(&b.fully_qualified_sans_annotations))
    });
    consolidated
}
