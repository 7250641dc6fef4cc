//! Entity resolution: naming, entity-level annotations and the member walk.

use routegen_common::Diagnostic;
use routegen_common::identifiers::camel_to_pascal_case;
use routegen_decl::{DeclId, DeclarationSet, Member, MemberFlags, PropertyDecl, TypeDeclaration};
use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use crate::binding;
use crate::conflicts;
use crate::consolidate::consolidate;
use crate::known::{self, annotations, arguments, types};
use crate::method;
use crate::model::{BindingSource, BindingSourceKind, BoundMember, EntityKind, RouteEntity, RouteMethod};
use crate::options::GeneratorOptions;

const CONTROLLER_SUFFIX: &str = "Controller";
const PAGE_FILE_SUFFIX: &str = ".cshtml.cs";
const PAGES_FOLDER: &str = "Pages";
const AREAS_FOLDER: &str = "Areas";

/// Outcome of resolving one declaration as one entity kind.
#[derive(Clone, Debug, Default)]
pub struct ResolvedEntity {
    pub entity: Option<RouteEntity>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Resolve a classified declaration into a route entity.
///
/// Structural rejections (no usable name, no page path, no route methods)
/// yield no entity and no diagnostic.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(declaration = %set.get(id).qualified_name, kind = kind.as_str())
)]
pub fn resolve(set: &DeclarationSet, id: DeclId, kind: EntityKind, options: &GeneratorOptions) -> ResolvedEntity {
    let mut diagnostics = Vec::new();
    let entity = resolve_entity(set, id, kind, options, &mut diagnostics);
    ResolvedEntity { entity, diagnostics }
}

fn resolve_entity(
    set: &DeclarationSet,
    id: DeclId,
    kind: EntityKind,
    options: &GeneratorOptions,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<RouteEntity> {
    let declaration = set.get(id);

    let Some(naming) = (match kind {
        EntityKind::Controller => controller_naming(declaration),
        EntityKind::Page => page_naming(declaration),
    }) else {
        debug!("no route name could be derived");
        return None;
    };

    let attributes = entity_attributes(set, id, kind, diagnostics);
    let collected = collect_members(set, id, kind, &attributes, options, diagnostics);

    let mut route_methods =
        conflicts::resolve_method_identities(&declaration.name, collected.methods, diagnostics);
    if route_methods.is_empty() {
        debug!("no route methods; entity dropped");
        return None;
    }
    conflicts::merge_bound_members(&mut route_methods, &collected.members, options.parameter_case);
    for route_method in &mut route_methods {
        route_method.parameter_value_types =
            consolidate(route_method.parameters.iter().map(|parameter| &parameter.ty));
    }

    let name = attributes.rename.unwrap_or(naming.name);
    let output_name = if naming.page_namespace.is_empty() {
        name
    } else {
        format!("{}_{name}", naming.page_namespace)
    };
    let area = match kind {
        EntityKind::Controller => attributes.area,
        EntityKind::Page => naming.area,
    };

    Some(RouteEntity {
        kind,
        route_value: naming.route_value,
        output_name,
        area,
        page_namespace: naming.page_namespace,
        qualified_identity: declaration.fully_qualified_name.clone(),
        property_value_types: consolidate(collected.members.iter().map(|member| &member.ty)),
        bound_members: collected.members,
        route_methods,
        location: naming.location,
    })
}

// =============================================================================
// Naming
// =============================================================================

struct EntityNaming {
    route_value: String,
    name: String,
    area: Option<String>,
    page_namespace: String,
    location: Option<routegen_common::SourceLocation>,
}

fn strip_suffix_ignore_case<'a>(value: &'a str, suffix: &str) -> Option<&'a str> {
    let split = value.len().checked_sub(suffix.len())?;
    if !value.is_char_boundary(split) {
        return None;
    }
    let (head, tail) = value.split_at(split);
    tail.eq_ignore_ascii_case(suffix).then_some(head)
}

fn controller_naming(declaration: &TypeDeclaration) -> Option<EntityNaming> {
    let name = strip_suffix_ignore_case(&declaration.name, CONTROLLER_SUFFIX).unwrap_or(&declaration.name);
    if name.is_empty() {
        return None;
    }
    Some(EntityNaming {
        route_value: name.to_string(),
        name: name.to_string(),
        area: None,
        page_namespace: String::new(),
        location: declaration.primary_location().cloned(),
    })
}

/// Derive page naming from the first `*.cshtml.cs` fragment.
///
/// `Areas/Blog/Pages/Posts/Edit.cshtml.cs` gives route value `/Posts/Edit`,
/// namespace `Posts`, name `Edit` and area `Blog`.
fn page_naming(declaration: &TypeDeclaration) -> Option<EntityNaming> {
    let fragment = declaration
        .fragments
        .iter()
        .find(|fragment| strip_suffix_ignore_case(&fragment.file, PAGE_FILE_SUFFIX).is_some())?;

    let mut components: Vec<&str> = fragment
        .file
        .split(['/', '\\'])
        .filter(|component| !component.is_empty())
        .collect();
    let file_name = components.pop()?;
    let page_name = strip_suffix_ignore_case(file_name, PAGE_FILE_SUFFIX)?;

    let pages_index = components
        .iter()
        .rposition(|component| component.eq_ignore_ascii_case(PAGES_FOLDER))?;
    let segments = &components[pages_index + 1..];

    let area = match pages_index.checked_sub(2) {
        Some(areas_index) if components[areas_index].eq_ignore_ascii_case(AREAS_FOLDER) => {
            Some(components[pages_index - 1].to_string())
        }
        _ => None,
    };

    let mut route_value = String::new();
    for segment in segments.iter().chain(std::iter::once(&page_name)) {
        route_value.push('/');
        route_value.push_str(segment);
    }

    Some(EntityNaming {
        route_value,
        name: page_name.to_string(),
        area,
        page_namespace: segments.join("_"),
        location: Some(fragment.clone()),
    })
}

// =============================================================================
// Entity-level annotations
// =============================================================================

#[derive(Default)]
struct EntityAttributes {
    area: Option<String>,
    /// Default binding source and the ancestor depth that declared it.
    default_binding: Option<(BindingSource, usize)>,
    rename: Option<String>,
}

fn entity_attributes(
    set: &DeclarationSet,
    id: DeclId,
    kind: EntityKind,
    diagnostics: &mut Vec<Diagnostic>,
) -> EntityAttributes {
    let mut attributes = EntityAttributes::default();

    for (depth, view) in set.self_and_ancestors(id).enumerate() {
        for annotation in view.annotations() {
            match annotation.name.as_str() {
                annotations::AREA if kind == EntityKind::Controller && attributes.area.is_none() => {
                    if let Some(area) = annotation.first_string_argument() {
                        trace!(area, depth, "entity area");
                        attributes.area = Some(area.to_string());
                    }
                }
                annotations::BIND_PROPERTIES if attributes.default_binding.is_none() => {
                    let source = BindingSource {
                        kind: BindingSourceKind::Custom,
                        explicit_name: None,
                        supports_get: annotation.named_bool(arguments::SUPPORTS_GET).unwrap_or(false),
                    };
                    trace!(depth, supports_get = source.supports_get, "default binding source");
                    attributes.default_binding = Some((source, depth));
                }
                annotations::ROUTE_GENERATOR_NAME if depth == 0 => {
                    if let Some(renamed) = binding::rename(annotation, camel_to_pascal_case, diagnostics) {
                        attributes.rename = Some(renamed);
                    }
                }
                _ => {}
            }
        }
    }

    attributes
}

// =============================================================================
// Member walk
// =============================================================================

struct CollectedMembers {
    members: Vec<BoundMember>,
    methods: Vec<RouteMethod>,
}

fn is_walk_root(kind: EntityKind, identity: &str) -> bool {
    identity == types::OBJECT
        || match kind {
            EntityKind::Controller => known::is_controller_root(identity),
            EntityKind::Page => known::is_page_root(identity),
        }
}

fn collect_members(
    set: &DeclarationSet,
    id: DeclId,
    kind: EntityKind,
    attributes: &EntityAttributes,
    options: &GeneratorOptions,
    diagnostics: &mut Vec<Diagnostic>,
) -> CollectedMembers {
    let mut collected = CollectedMembers {
        members: Vec::new(),
        methods: Vec::new(),
    };
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let skipped = MemberFlags::STATIC | MemberFlags::ABSTRACT | MemberFlags::IMPLICIT;

    for (depth, view) in set.self_and_ancestors(id).enumerate() {
        if is_walk_root(kind, view.identity()) {
            break;
        }
        let default_binding = attributes
            .default_binding
            .as_ref()
            .filter(|(_, level)| depth <= *level)
            .map(|(source, _)| source);

        for member in view.members() {
            if !member.accessibility().is_public() || member.flags().intersects(skipped) {
                continue;
            }
            if !seen.insert(member.display_signature()) {
                trace!(signature = member.display_signature(), "hidden by a more derived member");
                continue;
            }
            match member {
                Member::Property(property) => {
                    if !property.has_public_getter_and_setter() {
                        continue;
                    }
                    if let Some(bound) = resolve_property(property, default_binding, diagnostics) {
                        collected.members.push(bound);
                    }
                }
                Member::Method(declared) => {
                    if let Some(route_method) =
                        method::resolve_method(declared, kind, options.parameter_case, diagnostics)
                    {
                        collected.methods.push(route_method);
                    }
                }
            }
        }
    }

    collected
}

fn resolve_property(
    property: &PropertyDecl,
    default_binding: Option<&BindingSource>,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<BoundMember> {
    let mut source: Option<BindingSource> = None;
    let mut output_name = None;

    for annotation in &property.annotations {
        if let Some(kind) = binding::property_source_kind(annotation) {
            if source.is_none() {
                source = Some(binding::binding_source(annotation, kind));
            }
            continue;
        }
        match annotation.name.as_str() {
            annotations::EXCLUDE_FROM_ROUTE_GENERATOR => {
                trace!(property = %property.name, "property excluded");
                return None;
            }
            annotations::ROUTE_GENERATOR_NAME => {
                if let Some(renamed) = binding::rename(annotation, camel_to_pascal_case, diagnostics) {
                    output_name = Some(renamed);
                }
            }
            _ => {}
        }
    }

    let Some(source) = source.or_else(|| default_binding.cloned()) else {
        trace!(property = %property.name, "property has no binding source");
        return None;
    };

    Some(BoundMember {
        original_name: property.name.clone(),
        output_name: output_name.unwrap_or_else(|| property.name.clone()),
        route_key: source.explicit_name.clone().unwrap_or_else(|| property.name.clone()),
        ty: property.ty.descriptor.clone(),
        binding_source: source,
    })
}
