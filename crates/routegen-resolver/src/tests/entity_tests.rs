use routegen_common::diagnostics::diagnostic_codes;
use routegen_decl::*;

use crate::fixtures::*;
use crate::known::{annotations, types};
use crate::model::{BindingSourceKind, EntityKind};
use crate::options::GeneratorOptions;

#[test]
fn test_controller_suffix_is_stripped_case_insensitively() {
    let resolved = resolve_controller(controller("App.HomeCONTROLLER").with_member(action("Index")));
    let entity = resolved.entity.unwrap();
    assert_eq!(entity.route_value, "Home");
    assert_eq!(entity.output_name, "Home");
    assert_eq!(entity.qualified_identity, "global::App.HomeCONTROLLER");
    assert_eq!(entity.kind, EntityKind::Controller);
    assert_eq!(entity.location.unwrap().file, "HomeCONTROLLER.cs");

    let unsuffixed = resolve_controller(controller("App.Dashboard").with_member(action("Index")));
    assert_eq!(unsuffixed.entity.unwrap().route_value, "Dashboard");
}

#[test]
fn test_controller_named_only_suffix_is_dropped() {
    let resolved = resolve_controller(controller("App.Controller").with_member(action("Index")));
    assert!(resolved.entity.is_none());
    assert!(resolved.diagnostics.is_empty());
}

#[test]
fn test_entity_without_route_methods_is_dropped() {
    let resolved = resolve_controller(
        controller("App.EmptyController")
            .with_member(property("Id", "int").with_annotation(attr(annotations::FROM_QUERY))),
    );
    assert!(resolved.entity.is_none());
    assert!(resolved.diagnostics.is_empty());
}

#[test]
fn test_area_comes_from_first_annotated_level() {
    let declarations = vec![
        controller("App.AdminBaseController")
            .with_annotation(attr(annotations::AREA).with_argument("Admin")),
        TypeDeclaration::class("App.UsersController")
            .extends("App.AdminBaseController")
            .with_member(action("Index")),
    ];
    let resolved = resolve_in(
        declarations,
        "App.UsersController",
        EntityKind::Controller,
        &GeneratorOptions::default(),
    );
    assert_eq!(resolved.entity.unwrap().area.as_deref(), Some("Admin"));
}

#[test]
fn test_rename_on_self_is_pascal_cased() {
    let resolved = resolve_controller(
        controller("App.ProductsController")
            .with_annotation(rename("catalog"))
            .with_member(action("Index")),
    );
    let entity = resolved.entity.unwrap();
    assert_eq!(entity.output_name, "Catalog");
    assert_eq!(entity.route_value, "Products");
}

#[test]
fn test_invalid_rename_reports_and_keeps_name() {
    let resolved = resolve_controller(
        controller("App.ProductsController")
            .with_annotation(rename("1nvalid name"))
            .with_member(action("Index")),
    );
    assert_eq!(resolved.entity.unwrap().output_name, "Products");
    assert_eq!(resolved.diagnostics.len(), 1);
    let diagnostic = &resolved.diagnostics[0];
    assert_eq!(diagnostic.code, diagnostic_codes::INVALID_IDENTIFIER);
    assert_eq!(diagnostic.message_text, "The text '1nvalid name' is not a valid identifier.");
    assert_eq!(diagnostic.location.as_ref().unwrap().start, 40);
}

#[test]
fn test_rename_on_ancestor_is_not_inherited() {
    let declarations = vec![
        controller("App.BaseController").with_annotation(rename("Other")),
        TypeDeclaration::class("App.ShopController")
            .extends("App.BaseController")
            .with_member(action("Index")),
    ];
    let resolved = resolve_in(
        declarations,
        "App.ShopController",
        EntityKind::Controller,
        &GeneratorOptions::default(),
    );
    assert_eq!(resolved.entity.unwrap().output_name, "Shop");
}

#[test]
fn test_member_walk_filters_and_prefers_most_derived() {
    let declarations = vec![
        controller("App.BaseController")
            .with_member(action("Shared").with_parameter(param("id", "int")))
            .with_member(action("Inherited")),
        TypeDeclaration::class("App.HomeController")
            .extends("App.BaseController")
            .with_member(
                action("Shared")
                    .with_parameter(param("id", "int"))
                    .with_annotation(attr(annotations::ACTION_NAME).with_argument("Overridden")),
            )
            .with_member(action("Hidden").with_accessibility(Accessibility::Protected))
            .with_member(action("Helper").with_flags(MemberFlags::STATIC))
            .with_member(action("Template").with_flags(MemberFlags::ABSTRACT))
            .with_member(action("Synthesized").with_flags(MemberFlags::IMPLICIT))
            .with_member(action("Index")),
    ];
    let resolved = resolve_in(
        declarations,
        "App.HomeController",
        EntityKind::Controller,
        &GeneratorOptions::default(),
    );
    let entity = resolved.entity.unwrap();
    let names: Vec<&str> = entity.route_methods.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["Shared", "Index", "Inherited"]);
    assert_eq!(entity.route_methods[0].division_value.as_deref(), Some("Overridden"));
}

#[test]
fn test_member_walk_stops_at_framework_root() {
    let declarations = vec![
        TypeDeclaration::class(types::CONTROLLER).with_member(action("View")),
        TypeDeclaration::class("App.HomeController")
            .extends(types::CONTROLLER)
            .with_member(action("Index")),
    ];
    let resolved = resolve_in(
        declarations,
        "App.HomeController",
        EntityKind::Controller,
        &GeneratorOptions::default(),
    );
    let entity = resolved.entity.unwrap();
    assert_eq!(entity.route_methods.len(), 1);
    assert_eq!(entity.route_methods[0].name, "Index");
}

#[test]
fn test_property_binding_sources_and_route_keys() {
    let resolved = resolve_controller(
        controller("App.SearchController")
            .with_member(
                property("Term", "string")
                    .with_annotation(attr(annotations::FROM_QUERY).with_named("Name", "q"))
                    .with_annotation(attr(annotations::FROM_ROUTE)),
            )
            .with_member(property("Other", "int").with_annotation(attr(annotations::BIND_PROPERTY)).with_annotation(rename("renamed")))
            .with_member(property("Unbound", "int"))
            .with_member(property("Skipped", "int").with_annotation(attr(annotations::FROM_QUERY)).with_annotation(exclude()))
            .with_member(property("ReadOnly", "int").with_annotation(attr(annotations::FROM_QUERY)).with_setter(None))
            .with_member(action("Index")),
    );
    let entity = resolved.entity.unwrap();
    assert_eq!(entity.bound_members.len(), 2);

    let term = &entity.bound_members[0];
    assert_eq!(term.binding_source.kind, BindingSourceKind::Query);
    assert_eq!(term.route_key, "q");
    assert_eq!(term.output_name, "Term");

    let other = &entity.bound_members[1];
    assert_eq!(other.binding_source.kind, BindingSourceKind::Custom);
    assert_eq!(other.output_name, "Renamed");
    assert_eq!(other.route_key, "Other");
    assert_eq!(other.escaped_output_name(), "Renamed");
}

#[test]
fn test_default_binding_stops_above_declaring_level() {
    let declarations = vec![
        controller("App.GrandBaseController").with_member(property("C", "string")),
        TypeDeclaration::class("App.BaseController")
            .extends("App.GrandBaseController")
            .with_annotation(attr(annotations::BIND_PROPERTIES))
            .with_member(property("B", "string")),
        TypeDeclaration::class("App.DerivedController")
            .extends("App.BaseController")
            .with_member(property("A", "string"))
            .with_member(action("Index")),
    ];
    let resolved = resolve_in(
        declarations,
        "App.DerivedController",
        EntityKind::Controller,
        &GeneratorOptions::default(),
    );
    let entity = resolved.entity.unwrap();
    let names: Vec<&str> = entity.bound_members.iter().map(|m| m.original_name.as_str()).collect();
    assert_eq!(names, ["A", "B"]);
    assert!(entity.bound_members.iter().all(|m| m.binding_source.kind == BindingSourceKind::Custom));
}

#[test]
fn test_property_value_types_are_consolidated() {
    let resolved = resolve_controller(
        controller("App.FilterController")
            .with_member(
                PropertyDecl::new("Name", TypeRef::keyword("string").nullable())
                    .with_annotation(attr(annotations::FROM_QUERY)),
            )
            .with_member(property("Title", "string").with_annotation(attr(annotations::FROM_QUERY)))
            .with_member(property("Page", "int").with_annotation(attr(annotations::FROM_QUERY)))
            .with_member(action("Index")),
    );
    let entity = resolved.entity.unwrap();
    assert_eq!(
        entity.property_value_types,
        [
            TypeDescriptor::new("int", "int", true),
            TypeDescriptor::new("string", "string", false),
        ]
    );
}

#[test]
fn test_page_naming_from_path() {
    let resolved = resolve_page(
        page("Site.Areas.Blog.EditModel", "/src/Site/Areas/Blog/Pages/Posts/Edit.cshtml.cs")
            .with_annotation(attr(annotations::AREA).with_argument("Ignored"))
            .with_member(action("OnGet")),
    );
    let entity = resolved.entity.unwrap();
    assert_eq!(entity.kind, EntityKind::Page);
    assert_eq!(entity.route_value, "/Posts/Edit");
    assert_eq!(entity.page_namespace, "Posts");
    assert_eq!(entity.output_name, "Posts_Edit");
    assert_eq!(entity.area.as_deref(), Some("Blog"));
    assert_eq!(entity.location.unwrap().file, "/src/Site/Areas/Blog/Pages/Posts/Edit.cshtml.cs");
}

#[test]
fn test_page_at_pages_root_has_plain_name() {
    let resolved = resolve_page(
        page("Site.IndexModel", "Pages\\Index.CSHTML.cs")
            .with_annotation(rename("home"))
            .with_member(action("OnGet")),
    );
    let entity = resolved.entity.unwrap();
    assert_eq!(entity.route_value, "/Index");
    assert_eq!(entity.page_namespace, "");
    assert_eq!(entity.output_name, "Home");
    assert_eq!(entity.area, None);
}

#[test]
fn test_page_without_pages_folder_or_page_file_is_dropped() {
    let outside = resolve_page(page("Site.AboutModel", "Views/About.cshtml.cs").with_member(action("OnGet")));
    assert!(outside.entity.is_none());

    let plain_file = resolve_page(page("Site.AboutModel", "Pages/About.cs").with_member(action("OnGet")));
    assert!(plain_file.entity.is_none());
}

#[test]
fn test_page_uses_first_page_file_fragment() {
    let declaration = page("Site.ContactModel", "Pages/Contact.Partial.cs")
        .declared_in("Pages/Shared/Contact.cshtml.cs")
        .with_member(action("OnPost"));
    let entity = resolve_page(declaration).entity.unwrap();
    assert_eq!(entity.route_value, "/Shared/Contact");
    assert_eq!(entity.output_name, "Shared_Contact");
}
