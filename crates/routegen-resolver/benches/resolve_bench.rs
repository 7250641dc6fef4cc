//! Pipeline throughput benchmarks.
//!
//! Measures full runs over synthetic declaration sets of growing size.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use routegen_decl::*;
use routegen_resolver::known::{annotations, types};
use routegen_resolver::{GeneratorOptions, run};

fn synthetic_set(controllers: usize) -> DeclarationSet {
    let mut declarations = vec![
        TypeDeclaration::class("Bench.BaseController")
            .extends(types::CONTROLLER)
            .with_flags(DeclFlags::ABSTRACT)
            .with_member(
                PropertyDecl::new("Culture", TypeRef::keyword("string").nullable())
                    .with_annotation(Annotation::new(annotations::FROM_QUERY)),
            ),
    ];
    for index in 0..controllers {
        let mut declaration =
            TypeDeclaration::class(&format!("Bench.Resource{index}Controller")).extends("Bench.BaseController");
        for action in ["Index", "Details", "Edit", "Delete"] {
            declaration = declaration
                .with_member(MethodDecl::new(action))
                .with_member(
                    MethodDecl::new(action)
                        .with_parameter(ParameterDecl::new("id", TypeRef::keyword("int")))
                        .with_parameter(
                            ParameterDecl::new("model", TypeRef::named("Bench.Model"))
                                .with_annotation(Annotation::new(annotations::FROM_BODY)),
                        ),
                );
        }
        declarations.push(declaration);
        declarations.push(
            TypeDeclaration::class(&format!("Bench.Pages.Page{index}Model"))
                .extends(types::PAGE_MODEL)
                .declared_in(&format!("Pages/Section{}/Page{index}.cshtml.cs", index % 8))
                .with_member(MethodDecl::new("OnGet"))
                .with_member(
                    MethodDecl::new("OnPostSave")
                        .with_parameter(ParameterDecl::new("name", TypeRef::keyword("string"))),
                ),
        );
    }
    DeclarationSet::new(declarations)
}

fn bench_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_run");
    let options = GeneratorOptions::default();

    for size in [10, 100, 1000] {
        let set = synthetic_set(size);
        group.bench_with_input(BenchmarkId::new("entities", size), &set, |b, set| {
            b.iter(|| black_box(run(black_box(set), &options)));
        });
    }

    group.finish();
}

criterion_group!(resolve_benches, bench_run);
criterion_main!(resolve_benches);
