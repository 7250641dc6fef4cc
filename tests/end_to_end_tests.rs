//! Runs the `routegen` binary over dumps on disk and checks exit codes and output.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const DUMP: &str = r#"{
  "declarations": [
    {
      "qualified_name": "Shop.Controllers.ProductsController",
      "base": "Microsoft.AspNetCore.Mvc.Controller",
      "annotations": [
        { "name": "Microsoft.AspNetCore.Mvc.AreaAttribute", "arguments": ["Admin"] }
      ],
      "members": [
        {
          "member": "property",
          "name": "Culture",
          "type": { "display": "string?", "fully_qualified": "string?", "fully_qualified_sans_annotations": "string" },
          "annotations": [ { "name": "Microsoft.AspNetCore.Mvc.FromQueryAttribute" } ]
        },
        {
          "member": "method",
          "name": "DetailsAsync",
          "parameters": [
            { "name": "id", "type": { "display": "int", "fully_qualified": "int", "fully_qualified_sans_annotations": "int" } },
            {
              "name": "day",
              "type": {
                "display": "System.DayOfWeek",
                "fully_qualified": "global::System.DayOfWeek",
                "fully_qualified_sans_annotations": "global::System.DayOfWeek"
              },
              "default_value": {
                "kind": "member_access",
                "target": { "kind": "identifier", "name": "DayOfWeek", "symbol": "global::System.DayOfWeek" },
                "name": "Friday"
              }
            }
          ]
        }
      ],
      "fragments": [{ "file": "Controllers/ProductsController.cs" }]
    },
    {
      "qualified_name": "Shop.Pages.Orders.ListModel",
      "base": "Microsoft.AspNetCore.Mvc.RazorPages.PageModel",
      "members": [ { "member": "method", "name": "OnGetAsync" } ],
      "fragments": [{ "file": "Pages/Orders/List.cshtml.cs" }]
    }
  ]
}"#;

fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("failed to write test file");
    path
}

fn routegen(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_routegen"))
        .args(args)
        .env_remove("ROUTEGEN_LOG")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run routegen")
}

#[test]
fn resolves_dump_directory_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "shop.json", DUMP);

    let output = routegen(&["--color", "never", dir.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(0));

    let model: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let controller = &model["controllers"][0];
    assert_eq!(controller["output_name"], "Products");
    assert_eq!(controller["area"], "Admin");

    let method = &controller["route_methods"][0];
    assert_eq!(method["name"], "Details");
    assert_eq!(
        method["parameters"][1]["default_value_expression"],
        "global::System.DayOfWeek.Friday"
    );
    assert_eq!(method["parameters"][2]["output_name"], "culture");
    assert_eq!(method["parameters"][2]["origin"], "property");

    let page = &model["pages"][0];
    assert_eq!(page["route_value"], "/Orders/List");
    assert_eq!(page["output_name"], "Orders_List");
}

#[test]
fn diagnostics_exit_with_one() {
    let dir = tempfile::tempdir().unwrap();
    let dump = write_file(dir.path(), "shop.json", DUMP);

    let output = routegen(&[
        "--color",
        "never",
        "--no-emit",
        "--option",
        "route_generator.generated_namespace=not a namespace",
        dump.to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error RG0002"));
    assert!(stderr.contains("Found 1 error."));
}

#[test]
fn unreadable_input_exits_with_two() {
    let dir = tempfile::tempdir().unwrap();
    let broken = write_file(dir.path(), "broken.json", "not json");

    let output = routegen(&["--color", "never", broken.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to parse declaration dump"));
}
