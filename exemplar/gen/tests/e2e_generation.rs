//! End-to-end tests: run the generator over the fixture collection.
//!
//! The fast tests assert on the rendered bindings. The ignored test copies
//! the runtime crate into a temp directory, writes freshly generated bindings
//! into it and runs `cargo check`.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

use exemplar_gen::collection::{load_collection, parse_collection};
use exemplar_gen::config::GeneratorConfig;
use exemplar_gen::naming::NamingTables;
use exemplar_gen::output::{generate_and_write, render_collection};

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/collection.json")
}

fn client_crate_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../client")
}

fn render_fixture() -> (exemplar_gen::model::ApiModel, String) {
    let collection = load_collection(&fixture_path()).expect("fixture should parse");
    render_collection(&collection, &NamingTables::default()).expect("fixture should render")
}

fn method_names(model: &exemplar_gen::model::ApiModel, namespace: &str) -> Vec<String> {
    model
        .services
        .iter()
        .find(|s| s.name == namespace)
        .map(|s| s.operations.iter().map(|op| op.method_name.clone()).collect())
        .unwrap_or_default()
}

#[test]
fn fixture_services_and_counts() {
    let (model, _) = render_fixture();

    let names: Vec<&str> = model.services.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Controls", "Documents", "Health", "Integrations", "Vendors"]
    );
    // Ten usable requests; the duplicate control lookup collapses into one.
    assert_eq!(model.operation_count(), 9);
}

#[test]
fn generation_is_deterministic() {
    let (_, first) = render_fixture();
    let (_, second) = render_fixture();
    assert_eq!(first, second);
}

#[test]
fn controls_get_by_id_end_to_end() {
    let (model, code) = render_fixture();

    assert_eq!(
        method_names(&model, "Controls"),
        vec!["GetControlByID", "ListControlsDocuments"]
    );

    assert!(code.contains("pub fn controls(&self) -> ControlsService<'a>"));
    assert!(code.contains("pub struct ControlsGetControlByIDResponse"));
    assert!(code.contains("pub active: Option<bool>"));
    assert!(code.contains("pub struct ControlsGetControlByIDParams"));
    assert!(code.contains("pub control_id: String"));
    assert!(code.contains("pub async fn get_control_by_id("));
    assert!(code.contains("/// Returns a single control."));
    assert!(code.contains("return Err(ClientError::MissingParameter(\"controlId\"));"));
}

#[test]
fn duplicate_request_keeps_first_label() {
    let (model, code) = render_fixture();
    let controls = model
        .services
        .iter()
        .find(|s| s.name == "Controls")
        .expect("Controls service");

    let lookup = &controls.operations[0];
    assert_eq!(lookup.path, "/controls/:controlId");
    assert_eq!(lookup.description, "Returns a single control.");
    assert!(!code.contains("FetchControl"));
}

#[test]
fn colliding_updates_are_disambiguated_by_path() {
    let (model, code) = render_fixture();

    assert_eq!(
        method_names(&model, "Vendors"),
        vec!["CreateVendor", "SetVendorTags", "Update", "UpdateForState"]
    );
    assert!(code.contains("pub async fn update("));
    assert!(code.contains("pub async fn update_for_state("));
    assert!(code.contains("pub struct VendorsUpdateForStateRequestBody"));
    assert!(code.contains("/// UpdateForState performs POST /vendors/:vendorId/state."));
}

#[test]
fn query_params_are_typed() {
    let (model, code) = render_fixture();

    assert!(code.contains("pub page_size: Option<i64>"));
    assert!(code.contains("pub page_cursor: Option<String>"));
    assert!(code.contains("query.push((\"pageSize\", value.to_string()));"));

    // Raw query strings are parsed when no query items are given.
    assert_eq!(method_names(&model, "Integrations"), vec!["ListItems"]);
    assert!(code.contains("pub include_disabled: Option<bool>"));
    assert!(code.contains("\"/v1/integrations\""));
}

#[test]
fn untyped_bodies_fall_back_to_json_values() {
    let (_, code) = render_fixture();

    // The tags body is an array, so no request struct is emitted.
    assert!(!code.contains("VendorsSetVendorTagsRequestBody"));
    assert!(code.contains("pub struct VendorsSetVendorTagsParams"));
    assert!(code.contains("pub body: Option<serde_json::Value>"));

    // The integrations response is an array.
    assert!(!code.contains("IntegrationsListItemsResponse"));
    assert!(code.contains("pub async fn health(&self) -> Result<serde_json::Value, ClientError>"));
}

#[test]
fn multipart_upload_uses_form_data() {
    let (model, code) = render_fixture();

    assert_eq!(method_names(&model, "Documents"), vec!["UploadFileForDocument"]);
    assert!(code.contains("pub form_data: std::collections::BTreeMap<String, String>"));
    assert!(code.contains(".new_multipart_request("));
    assert!(code.contains("pub file_name: Option<String>"));
}

#[test]
fn unsupported_verbs_are_skipped() {
    let (_, code) = render_fixture();
    assert!(!code.contains("LockFile"));
    assert!(!code.contains("/files/"));
}

#[test]
fn module_docs_use_paramless_example() {
    let (_, code) = render_fixture();
    assert!(code.contains("//! 9 operations across 5 services"));
    assert!(code.contains("//! - `VendorsService` (4)"));
    assert!(code.contains("client.services().health().health().await?;"));
}

#[test]
fn committed_bindings_match_generator_output() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
    let collection = load_collection(&root.join("collection/api.postman_collection.json"))
        .expect("default collection should parse");
    let (_, code) =
        render_collection(&collection, &NamingTables::default()).expect("collection should render");

    let committed = fs::read_to_string(client_crate_dir().join("src/generated.rs"))
        .expect("committed bindings should exist");
    assert_eq!(
        code, committed,
        "exemplar/client/src/generated.rs is stale; rerun exemplar-gen"
    );
}

#[test]
fn snake_case_collisions_render_distinct_members() {
    let collection = parse_collection(
        r#"{
            "info": {"name": "Things"},
            "item": [
                {"name": "Get x y", "request": {"method": "GET", "url": "{{baseUrl}}/things"}},
                {
                    "name": "Get xy",
                    "request": {"method": "GET", "url": "{{baseUrl}}/things/:id"},
                    "response": [{"body": "{\"x_y\": 1, \"xy\": 2}"}]
                },
                {"name": "Touch", "request": {"method": "POST", "url": "{{baseUrl}}/new/things"}}
            ]
        }"#,
    )
    .expect("collection should parse");
    let (model, code) =
        render_collection(&collection, &NamingTables::default()).expect("collection should render");

    assert_eq!(method_names(&model, "Things"), vec!["GetXY", "GetXyAlt"]);
    assert_eq!(code.matches("pub async fn get_xy(").count(), 1);
    assert_eq!(code.matches("pub async fn get_xy_alt(").count(), 1);
    assert_eq!(code.matches("pub xy: Option<f64>").count(), 1);
    assert!(code.contains("pub xy_2: Option<f64>"));
    assert_eq!(code.matches("fn new(").count(), 1);
    assert!(code.contains("pub fn new_service(&self) -> NewService<'a>"));
}

#[test]
fn generate_and_write_creates_bindings_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config = GeneratorConfig {
        input: fixture_path(),
        output: temp_dir.path().join("src/generated.rs"),
        dry_run: false,
    };

    let summary = generate_and_write(&config, &NamingTables::default()).expect("generation");
    assert_eq!(summary.operations, 9);
    assert_eq!(summary.services, 5);

    let written = fs::read_to_string(&config.output).expect("output should exist");
    assert_eq!(written, summary.code);
    assert!(written.starts_with("// This code was automatically generated by exemplar-gen."));
}

fn copy_dir(from: &Path, to: &Path) {
    fs::create_dir_all(to).expect("create dir");
    for entry in fs::read_dir(from).expect("read dir") {
        let entry = entry.expect("dir entry");
        let target = to.join(entry.file_name());
        if entry.file_type().expect("file type").is_dir() {
            copy_dir(&entry.path(), &target);
        } else {
            fs::copy(entry.path(), &target).expect("copy file");
        }
    }
}

/// Tests that freshly generated bindings compile against the runtime crate.
///
/// This test:
/// 1. Copies `exemplar-client` (manifest and `src/`) into a temp directory
/// 2. Regenerates `src/generated.rs` from the fixture collection
/// 3. Runs `cargo check` on the copy
#[test]
#[ignore = "slow: compiles generated code"]
fn generated_code_compiles() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let crate_dir = temp_dir.path().join("client");
    let source = client_crate_dir();

    copy_dir(&source.join("src"), &crate_dir.join("src"));
    let manifest = fs::read_to_string(source.join("Cargo.toml")).expect("read manifest");
    // Detach the copy from the repository workspace.
    fs::write(crate_dir.join("Cargo.toml"), format!("{manifest}\n[workspace]\n"))
        .expect("write manifest");

    let config = GeneratorConfig {
        input: fixture_path(),
        output: crate_dir.join("src/generated.rs"),
        dry_run: false,
    };
    generate_and_write(&config, &NamingTables::default()).expect("Failed to generate code");

    let output = Command::new("cargo")
        .args(["check", "--manifest-path"])
        .arg(crate_dir.join("Cargo.toml"))
        .output()
        .expect("Failed to run cargo check");

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);
        panic!(
            "Generated code failed to compile:\n\nSTDOUT:\n{}\n\nSTDERR:\n{}",
            stdout, stderr
        );
    }
}
