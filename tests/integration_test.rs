use apidoc_from_raml::converter::Converter;
use apidoc_from_raml::error::Error;
use apidoc_from_raml::serializer::{serialize_json, write_to_file};
use pretty_assertions::assert_eq;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper function to build a file:// URI for a fixture document
fn fixture_uri(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    format!("file://{}", path.display())
}

#[test]
fn test_hello_round_trip() {
    // The hello document declares exactly one schema, with no required list
    let apidoc = Converter::new().convert(&fixture_uri("hello.raml")).unwrap();

    let model_names: Vec<&str> = apidoc.models.keys().map(String::as_str).collect();
    assert_eq!(model_names, vec!["helloes"]);

    let helloes = &apidoc.models["helloes"];
    assert_eq!(helloes.description.as_deref(), Some("greetings"));
    assert_eq!(helloes.fields.len(), 1);
    assert_eq!(helloes.fields[0].name, "id");
    assert_eq!(helloes.fields[0].field_type.as_deref(), Some("string"));
    assert_eq!(helloes.fields[0].required, None);
}

#[test]
fn test_get_version() {
    let version = Converter::new().version(&fixture_uri("version.raml")).unwrap();

    assert_eq!(version, "0.1.1");
}

#[test]
fn test_document_metadata() {
    let apidoc = Converter::new()
        .convert(&fixture_uri("widgets.raml"))
        .unwrap();

    assert_eq!(apidoc.name, "Widget API");
    assert_eq!(apidoc.base_url.as_deref(), Some("http://example.com/api"));
    assert_eq!(
        apidoc.description.as_deref(),
        Some("Manages widgets and their parts.")
    );
    assert_eq!(apidoc.apidoc.version, "0.11.23");
}

#[test]
fn test_operation_count_matches_declared_methods() {
    let apidoc = Converter::new()
        .convert(&fixture_uri("widgets.raml"))
        .unwrap();

    // /widgets: GET+POST, /widgets/{id}: GET+DELETE, /widgets/{id}/parts: GET
    assert_eq!(apidoc.resources["widgets"].operations.len(), 5);
    // /health: GET
    assert_eq!(apidoc.resources["health"].operations.len(), 1);
}

#[test]
fn test_operations_sorted_by_path_with_pathless_last() {
    let apidoc = Converter::new()
        .convert(&fixture_uri("widgets.raml"))
        .unwrap();

    let widgets = &apidoc.resources["widgets"];
    let shape: Vec<(Option<&str>, &str)> = widgets
        .operations
        .iter()
        .map(|o| (o.path.as_deref(), o.method.as_str()))
        .collect();

    assert_eq!(
        shape,
        vec![
            (Some("/:id"), "GET"),
            (Some("/:id"), "DELETE"),
            (Some("/:id/parts"), "GET"),
            (None, "GET"),
            (None, "POST"),
        ]
    );
}

#[test]
fn test_top_level_resources_keyed_by_stripped_path() {
    let apidoc = Converter::new()
        .convert(&fixture_uri("widgets.raml"))
        .unwrap();

    let names: Vec<&str> = apidoc.resources.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["health", "widgets"]);
    assert_eq!(apidoc.resources["widgets"].path, "/widgets");
    assert_eq!(
        apidoc.resources["widgets"].description.as_deref(),
        Some("Widget collection")
    );
}

#[test]
fn test_query_parameters_in_document_order() {
    let apidoc = Converter::new()
        .convert(&fixture_uri("widgets.raml"))
        .unwrap();

    let list = apidoc.resources["widgets"]
        .operations
        .iter()
        .find(|o| o.path.is_none() && o.method == "GET")
        .unwrap();

    let names: Vec<&str> = list.parameters.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["limit", "offset"]);

    assert_eq!(list.parameters[0].param_type.as_deref(), Some("integer"));
    assert_eq!(list.parameters[0].description.as_deref(), Some("page size"));
    assert_eq!(list.parameters[0].example.as_deref(), Some("10"));
    assert!(list.parameters[0].required);
    assert!(!list.parameters[1].required);
}

#[test]
fn test_responses_typed_by_schema_name() {
    let apidoc = Converter::new()
        .convert(&fixture_uri("widgets.raml"))
        .unwrap();

    let get_one = apidoc.resources["widgets"]
        .operations
        .iter()
        .find(|o| o.path.as_deref() == Some("/:id") && o.method == "GET")
        .unwrap();

    assert_eq!(get_one.responses["200"].response_type.as_deref(), Some("widget"));
    assert_eq!(
        get_one.responses["200"].description.as_deref(),
        Some("the widget")
    );
    assert_eq!(get_one.responses["404"].response_type.as_deref(), Some("error"));
}

#[test]
fn test_required_flag_serialization() {
    let apidoc = Converter::new()
        .convert(&fixture_uri("widgets.raml"))
        .unwrap();
    let json = serialize_json(&apidoc).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    let fields = parsed["models"]["widget"]["fields"].as_array().unwrap();

    let id = fields.iter().find(|f| f["name"] == "id").unwrap();
    let label = fields.iter().find(|f| f["name"] == "label").unwrap();

    assert_eq!(id["required"], serde_json::Value::Bool(true));
    // Never an explicit false: the member is absent entirely
    assert!(label.as_object().unwrap().get("required").is_none());
}

#[test]
fn test_missing_json_body_is_a_named_error() {
    let result = Converter::new().convert(&fixture_uri("no_json_body.raml"));

    match result {
        Err(Error::MissingJsonBody { method, status }) => {
            assert_eq!(method, "GET");
            assert_eq!(status, "200");
        }
        other => panic!("expected MissingJsonBody, got {:?}", other),
    }
}

#[test]
fn test_schema_without_properties_is_a_named_error() {
    let result = Converter::new().convert(&fixture_uri("no_properties.raml"));

    match result {
        Err(Error::MissingProperties { model }) => assert_eq!(model, "opaque"),
        other => panic!("expected MissingProperties, got {:?}", other),
    }
}

#[test]
fn test_missing_document_is_a_load_error() {
    let result = Converter::new().convert("file:///nonexistent/api.raml");

    assert!(matches!(result, Err(Error::DocumentLoad { .. })));
}

#[test]
fn test_write_apidoc_file_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("apidoc.json");

    let apidoc = Converter::new().convert(&fixture_uri("hello.raml")).unwrap();
    let json = serialize_json(&apidoc).unwrap();
    write_to_file(&json, &output_path).unwrap();

    let content = std::fs::read_to_string(&output_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();

    assert_eq!(parsed["name"], "Hello API");
    assert_eq!(parsed["apidoc"]["version"], "0.11.23");
    assert!(parsed["resources"]["helloes"].is_object());
    assert_eq!(
        parsed["resources"]["helloes"]["operations"][0]["responses"]["200"]["type"],
        "helloes"
    );
}
