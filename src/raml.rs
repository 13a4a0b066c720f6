//! RAML document parser.
//!
//! Parses RAML 0.8-style YAML text into an immutable value tree: document
//! metadata, named schema fragments, and the nested resource tree with its
//! HTTP actions. The tree is read-only input for the conversion core.
//!
//! Only the flat subset of RAML is understood: no resourceTypes, no traits,
//! no `!include` references. Nested resources are mapping keys starting with
//! `/`; actions are the RAML 0.8 verb set. Document order of actions, query
//! parameters and child resources is preserved, since it determines the
//! discovery order of the flattened operation list.

use crate::error::{Error, Result};
use serde_yaml::Value;
use std::collections::BTreeMap;

/// A parsed RAML document.
#[derive(Debug)]
pub struct RamlDocument {
    /// API title; a document without one is rejected
    pub title: String,
    /// Declared API version, rendered as a string
    pub version: Option<String>,
    /// Base URI of the API
    pub base_uri: Option<String>,
    /// Document-level documentation entries, in document order
    pub documentation: Vec<Documentation>,
    /// Named schema fragments, in document order
    pub schemas: Vec<SchemaFragment>,
    /// Top-level resources as (path, node) pairs, in document order
    pub resources: Vec<(String, ResourceNode)>,
}

/// One `documentation:` entry.
#[derive(Debug, Default)]
pub struct Documentation {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// A named schema fragment: the model name and the raw JSON-schema text.
#[derive(Debug)]
pub struct SchemaFragment {
    pub name: String,
    pub body: String,
}

/// One node of the nested resource tree.
///
/// Child nodes keep their mapping keys verbatim (RAML keys start with `/`
/// and may embed parameter placeholders such as `/{id}`).
#[derive(Debug, Default)]
pub struct ResourceNode {
    pub description: Option<String>,
    /// Actions in document order
    pub actions: Vec<(Method, Action)>,
    /// Child resources as (segment, node) pairs, in document order
    pub resources: Vec<(String, ResourceNode)>,
}

/// One HTTP action bound to a resource.
#[derive(Debug, Default)]
pub struct Action {
    pub description: Option<String>,
    /// Query parameters in document order
    pub query_parameters: Vec<QueryParameter>,
    /// Responses keyed by status code (integer YAML keys are stringified)
    pub responses: BTreeMap<String, RamlResponse>,
}

/// A declared query parameter.
#[derive(Debug, Default)]
pub struct QueryParameter {
    pub name: String,
    pub param_type: Option<String>,
    pub description: Option<String>,
    pub example: Option<String>,
    pub required: bool,
    pub default: Option<String>,
    pub minimum: Option<i64>,
    pub maximum: Option<i64>,
}

/// A declared response: description plus bodies keyed by media type.
#[derive(Debug, Default)]
pub struct RamlResponse {
    pub description: Option<String>,
    pub bodies: BTreeMap<String, BodyDeclaration>,
}

/// A response body declaration, optionally naming a schema.
#[derive(Debug, Default)]
pub struct BodyDeclaration {
    pub schema: Option<String>,
}

/// HTTP methods RAML 0.8 admits on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
}

impl Method {
    /// The uppercase method name used in apidoc output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Patch => "PATCH",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
        }
    }

    fn from_key(key: &str) -> Option<Method> {
        match key {
            "get" => Some(Method::Get),
            "post" => Some(Method::Post),
            "put" => Some(Method::Put),
            "delete" => Some(Method::Delete),
            "patch" => Some(Method::Patch),
            "head" => Some(Method::Head),
            "options" => Some(Method::Options),
            _ => None,
        }
    }
}

/// Parses RAML text into a [`RamlDocument`].
///
/// # Arguments
///
/// * `uri` - Where the text came from, used to label load errors
/// * `text` - The raw document text
///
/// # Errors
///
/// Returns [`Error::DocumentLoad`] if the text is not valid YAML, is not a
/// mapping, or declares no title.
pub fn parse_document(uri: &str, text: &str) -> Result<RamlDocument> {
    let root: Value =
        serde_yaml::from_str(text).map_err(|e| load_error(uri, e.to_string()))?;

    let mapping = root
        .as_mapping()
        .ok_or_else(|| load_error(uri, "document is not a YAML mapping".to_string()))?;

    let title = string_member(&root, "title")
        .ok_or_else(|| load_error(uri, "document declares no title".to_string()))?;

    let mut document = RamlDocument {
        title,
        version: string_member(&root, "version"),
        base_uri: string_member(&root, "baseUri"),
        documentation: parse_documentation(&root),
        schemas: parse_schemas(&root),
        resources: Vec::new(),
    };

    // Resources are the top-level mapping keys starting with '/'
    for (key, value) in mapping {
        let Some(key) = key.as_str() else { continue };
        if key.starts_with('/') {
            document
                .resources
                .push((key.to_string(), parse_resource(value)));
        }
    }

    Ok(document)
}

/// Reads only the declared `version` field of a RAML document.
///
/// This is the independent version pass: nothing but the top-level mapping
/// is inspected.
///
/// # Errors
///
/// Returns [`Error::DocumentLoad`] if the text is not valid YAML or
/// declares no version.
pub fn declared_version(uri: &str, text: &str) -> Result<String> {
    let root: Value =
        serde_yaml::from_str(text).map_err(|e| load_error(uri, e.to_string()))?;

    string_member(&root, "version")
        .ok_or_else(|| load_error(uri, "document declares no version".to_string()))
}

fn parse_documentation(root: &Value) -> Vec<Documentation> {
    let Some(entries) = root.get("documentation").and_then(Value::as_sequence) else {
        return Vec::new();
    };

    entries
        .iter()
        .map(|entry| Documentation {
            title: string_member(entry, "title"),
            content: string_member(entry, "content"),
        })
        .collect()
}

fn parse_schemas(root: &Value) -> Vec<SchemaFragment> {
    let Some(entries) = root.get("schemas").and_then(Value::as_sequence) else {
        return Vec::new();
    };

    let mut schemas = Vec::new();
    for entry in entries {
        let Some(mapping) = entry.as_mapping() else { continue };
        for (name, body) in mapping {
            if let (Some(name), Some(body)) = (name.as_str(), body.as_str()) {
                schemas.push(SchemaFragment {
                    name: name.to_string(),
                    body: body.to_string(),
                });
            }
        }
    }
    schemas
}

fn parse_resource(value: &Value) -> ResourceNode {
    let mut node = ResourceNode {
        description: string_member(value, "description"),
        ..ResourceNode::default()
    };

    // A bare resource key (`/health:`) is a valid resource with no detail
    let Some(mapping) = value.as_mapping() else {
        return node;
    };

    for (key, value) in mapping {
        let Some(key) = key.as_str() else { continue };
        if let Some(method) = Method::from_key(key) {
            node.actions.push((method, parse_action(value)));
        } else if key.starts_with('/') {
            node.resources.push((key.to_string(), parse_resource(value)));
        }
    }

    node
}

fn parse_action(value: &Value) -> Action {
    let mut action = Action {
        description: string_member(value, "description"),
        ..Action::default()
    };

    // A bare verb key (`get:`) is a valid action with no detail
    if let Some(parameters) = value.get("queryParameters").and_then(Value::as_mapping) {
        for (name, attributes) in parameters {
            let Some(name) = name.as_str() else { continue };
            action.query_parameters.push(QueryParameter {
                name: name.to_string(),
                param_type: string_member(attributes, "type"),
                description: string_member(attributes, "description"),
                example: string_member(attributes, "example"),
                required: attributes
                    .get("required")
                    .and_then(Value::as_bool)
                    .unwrap_or(false),
                default: string_member(attributes, "default"),
                minimum: attributes.get("minimum").and_then(Value::as_i64),
                maximum: attributes.get("maximum").and_then(Value::as_i64),
            });
        }
    }

    if let Some(responses) = value.get("responses").and_then(Value::as_mapping) {
        for (code, declaration) in responses {
            // Status keys are usually YAML integers (200:), sometimes strings
            let Some(code) = scalar_to_string(code) else { continue };
            action.responses.insert(code, parse_response(declaration));
        }
    }

    action
}

fn parse_response(value: &Value) -> RamlResponse {
    let mut response = RamlResponse {
        description: string_member(value, "description"),
        ..RamlResponse::default()
    };

    if let Some(bodies) = value.get("body").and_then(Value::as_mapping) {
        for (media_type, declaration) in bodies {
            let Some(media_type) = media_type.as_str() else { continue };
            response.bodies.insert(
                media_type.to_string(),
                BodyDeclaration {
                    schema: string_member(declaration, "schema"),
                },
            );
        }
    }

    response
}

fn string_member(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(scalar_to_string)
}

/// Renders a scalar YAML value as a string (`version: 0.1` parses as a
/// number but is still a version string to us).
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn load_error(uri: &str, message: String) -> Error {
    Error::DocumentLoad {
        uri: uri.to_string(),
        message,
    }
}
