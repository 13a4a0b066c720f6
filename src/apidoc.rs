//! Data model for the apidoc output format.
//!
//! These types mirror the apidoc JSON wire format. Optional members that the
//! format omits when unset carry `skip_serializing_if`, so the serialized
//! document never contains explicit nulls for them. The top-level document
//! members (`info`, `base_url`, `description`) are always emitted.

use serde::Serialize;
use std::collections::BTreeMap;

/// The apidoc format revision emitted in every document
pub const APIDOC_VERSION: &str = "0.11.23";

/// Complete apidoc document
#[derive(Debug, Clone, Serialize)]
pub struct ApiDoc {
    /// API name (the source document's title)
    pub name: String,
    /// Format revision marker
    pub apidoc: ApidocVersion,
    /// Contact and license information
    pub info: Option<Info>,
    /// Base URL of the API
    pub base_url: Option<String>,
    /// Document-level description
    pub description: Option<String>,
    /// Named data models (model name -> Model)
    pub models: BTreeMap<String, Model>,
    /// Top-level resources (resource name -> Resource)
    pub resources: BTreeMap<String, Resource>,
}

/// Format revision wrapper (`"apidoc": {"version": "0.11.23"}`)
#[derive(Debug, Clone, Serialize)]
pub struct ApidocVersion {
    pub version: String,
}

impl Default for ApidocVersion {
    fn default() -> Self {
        Self {
            version: APIDOC_VERSION.to_string(),
        }
    }
}

/// Contact and license information
#[derive(Debug, Clone, Serialize)]
pub struct Info {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,
}

/// API contact
#[derive(Debug, Clone, Serialize)]
pub struct Contact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// API license
#[derive(Debug, Clone, Serialize)]
pub struct License {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A named data model reconstructed from a schema fragment
#[derive(Debug, Clone, Serialize)]
pub struct Model {
    /// Model description from the fragment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Typed fields, sorted by name
    pub fields: Vec<Field>,
}

/// One field of a data model
#[derive(Debug, Clone, Serialize)]
pub struct Field {
    /// Field name (the property key)
    pub name: String,
    /// Field type from the property's `type` attribute
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `Some(true)` iff the name appears in the fragment's `required` list;
    /// never `Some(false)`, and omitted from output when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<i64>,
}

/// A top-level resource with the flattened operations of its whole subtree
#[derive(Debug, Clone, Serialize)]
pub struct Resource {
    /// Path of the resource as declared in the source document
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Operations of this resource and all descendants, sorted by path
    pub operations: Vec<Operation>,
}

/// One (resource, HTTP method) pair from the flattened tree
#[derive(Debug, Clone, Serialize)]
pub struct Operation {
    /// Uppercase HTTP method name
    pub method: String,
    /// Subpath below the owning resource; set only when the flattened
    /// resource name carries a parameter placeholder
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Query parameters in document order
    pub parameters: Vec<Parameter>,
    /// Responses keyed by status code
    pub responses: BTreeMap<String, ApidocResponse>,
}

/// One query parameter of an operation
#[derive(Debug, Clone, Serialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub param_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<i64>,
}

/// One response of an operation, typed by a model name
#[derive(Debug, Clone, Serialize)]
pub struct ApidocResponse {
    /// Name of the model the response body conforms to
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub response_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
