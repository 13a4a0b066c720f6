//! Model extraction from named schema fragments.
//!
//! Each RAML schema entry carries a model name and a raw JSON-schema-like
//! body (`description`, `required` list, `properties` map). This module
//! reconstructs a typed [`Model`] from each fragment. Extraction is
//! all-or-nothing: a malformed fragment aborts the whole conversion, no
//! partial model is produced.

use crate::apidoc::{Field, Model};
use crate::error::{Error, Result};
use crate::raml::SchemaFragment;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Mirror of the schema fragment wire shape.
///
/// `properties` deserializes into a `BTreeMap`, so fields come out in name
/// order regardless of their order in the fragment.
#[derive(Debug, Deserialize)]
struct RawSchema {
    description: Option<String>,
    /// Names of required fields; an absent list means nothing is required
    #[serde(default)]
    required: Vec<String>,
    properties: Option<BTreeMap<String, RawProperty>>,
}

#[derive(Debug, Deserialize)]
struct RawProperty {
    #[serde(rename = "type")]
    property_type: Option<String>,
    description: Option<String>,
    example: Option<serde_json::Value>,
    default: Option<serde_json::Value>,
    minimum: Option<i64>,
    maximum: Option<i64>,
}

/// Builds the models map from every named schema fragment, in document
/// order. A name declared twice keeps the later fragment.
///
/// # Errors
///
/// Fails on the first malformed fragment with [`Error::Parse`] or
/// [`Error::MissingProperties`].
pub fn extract_models(fragments: &[SchemaFragment]) -> Result<BTreeMap<String, Model>> {
    let mut models = BTreeMap::new();

    for fragment in fragments {
        models.insert(fragment.name.clone(), extract_model(fragment)?);
    }

    Ok(models)
}

/// Turns one named schema fragment into a [`Model`].
///
/// One [`Field`] is built per property, sorted by name. A field's
/// `required` flag is `true` iff its name appears in the fragment's
/// `required` list, and stays unset otherwise - it is never an explicit
/// `false`.
///
/// # Errors
///
/// Returns [`Error::Parse`] if the body is not a valid fragment and
/// [`Error::MissingProperties`] if it has no `properties` member.
pub fn extract_model(fragment: &SchemaFragment) -> Result<Model> {
    let raw: RawSchema = serde_json::from_str(&fragment.body).map_err(|e| Error::Parse {
        model: fragment.name.clone(),
        message: e.to_string(),
    })?;

    let properties = raw.properties.ok_or_else(|| Error::MissingProperties {
        model: fragment.name.clone(),
    })?;

    let fields = properties
        .into_iter()
        .map(|(name, property)| Field {
            required: raw.required.contains(&name).then_some(true),
            name,
            field_type: property.property_type,
            description: property.description,
            default: property.default.as_ref().map(json_scalar_to_string),
            example: property.example.as_ref().map(json_scalar_to_string),
            minimum: property.minimum,
            maximum: property.maximum,
        })
        .collect();

    Ok(Model {
        description: raw.description,
        fields,
    })
}

/// Renders a JSON scalar as the string the apidoc format expects.
fn json_scalar_to_string(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
