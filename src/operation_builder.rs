//! Operation construction for a single resource node.
//!
//! Given the accumulated name of a flattened resource and its node, builds
//! one [`Operation`] per HTTP method declared on the node. The walker calls
//! this once per dequeued node.

use crate::apidoc::{ApidocResponse, Operation, Parameter};
use crate::error::{Error, Result};
use crate::raml::{Action, Method, ResourceNode};
use std::collections::BTreeMap;

/// The media type every response body must declare.
const JSON_MEDIA_TYPE: &str = "application/json";

/// Builds one [`Operation`] per HTTP method on `node`, in document order.
///
/// The operation `path` is set only when the accumulated resource name
/// contains a parameter placeholder (an opening brace); placeholders are
/// rewritten from `{name}` to `:name` form. Resources without placeholders
/// produce operations with no path at all.
///
/// # Errors
///
/// Returns [`Error::MissingJsonBody`] when any response of any action
/// declares no `application/json` body.
pub fn build_operations(resource_name: &str, node: &ResourceNode) -> Result<Vec<Operation>> {
    let path = resource_name
        .contains('{')
        .then(|| resource_name.replace('{', ":").replace('}', ""));

    node.actions
        .iter()
        .map(|(method, action)| {
            Ok(Operation {
                method: method.as_str().to_string(),
                path: path.clone(),
                description: action.description.clone(),
                parameters: build_parameters(action),
                responses: build_responses(*method, action)?,
            })
        })
        .collect()
}

/// Maps the action's query parameters 1:1, in document order.
fn build_parameters(action: &Action) -> Vec<Parameter> {
    action
        .query_parameters
        .iter()
        .map(|parameter| Parameter {
            name: parameter.name.clone(),
            param_type: parameter.param_type.clone(),
            description: parameter.description.clone(),
            required: parameter.required,
            default: parameter.default.clone(),
            example: parameter.example.clone(),
            minimum: parameter.minimum,
            maximum: parameter.maximum,
        })
        .collect()
}

fn build_responses(method: Method, action: &Action) -> Result<BTreeMap<String, ApidocResponse>> {
    let mut responses = BTreeMap::new();

    for (status, response) in &action.responses {
        // Every response must carry a JSON-typed body
        let body = response
            .bodies
            .get(JSON_MEDIA_TYPE)
            .ok_or_else(|| Error::MissingJsonBody {
                method: method.as_str().to_string(),
                status: status.clone(),
            })?;

        responses.insert(
            status.clone(),
            ApidocResponse {
                response_type: body.schema.clone(),
                description: response.description.clone(),
            },
        );
    }

    Ok(responses)
}
