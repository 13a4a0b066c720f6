//! Conversion orchestration.
//!
//! [`Converter`] drives a full conversion: load and parse the source
//! document, extract the models map, flatten every top-level resource, and
//! assemble the final [`ApiDoc`]. It also provides the independent version
//! pass. A `Converter` holds no state, so one value can serve any number of
//! conversions.

use crate::apidoc::{ApiDoc, ApidocVersion, Resource};
use crate::error::Result;
use crate::loader;
use crate::model_extractor;
use crate::raml::{self, RamlDocument};
use crate::tree_walker;
use std::collections::BTreeMap;

/// Converts RAML documents into apidoc documents.
pub struct Converter;

impl Converter {
    pub fn new() -> Self {
        Converter
    }

    /// Converts the document behind `uri` into an [`ApiDoc`].
    ///
    /// Any failure is fatal: nothing is retried and no partial document is
    /// returned.
    ///
    /// # Arguments
    ///
    /// * `uri` - `file://`, `http(s)://`, or a bare filesystem path
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::DocumentLoad`] when the document
    /// cannot be fetched or parsed, and propagates every model-extraction
    /// and operation-construction failure.
    pub fn convert(&self, uri: &str) -> Result<ApiDoc> {
        let text = loader::fetch(uri)?;
        let document = raml::parse_document(uri, &text)?;

        let models = model_extractor::extract_models(&document.schemas)?;
        let resources = Self::build_resources(&document)?;
        let description = join_documentation(&document);

        Ok(ApiDoc {
            name: document.title,
            apidoc: ApidocVersion::default(),
            info: None,
            base_url: document.base_uri,
            description,
            models,
            resources,
        })
    }

    /// Reads only the declared version of the document behind `uri`.
    ///
    /// This is a separate pass: the document is fetched and parsed
    /// independently of [`Converter::convert`], and the version is returned
    /// rather than kept anywhere.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::DocumentLoad`] when the document
    /// cannot be fetched, is not valid YAML, or declares no version.
    pub fn version(&self, uri: &str) -> Result<String> {
        let text = loader::fetch(uri)?;
        raml::declared_version(uri, &text)
    }

    /// Builds one [`Resource`] per top-level resource, each carrying the
    /// flattened operations of its whole subtree. The resource name is its
    /// path with the single leading `/` stripped.
    fn build_resources(document: &RamlDocument) -> Result<BTreeMap<String, Resource>> {
        let mut resources = BTreeMap::new();

        for (path, node) in &document.resources {
            let name = path.strip_prefix('/').unwrap_or(path).to_string();

            resources.insert(
                name,
                Resource {
                    path: path.clone(),
                    description: node.description.clone(),
                    operations: tree_walker::walk(node)?,
                },
            );
        }

        Ok(resources)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

/// Joins the documentation entries into the document-level description.
fn join_documentation(document: &RamlDocument) -> Option<String> {
    let contents: Vec<&str> = document
        .documentation
        .iter()
        .filter_map(|entry| entry.content.as_deref())
        .collect();

    if contents.is_empty() {
        None
    } else {
        Some(contents.join("\n\n"))
    }
}
