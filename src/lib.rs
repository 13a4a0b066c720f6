//! RAML to apidoc converter - flattens RAML API definitions into apidoc JSON.
//!
//! This library converts a RAML 0.8-style API definition (a tree of nested
//! resources, each with HTTP actions, query parameters, and
//! JSON-schema-typed bodies) into the flat apidoc representation: top-level
//! resources, a flattened operation list per resource, and a map of named
//! data models.
//!
//! The converter assumes a flat source document:
//!
//! - no resource types or traits
//! - one schema per model, no cross-document references
//! - every response declares an `application/json` body naming a schema
//!
//! # Architecture
//!
//! The library is organized into several modules that work together:
//!
//! 1. [`loader`] - Fetches the raw document text from a file or HTTP(S) URL
//! 2. [`raml`] - Parses the text into an immutable resource-tree document
//! 3. [`model_extractor`] - Reconstructs typed models from schema fragments
//! 4. [`operation_builder`] - Builds operations from one node's HTTP actions
//! 5. [`tree_walker`] - Breadth-first flattens a resource subtree into an
//!    ordered operation list
//! 6. [`converter`] - Orchestrates a conversion and the version pass
//! 7. [`apidoc`] - The apidoc output data model
//! 8. [`serializer`] - Serializes the document to JSON
//!
//! # Example Usage
//!
//! ```no_run
//! use apidoc_from_raml::converter::Converter;
//! use apidoc_from_raml::serializer::serialize_json;
//!
//! let converter = Converter::new();
//! let document = converter.convert("file:///path/to/api.raml").unwrap();
//! let json = serialize_json(&document).unwrap();
//! println!("{}", json);
//! ```
//!
//! # Command-Line Interface
//!
//! For command-line usage, see the [`cli`] module which provides a complete
//! CLI application.

pub mod apidoc;
pub mod cli;
pub mod converter;
pub mod error;
pub mod loader;
pub mod model_extractor;
pub mod operation_builder;
pub mod raml;
pub mod serializer;
pub mod tree_walker;
