//! RAML to apidoc converter - command-line tool.
//!
//! Converts a RAML 0.8 API definition, fetched from a file or an HTTP(S)
//! URL, into an apidoc JSON document.
//!
//! # Usage
//!
//! Convert to a file:
//! ```bash
//! apidoc-from-raml --raml file:///path/to/api.raml --apidoc api.json
//! ```
//!
//! Convert to stdout:
//! ```bash
//! apidoc-from-raml --raml ./api.raml
//! ```
//!
//! Print only the document's declared version:
//! ```bash
//! apidoc-from-raml --raml http://example.com/api.raml --version
//! ```

mod apidoc;
mod cli;
mod converter;
mod error;
mod loader;
mod model_extractor;
mod operation_builder;
mod raml;
mod serializer;
mod tree_walker;

use clap::Parser;
use std::process;

fn main() {
    let args = match cli::CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // Help requests exit 0; missing or invalid arguments exit -1
            let failed = e.use_stderr();
            let _ = e.print();
            process::exit(if failed { -1 } else { 0 });
        }
    };

    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    let args = match cli::validate_args(args) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(-1);
        }
    };

    if let Err(e) = cli::run(args) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
