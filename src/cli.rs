use anyhow::Result;
use clap::Parser;
use log::{debug, info};
use std::path::PathBuf;

/// RAML to apidoc converter - turns a RAML API definition into an apidoc JSON document
#[derive(Parser, Debug)]
#[command(name = "apidoc-from-raml")]
#[command(author, about, long_about = None)]
#[command(disable_version_flag = true)]
pub struct CliArgs {
    /// URI of the RAML document (file://, http(s)://, or a plain path)
    #[arg(long = "raml", value_name = "URI")]
    pub raml: String,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(long = "apidoc", value_name = "FILE")]
    pub apidoc: Option<PathBuf>,

    /// Print only the document's declared version and exit
    #[arg(long = "version")]
    pub version: bool,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Validate already-parsed arguments.
///
/// The only check beyond what clap enforces is the URI scheme: a URI with a
/// scheme other than `file` or `http(s)` is an argument error, not a load
/// error. Scheme-less URIs pass, they are plain filesystem paths.
pub fn validate_args(args: CliArgs) -> Result<CliArgs> {
    debug!("Parsed arguments: {:?}", args);

    if args.raml.contains("://")
        && !args.raml.starts_with("file://")
        && !args.raml.starts_with("http://")
        && !args.raml.starts_with("https://")
    {
        anyhow::bail!(
            "Bad raml uri {} - should be file:// or http(s):// or a plain path",
            args.raml
        );
    }

    info!("RAML document: {}", args.raml);
    if let Some(ref output) = args.apidoc {
        info!("Output file: {}", output.display());
    } else {
        info!("Output: stdout");
    }

    Ok(args)
}

/// Run the main workflow
pub fn run(args: CliArgs) -> Result<()> {
    use crate::converter::Converter;
    use crate::serializer::{serialize_json, write_to_file};

    let converter = Converter::new();

    // The version pass reads nothing but the declared version field
    if args.version {
        let version = converter.version(&args.raml)?;
        print!("{}", version);
        return Ok(());
    }

    info!("Converting {}", args.raml);
    let document = converter.convert(&args.raml)?;
    info!(
        "Converted {} models and {} resources",
        document.models.len(),
        document.resources.len()
    );

    let content = serialize_json(&document)?;

    if let Some(output_path) = &args.apidoc {
        write_to_file(&content, output_path)?;
        info!(
            "Successfully wrote apidoc document to {}",
            output_path.display()
        );
    } else {
        println!("{}", content);
    }

    Ok(())
}
