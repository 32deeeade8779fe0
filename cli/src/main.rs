use anyhow::Result;
use clap::Parser;
use log::info;
use ontoviz::io::rdf_format;
use ontoviz::{Config, OntologyGraph};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "ontoviz")]
#[command(about = "Generate a Graphviz dot file for the input ontology files")]
#[command(arg_required_else_help = true)]
struct Cli {
    /// Input ontology files
    #[clap(required = true)]
    files: Vec<PathBuf>,
    /// Input file format (ttl, nt, n3, xml)
    #[clap(long, short, default_value = "ttl")]
    format: String,
    /// Location of the output dot file
    #[clap(long, short, default_value = "ontology.dot")]
    output: PathBuf,
    /// Reference ontology used for conformance warnings
    #[clap(long = "ontology", short = 'O')]
    ontology: Option<PathBuf>,
    /// Configuration file
    #[clap(long = "config", short = 'C')]
    config: Option<PathBuf>,
    /// Verbose mode - sets the RUST_LOG level to info, defaults to warning level
    #[clap(long, short, action, default_value = "false")]
    verbose: bool,
    /// Debug mode - sets the RUST_LOG level to debug, defaults to warning level
    #[clap(long, action, default_value = "false")]
    debug: bool,
}

fn main() -> Result<()> {
    let cmd = Cli::parse();

    let log_level = if cmd.verbose { "info" } else { "warn" };
    let log_level = if cmd.debug { "debug" } else { log_level };
    std::env::set_var("RUST_LOG", log_level);
    env_logger::init();

    // an unknown color token in the configuration fails here, before any
    // graph processing begins
    let config = match &cmd.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    let format = rdf_format(&cmd.format)
        .ok_or_else(|| anyhow::anyhow!("unknown input format '{}'", cmd.format))?;

    let graph =
        OntologyGraph::from_files(&cmd.files, Some(format), config, cmd.ontology.as_deref())?;
    graph.write_file(&cmd.output)?;
    info!("Wrote dot file to {}", cmd.output.display());
    Ok(())
}
