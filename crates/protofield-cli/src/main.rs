//! protofield CLI - Field metadata resolver for protobuf C# generators
//!
//! Commands:
//! - `protofield resolve` - Print template variables for every field
//! - `protofield extensions` - Print extension declarations
//! - `protofield tag` - Print the wire tag of a single field
//! - `protofield check` - Validate a protofield.toml options file

use clap::{Args, Parser, Subcommand};

mod generate;
mod input;
mod logging;
mod tag;

#[derive(Parser)]
#[command(name = "protofield")]
#[command(author, version, about = "Field metadata resolver for protobuf C# generators", long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print template variables for every field as JSON
    Resolve {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Print C# declarations for every extension field
    Extensions {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Print the wire tag of a field
    Tag {
        /// Field number (1 to 536870911)
        #[arg(short, long)]
        number: u32,

        /// Field kind, by name (e.g. sfixed32) or type code (e.g. 15)
        #[arg(short, long, value_parser = tag::parse_kind)]
        kind: protofield_core::FieldKind,
    },

    /// Validate a protofield.toml options file
    Check {
        /// Path to protofield.toml (default: ./protofield.toml)
        #[arg(short, long)]
        config: Option<String>,
    },
}

/// Inputs shared by commands that read descriptors
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// JSON file of resolved field descriptors
    #[arg(short, long)]
    input: String,

    /// Options file (TOML)
    #[arg(short, long)]
    config: Option<String>,

    /// protoc-style parameter, e.g. "internal_access"
    #[arg(short, long)]
    parameter: Option<String>,

    /// Generate internal instead of public members
    #[arg(long)]
    internal: bool,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    output: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve { source } => {
            let options = input::load_options(&source)?;
            logging::init(cli.verbose, &options.log_level);
            generate::run_resolve(&source, &options)?;
        }
        Commands::Extensions { source } => {
            let options = input::load_options(&source)?;
            logging::init(cli.verbose, &options.log_level);
            generate::run_extensions(&source, &options)?;
        }
        Commands::Tag { number, kind } => {
            logging::init(cli.verbose, "info");
            tag::run(number, kind)?;
        }
        Commands::Check { config } => {
            logging::init(cli.verbose, "info");
            input::check(config)?;
        }
    }

    Ok(())
}
