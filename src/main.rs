//! CLI entry point for canopy

use std::path::PathBuf;
use std::process;

use canopy::{Attribute, BuildError, BuilderConfig, TreeBuilder, write_json};
use clap::{CommandFactory, Parser};

#[derive(Parser, Debug)]
#[command(name = "canopy")]
#[command(about = "Emit a JSON representation of a directory tree")]
#[command(version)]
struct Args {
    /// The input folder (or file) to process
    #[arg(short, long)]
    path: PathBuf,

    /// Exclude entries whose root-relative path matches a regular
    /// expression (can be used multiple times)
    #[arg(short, long, value_name = "REGEX")]
    exclude: Vec<String>,

    /// Put the result into this file instead of stdout (overwrites if it
    /// exists)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Grab only the first level of the tree structure
    #[arg(long = "first-level", alias = "firstLevel")]
    first_level: bool,

    /// Attach file attributes, comma separated. Ex: --attributes size,type,extension
    #[arg(long, value_delimiter = ',', value_name = "LIST")]
    attributes: Vec<Attribute>,

    /// Pretty-print the JSON with two-space indentation
    #[arg(long)]
    pretty: bool,
}

fn main() {
    let args = Args::parse();

    let config = BuilderConfig {
        exclude: args.exclude,
        attributes: args.attributes,
        first_level: args.first_level,
    };

    let builder = match TreeBuilder::new(config) {
        Ok(builder) => builder,
        Err(e) => {
            // Bad configuration gets the same exit code as bad arguments.
            eprintln!("canopy: {e}");
            process::exit(2);
        }
    };

    let report = match builder.build(&args.path) {
        Ok(report) => report,
        Err(e @ BuildError::NotFound { .. }) => {
            eprintln!("canopy: {e}");
            eprintln!("{}", Args::command().render_usage());
            process::exit(1);
        }
        Err(e) => {
            eprintln!("canopy: {e}");
            process::exit(1);
        }
    };

    for warning in &report.warnings {
        eprintln!("canopy: warning: {warning}");
    }

    if let Err(e) = write_json(&report.root, args.pretty, args.output.as_deref()) {
        eprintln!("canopy: error writing output: {e}");
        process::exit(1);
    }
}
