//! Command-line interface for ref-context.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **merge**: Merge the sequence dictionaries of several files and report
//!   each file's local to global reference id table
//! - **lookup**: Resolve reference names and ids against one dictionary
//! - **catalog**: Export merged dictionaries to JSON and inspect them
//!
//! ## Usage
//!
//! ```text
//! # Merge two BAM headers into one dictionary
//! ref-context merge a.bam b.bam
//!
//! # Write the merged dictionary as a .dict file
//! ref-context merge a.bam b.sam --dict-out merged.dict
//!
//! # Resolve names and ids
//! ref-context lookup sample.bam chr1 3 -1
//!
//! # JSON output for scripting
//! ref-context merge a.bam b.bam --format json
//! ```

use clap::{Parser, Subcommand};

pub mod catalog;
pub mod lookup;
pub mod merge;

#[derive(Parser)]
#[command(name = "ref-context")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Resolve and merge reference ids across SAM/BAM/CRAM headers")]
#[command(
    long_about = "ref-context resolves numeric reference ids in alignment files to reference names and back.\n\nWhen several files are combined it merges their sequence dictionaries into one global id space and reports how each file's local ids translate into it."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Merge sequence dictionaries and print id translations
    Merge(merge::MergeArgs),

    /// Resolve reference names or ids
    Lookup(lookup::LookupArgs),

    /// Export or inspect dictionary catalogs
    Catalog(catalog::CatalogArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
