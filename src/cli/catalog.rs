use std::path::PathBuf;

use clap::{Args, Subcommand};
use tracing::info;

use crate::catalog::store::ReferenceStore;
use crate::cli::merge::{merge_inputs, MergeArgs};
use crate::cli::OutputFormat;
use crate::context::ReferenceContext;

#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommands,
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// Merge input dictionaries and export them as a JSON catalog
    Export {
        /// Input file(s) - BAM, SAM, CRAM, or .dict
        #[arg(short, long = "input", required = true, num_args = 1..)]
        inputs: Vec<PathBuf>,

        /// Output file (JSON). If not specified, prints to stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the references of a JSON catalog
    Show {
        /// Catalog file
        #[arg(required = true)]
        catalog: PathBuf,
    },
}

pub fn run(args: CatalogArgs, format: OutputFormat) -> anyhow::Result<()> {
    match args.command {
        CatalogCommands::Export { inputs, output } => run_export(inputs, output),
        CatalogCommands::Show { catalog } => run_show(catalog, format),
    }
}

fn run_export(inputs: Vec<PathBuf>, output: Option<PathBuf>) -> anyhow::Result<()> {
    let merge_args = MergeArgs {
        inputs,
        dict_out: None,
        strict: false,
    };
    let mut context = ReferenceContext::new();
    merge_inputs(&merge_args, &mut context)?;

    let store = ReferenceStore::from_contigs(&context.contigs())?;
    let json = store.to_json()?;

    if let Some(path) = output {
        std::fs::write(&path, json)?;
        info!(
            path = %path.display(),
            references = store.len(),
            "Exported catalog"
        );
    } else {
        println!("{json}");
    }

    Ok(())
}

fn run_show(catalog: PathBuf, format: OutputFormat) -> anyhow::Result<()> {
    let store = ReferenceStore::load_from_file(&catalog)?;
    let contigs = store.contigs();

    match format {
        OutputFormat::Text => {
            println!("Catalog: {}", catalog.display());
            println!("  References: {}", contigs.len());
            for (id, contig) in contigs.iter().enumerate() {
                println!("  {id:>4}  {}  ({} bp)", contig.name, contig.length);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&contigs)?),
        OutputFormat::Tsv => {
            println!("id\tname\tlength");
            for (id, contig) in contigs.iter().enumerate() {
                println!("{id}\t{}\t{}", contig.name, contig.length);
            }
        }
    }

    Ok(())
}
