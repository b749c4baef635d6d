use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use tracing::{info, warn};

use crate::cli::OutputFormat;
use crate::context::{LengthConflict, ReferenceContext};
use crate::core::contig::Contig;
use crate::parsing;
use crate::parsing::sam::write_dictionary;

#[derive(Args)]
pub struct MergeArgs {
    /// Input files (BAM, SAM, CRAM, or .dict), merged in the order given
    #[arg(required = true, num_args = 1..)]
    pub inputs: Vec<PathBuf>,

    /// Write the merged dictionary as @SQ lines to this file
    #[arg(long)]
    pub dict_out: Option<PathBuf>,

    /// Fail when a reference length differs between inputs
    #[arg(long)]
    pub strict: bool,
}

/// Translation of one input into the merged id space
#[derive(Debug, Serialize)]
pub struct FileTranslation {
    pub source: String,
    pub local_names: Vec<String>,
    pub local_to_global: Vec<usize>,
    pub appended: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub conflicts: Vec<LengthConflict>,
}

#[derive(Debug, Serialize)]
pub struct MergeReport {
    pub references: Vec<Contig>,
    pub files: Vec<FileTranslation>,
}

pub fn run(args: MergeArgs, format: OutputFormat) -> anyhow::Result<()> {
    let mut context = ReferenceContext::new();
    let report = merge_inputs(&args, &mut context)?;

    match format {
        OutputFormat::Text => print_text_report(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Tsv => print_tsv_report(&report),
    }

    if let Some(path) = &args.dict_out {
        let mut writer = BufWriter::new(File::create(path)?);
        write_dictionary(&mut writer, &mut context)?;
        writer.flush()?;
        info!(path = %path.display(), "Wrote merged dictionary");
    }

    Ok(())
}

/// Bind every input header into `context`, in order
pub fn merge_inputs(
    args: &MergeArgs,
    context: &mut ReferenceContext<'_>,
) -> anyhow::Result<MergeReport> {
    let mut files = Vec::with_capacity(args.inputs.len());

    for path in &args.inputs {
        let header = parsing::parse_input(path)?;
        let binding = context.bind_header(&header)?;

        for conflict in &binding.conflicts {
            warn!(
                source = %path.display(),
                contig = %conflict.name,
                header_length = conflict.header_length,
                merged_length = conflict.global_length,
                "Reference length differs from merged dictionary"
            );
        }
        if args.strict && binding.has_conflicts() {
            anyhow::bail!(
                "{}: {} reference length conflict(s) with earlier inputs",
                path.display(),
                binding.conflicts.len()
            );
        }
        info!(
            source = %path.display(),
            references = header.len(),
            appended = binding.appended.len(),
            "Bound header"
        );

        files.push(FileTranslation {
            source: path.display().to_string(),
            local_names: header.contigs.iter().map(|c| c.name.clone()).collect(),
            local_to_global: context.translation().as_slice().to_vec(),
            appended: binding.appended.len(),
            conflicts: binding.conflicts,
        });
    }

    Ok(MergeReport {
        references: context.contigs(),
        files,
    })
}

fn print_text_report(report: &MergeReport) {
    println!("Merged Dictionary");
    println!("{}", "=".repeat(60));
    println!("  References: {}", report.references.len());
    for (id, contig) in report.references.iter().enumerate() {
        println!("  {id:>4}  {}  ({} bp)", contig.name, contig.length);
    }

    for file in &report.files {
        println!("\n{}", file.source);
        println!(
            "  References: {} ({} new)",
            file.local_names.len(),
            file.appended
        );
        for (local, (name, global)) in file
            .local_names
            .iter()
            .zip(&file.local_to_global)
            .enumerate()
        {
            println!("  {local:>4} -> {global:<4} {name}");
        }
        for conflict in &file.conflicts {
            println!(
                "  Length conflict: {} is {} here, {} in merged dictionary",
                conflict.name, conflict.header_length, conflict.global_length
            );
        }
    }
}

fn print_tsv_report(report: &MergeReport) {
    println!("source\tlocal_id\tname\tglobal_id");
    for file in &report.files {
        for (local, (name, global)) in file
            .local_names
            .iter()
            .zip(&file.local_to_global)
            .enumerate()
        {
            println!("{}\t{local}\t{name}\t{global}", file.source);
        }
    }
}
