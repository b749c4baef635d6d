use std::path::{Path, PathBuf};

use clap::Args;
use serde::Serialize;
use tracing::debug;

use crate::catalog::store::ReferenceStore;
use crate::cli::OutputFormat;
use crate::context::ReferenceContext;
use crate::parsing;

#[derive(Args)]
pub struct LookupArgs {
    /// Dictionary source: BAM, SAM, CRAM, .dict, or a JSON catalog
    #[arg(required = true)]
    pub input: PathBuf,

    /// Reference names or numeric ids to resolve (-1 means "no reference")
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    pub queries: Vec<String>,
}

/// Result of resolving one query
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct LookupResult {
    pub query: String,
    pub id: Option<usize>,
    pub name: Option<String>,
    pub length: Option<u64>,
}

pub fn run(args: LookupArgs, format: OutputFormat) -> anyhow::Result<()> {
    let store = load_store(&args.input)?;
    let context = store.context();

    let results: Vec<LookupResult> = args
        .queries
        .iter()
        .map(|query| resolve_query(&context, query))
        .collect();

    match format {
        OutputFormat::Text => {
            for result in &results {
                match (&result.id, &result.name) {
                    (Some(id), Some(name)) => println!(
                        "{}\t{id}\t{name}\t{}",
                        result.query,
                        result.length.map_or_else(|| "-".to_string(), |l| l.to_string())
                    ),
                    _ => println!("{}\tnot found", result.query),
                }
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&results)?),
        OutputFormat::Tsv => {
            println!("query\tid\tname\tlength");
            for result in &results {
                println!(
                    "{}\t{}\t{}\t{}",
                    result.query,
                    result.id.map_or_else(String::new, |id| id.to_string()),
                    result.name.as_deref().unwrap_or(""),
                    result.length.map_or_else(String::new, |l| l.to_string())
                );
            }
        }
    }

    Ok(())
}

/// Load a dictionary into a store, from a JSON catalog or a header
fn load_store(path: &Path) -> anyhow::Result<ReferenceStore> {
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    if is_json {
        return Ok(ReferenceStore::load_from_file(path)?);
    }

    let header = parsing::parse_input(path)?;
    let duplicates = header.duplicate_names();
    if !duplicates.is_empty() {
        anyhow::bail!(
            "{}: duplicate reference names: {}",
            path.display(),
            duplicates.join(", ")
        );
    }
    debug!(source = header.display_source(), "Loading dictionary");
    Ok(ReferenceStore::from_contigs(&header.contigs)?)
}

/// Resolve a query as a numeric id when it parses as one, else as a name
pub fn resolve_query(context: &ReferenceContext<'_>, query: &str) -> LookupResult {
    let id = match query.parse::<i64>() {
        Ok(raw) => usize::try_from(raw).ok().filter(|&id| id < context.len()),
        Err(_) => context.resolve_id_by_name(query),
    };

    LookupResult {
        query: query.to_string(),
        id,
        name: id.and_then(|id| context.resolve_name_by_id(id).map(|name| name.to_string())),
        length: id.and_then(|id| context.resolve_length_by_id(id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ReferenceStore {
        let store = ReferenceStore::new();
        store.append("chr1", 100).unwrap();
        store.append("2", 200).unwrap();
        store
    }

    #[test]
    fn test_resolve_by_name() {
        let store = store();
        let result = resolve_query(&store.context(), "chr1");
        assert_eq!(result.id, Some(0));
        assert_eq!(result.length, Some(100));
    }

    #[test]
    fn test_numeric_query_is_an_id() {
        let store = store();
        let result = resolve_query(&store.context(), "1");
        assert_eq!(result.name.as_deref(), Some("2"));
    }

    #[test]
    fn test_misses() {
        let store = store();
        let context = store.context();
        for query in ["-1", "2", "chrX", "99999999999999999999"] {
            let result = resolve_query(&context, query);
            assert_eq!(result.id, None, "{query}");
            assert_eq!(result.name, None, "{query}");
        }
    }

    #[test]
    fn test_load_store_rejects_duplicates() {
        let temp = tempfile::NamedTempFile::with_suffix(".dict").unwrap();
        std::fs::write(temp.path(), "@SQ\tSN:chr1\tLN:1\n@SQ\tSN:chr1\tLN:1\n").unwrap();
        assert!(load_store(temp.path()).is_err());
    }
}
