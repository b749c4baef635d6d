use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::context::{ContextError, HeaderBinding, NameLookup, ReferenceContext, ScratchBuffers};
use crate::core::contig::Contig;
use crate::core::header::SourceHeader;
use crate::utils::validation::at_contig_limit;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid SAM header format: {0}")]
    InvalidFormat(String),

    #[error("noodles error: {0}")]
    Noodles(String),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Too many contigs: {0} exceeds maximum allowed (100000)")]
    TooManyContigs(usize),

    #[error("Reference context error: {0}")]
    Context(#[from] ContextError),

    #[error("Failed to format header line: {0}")]
    Format(#[from] std::fmt::Error),
}

/// Parse a SAM/BAM/CRAM file and extract the header
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Noodles` if
/// parsing fails, `ParseError::UnsupportedFormat` for unknown extensions, or
/// `ParseError::TooManyContigs` if the limit is exceeded.
pub fn parse_file(path: &Path) -> Result<SourceHeader, ParseError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);

    match extension.as_deref() {
        Some("sam") => parse_sam_file(path),
        Some("bam") => parse_bam_file(path),
        Some("cram") => parse_cram_file(path),
        Some(ext) => Err(ParseError::UnsupportedFormat(ext.to_string())),
        None => {
            // Try to detect from content - default to SAM
            parse_sam_file(path)
        }
    }
}

/// Parse a SAM file (text format)
fn parse_sam_file(path: &Path) -> Result<SourceHeader, ParseError> {
    use noodles::sam;

    let mut reader = std::fs::File::open(path)
        .map(BufReader::new)
        .map(sam::io::Reader::new)?;

    let header = reader
        .read_header()
        .map_err(|e| ParseError::Noodles(e.to_string()))?;

    header_to_source(&header, Some(path))
}

/// Parse a BAM file (binary format)
fn parse_bam_file(path: &Path) -> Result<SourceHeader, ParseError> {
    use noodles::bam;

    let mut reader = std::fs::File::open(path).map(bam::io::Reader::new)?;

    let header = reader
        .read_header()
        .map_err(|e| ParseError::Noodles(e.to_string()))?;

    header_to_source(&header, Some(path))
}

/// Parse a CRAM file
fn parse_cram_file(path: &Path) -> Result<SourceHeader, ParseError> {
    use noodles::cram;

    let mut reader = std::fs::File::open(path).map(cram::io::Reader::new)?;

    // Read file definition
    reader
        .read_file_definition()
        .map_err(|e| ParseError::Noodles(e.to_string()))?;

    let header = reader
        .read_file_header()
        .map_err(|e| ParseError::Noodles(e.to_string()))?;

    header_to_source(&header, Some(path))
}

/// Convert a noodles header to a `SourceHeader`, keeping `@SQ` order
fn header_to_source(
    header: &noodles::sam::Header,
    source: Option<&Path>,
) -> Result<SourceHeader, ParseError> {
    let mut contigs = Vec::new();

    for (name, map) in header.reference_sequences() {
        if at_contig_limit(contigs.len()) {
            return Err(ParseError::TooManyContigs(contigs.len()));
        }
        contigs.push(Contig::new(name.to_string(), map.length().get() as u64));
    }

    let mut parsed = SourceHeader::new(contigs);
    if let Some(path) = source {
        parsed = parsed.with_source(path.display().to_string());
    }
    debug!(
        source = parsed.display_source(),
        contigs = parsed.len(),
        "Read sequence dictionary"
    );

    Ok(parsed)
}

/// Parse one header line. Returns `Ok(None)` for lines other than `@SQ`.
///
/// The position of an `@SQ` line is its local reference id, so a malformed
/// one is an error rather than skipped.
fn parse_sq_line(line: &str) -> Result<Option<Contig>, ParseError> {
    let mut fields = line.split('\t');
    if fields.next() != Some("@SQ") {
        return Ok(None);
    }

    let mut name: Option<&str> = None;
    let mut raw_length: Option<&str> = None;
    for field in fields {
        match field.split_once(':') {
            Some(("SN", value)) => name = Some(value),
            Some(("LN", value)) => raw_length = Some(value),
            _ => {}
        }
    }

    let name = name
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ParseError::InvalidFormat(format!("@SQ line without SN: {line}")))?;
    let raw_length = raw_length.ok_or_else(|| {
        ParseError::InvalidFormat(format!("@SQ line for '{name}' without LN"))
    })?;
    let length: u64 = raw_length.parse().map_err(|_| {
        ParseError::InvalidFormat(format!("@SQ line for '{name}' has invalid LN '{raw_length}'"))
    })?;

    Ok(Some(Contig::new(name, length)))
}

/// Parse header from raw text (stdin or pasted)
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if no `@SQ` lines are found or an
/// `@SQ` line lacks SN or a numeric LN, or `ParseError::TooManyContigs` if
/// the limit is exceeded.
pub fn parse_header_text(text: &str) -> Result<SourceHeader, ParseError> {
    let mut contigs = Vec::new();

    for line in text.lines() {
        if let Some(contig) = parse_sq_line(line)? {
            if at_contig_limit(contigs.len()) {
                return Err(ParseError::TooManyContigs(contigs.len()));
            }
            contigs.push(contig);
        }
    }

    if contigs.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No @SQ lines found in header".to_string(),
        ));
    }

    Ok(SourceHeader::new(contigs))
}

/// Stream a SAM text header from `reader` and bind it into `context`.
///
/// Lines are read into the context's scratch buffer. Reading stops before
/// the first line that does not start with `@`, so the reader is left
/// positioned at the first alignment record. A header without `@SQ` lines
/// binds an empty translation.
///
/// # Errors
///
/// Returns `ParseError::Io` on read failures, `ParseError::InvalidFormat` for
/// a malformed `@SQ` line, `ParseError::TooManyContigs` if the limit is
/// exceeded, or `ParseError::Context` if binding fails. The context is left
/// unchanged on error.
pub fn read_header_into<R: BufRead, A: NameLookup>(
    reader: &mut R,
    context: &mut ReferenceContext<'_, A>,
) -> Result<HeaderBinding, ParseError> {
    let mut contigs = Vec::new();

    loop {
        if reader.fill_buf()?.first() != Some(&b'@') {
            break;
        }

        let line = context.scratch_mut().line();
        reader.read_line(line)?;

        if let Some(contig) = parse_sq_line(line.trim_end_matches(|c| c == '\n' || c == '\r'))? {
            if at_contig_limit(contigs.len()) {
                return Err(ParseError::TooManyContigs(contigs.len()));
            }
            contigs.push(contig);
        }
    }

    Ok(context.bind_header(&SourceHeader::new(contigs))?)
}

/// Write the context dictionary as `@SQ` lines, in global id order.
///
/// Lines are assembled in the context's scratch buffer. References without
/// a known length are written with `LN:0`.
///
/// # Errors
///
/// Returns `ParseError::Io` if writing fails, or `ParseError::Context` if the
/// owner of a borrowed table is writing it.
pub fn write_dictionary<W: Write, A: NameLookup>(
    writer: &mut W,
    context: &mut ReferenceContext<'_, A>,
) -> Result<(), ParseError> {
    let mut scratch = std::mem::take(context.scratch_mut());
    let result = write_sq_lines(writer, context, &mut scratch);
    *context.scratch_mut() = scratch;
    result
}

fn write_sq_lines<W: Write, A: NameLookup>(
    writer: &mut W,
    context: &ReferenceContext<'_, A>,
    scratch: &mut ScratchBuffers,
) -> Result<(), ParseError> {
    use std::fmt::Write as _;

    let names = context.try_names()?;
    let lengths = context.try_lengths()?;

    for (id, name) in names.iter().enumerate() {
        let length = lengths.get(id).copied().unwrap_or(0);

        let line = scratch.line();
        writeln!(line, "@SQ\tSN:{name}\tLN:{length}")?;
        writer.write_all(line.as_bytes())?;
    }
    Ok(())
}
