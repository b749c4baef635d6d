//! Limits shared by the header parsers and the dictionary tables.

/// Maximum number of references in one dictionary (DOS protection)
pub const MAX_CONTIGS: usize = 100_000;

/// Whether a table already holding `count` references is full.
///
/// Call with the current count before pushing another reference.
#[must_use]
pub fn at_contig_limit(count: usize) -> bool {
    count >= MAX_CONTIGS
}
