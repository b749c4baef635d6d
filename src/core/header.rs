use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::core::contig::Contig;

/// The sequence dictionary of one source file, in local id order.
///
/// Position `i` in `contigs` is the local reference id `i` that records of
/// that file carry in their reference fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceHeader {
    /// Source file path (if known)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// All contigs from @SQ lines
    pub contigs: Vec<Contig>,
}

impl SourceHeader {
    #[must_use]
    pub fn new(contigs: Vec<Contig>) -> Self {
        Self {
            source: None,
            contigs,
        }
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Number of reference sequences declared by the header
    #[must_use]
    pub fn len(&self) -> usize {
        self.contigs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contigs.is_empty()
    }

    /// Label used in logs and reports
    #[must_use]
    pub fn display_source(&self) -> &str {
        self.source.as_deref().unwrap_or("<unnamed>")
    }

    /// Names declared more than once, in first-repeat order
    #[must_use]
    pub fn duplicate_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for contig in &self.contigs {
            if !seen.insert(contig.name.as_str()) && !duplicates.contains(&contig.name.as_str()) {
                duplicates.push(contig.name.as_str());
            }
        }
        duplicates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_header_new() {
        let header = SourceHeader::new(vec![Contig::new("chr1", 100), Contig::new("chr2", 200)]);

        assert_eq!(header.len(), 2);
        assert!(!header.is_empty());
        assert_eq!(header.display_source(), "<unnamed>");
    }

    #[test]
    fn test_with_source() {
        let header = SourceHeader::new(vec![Contig::new("chr1", 100)]).with_source("/path/a.bam");
        assert_eq!(header.source, Some("/path/a.bam".to_string()));
        assert_eq!(header.display_source(), "/path/a.bam");
    }

    #[test]
    fn test_duplicate_names() {
        let header = SourceHeader::new(vec![
            Contig::new("chr1", 100),
            Contig::new("chr2", 200),
            Contig::new("chr1", 100),
            Contig::new("chr1", 100),
        ]);
        assert_eq!(header.duplicate_names(), vec!["chr1"]);
    }
}
