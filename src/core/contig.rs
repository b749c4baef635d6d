use serde::{Deserialize, Serialize};

/// A single reference sequence as declared by an `@SQ` line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contig {
    /// Sequence name (SN tag in SAM)
    pub name: String,

    /// Sequence length (LN tag in SAM)
    pub length: u64,
}

impl Contig {
    pub fn new(name: impl Into<String>, length: u64) -> Self {
        Self {
            name: name.into(),
            length,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contig_json() {
        let json = serde_json::to_string(&Contig::new("chr2", 200)).unwrap();
        assert_eq!(json, r#"{"name":"chr2","length":200}"#);

        let parsed: Contig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Contig::new("chr2", 200));
    }

    #[test]
    fn test_catalog_entries_ignore_extra_fields() {
        let parsed: Contig =
            serde_json::from_str(r#"{"name":"chrM","length":16569,"md5":"abc"}"#).unwrap();
        assert_eq!(parsed, Contig::new("chrM", 16569));
    }
}
