use serde::{Deserialize, Serialize};
use std::cell::{Ref, RefCell};
use std::path::Path;
use thiserror::Error;
use tracing::warn;

use crate::context::{ContextError, NameIndex, NameLookup, ReferenceContext};
use crate::core::contig::Contig;
use crate::utils::validation::at_contig_limit;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid catalog: {0}")]
    Context(#[from] ContextError),
}

/// Catalog version for compatibility checking
pub const CATALOG_VERSION: &str = "1.0.0";

/// Serializable catalog format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub version: String,
    pub created_at: String,
    pub references: Vec<Contig>,
}

/// Owner of a canonical reference dictionary shared by many contexts.
///
/// The store keeps names, accelerator, and lengths in lock-step. Contexts
/// created with [`context`](Self::context) or
/// [`names_context`](Self::names_context) borrow these tables and see every
/// later [`append`](Self::append) immediately.
#[derive(Debug)]
pub struct ReferenceStore<A = NameIndex> {
    names: RefCell<Vec<String>>,
    name_index: RefCell<A>,
    lengths: RefCell<Vec<u64>>,
}

impl ReferenceStore<NameIndex> {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::with_lookup(NameIndex::new())
    }

    /// Build a store from contigs, in order
    ///
    /// # Errors
    ///
    /// Returns `ContextError::DuplicateReference` if a name repeats, or
    /// `ContextError::TooManyContigs` if the limit is exceeded.
    pub fn from_contigs<'c>(
        contigs: impl IntoIterator<Item = &'c Contig>,
    ) -> Result<Self, ContextError> {
        let store = Self::new();
        for contig in contigs {
            store.append(contig.name.as_str(), contig.length)?;
        }
        Ok(store)
    }

    /// Load a store from a JSON catalog file
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a store from a JSON catalog string
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != CATALOG_VERSION {
            warn!(
                expected = CATALOG_VERSION,
                found = %data.version,
                "Catalog version mismatch"
            );
        }

        Ok(Self::from_contigs(&data.references)?)
    }
}

impl Default for ReferenceStore<NameIndex> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: NameLookup> ReferenceStore<A> {
    /// Create an empty store using `lookup` as accelerator
    pub fn with_lookup(lookup: A) -> Self {
        Self {
            names: RefCell::new(Vec::new()),
            name_index: RefCell::new(lookup),
            lengths: RefCell::new(Vec::new()),
        }
    }

    /// Append a reference and return its global id.
    ///
    /// Takes `&self` so the store can keep growing while contexts borrow it.
    ///
    /// # Errors
    ///
    /// Returns `ContextError::DuplicateReference` if `name` is present, or
    /// `ContextError::TooManyContigs` if the limit is reached.
    pub fn append(&self, name: impl Into<String>, length: u64) -> Result<usize, ContextError> {
        let name = name.into();
        let mut names = self.names.borrow_mut();
        let mut name_index = self.name_index.borrow_mut();

        if let Some(id) = name_index.find(&names, &name) {
            return Err(ContextError::DuplicateReference { name, id });
        }
        let id = names.len();
        if at_contig_limit(id) {
            return Err(ContextError::TooManyContigs(id));
        }

        name_index.record(&name, id);
        names.push(name);
        self.lengths.borrow_mut().push(length);
        Ok(id)
    }

    /// A fully borrowed context over this store
    pub fn context(&self) -> ReferenceContext<'_, A> {
        ReferenceContext::borrowed(&self.names, &self.name_index, &self.lengths)
    }

    /// A context sharing this store's names but owning its own lengths
    pub fn names_context(&self) -> ReferenceContext<'_, A> {
        ReferenceContext::bind(&self.names, &self.name_index)
    }

    pub fn names(&self) -> Ref<'_, Vec<String>> {
        self.names.borrow()
    }

    pub fn lengths(&self) -> Ref<'_, Vec<u64>> {
        self.lengths.borrow()
    }

    /// The name cell, for binding contexts directly
    pub fn names_cell(&self) -> &RefCell<Vec<String>> {
        &self.names
    }

    pub fn name_index_cell(&self) -> &RefCell<A> {
        &self.name_index
    }

    pub fn lengths_cell(&self) -> &RefCell<Vec<u64>> {
        &self.lengths
    }

    /// Snapshot of the dictionary as contigs, in global id order
    pub fn contigs(&self) -> Vec<Contig> {
        self.names
            .borrow()
            .iter()
            .zip(self.lengths.borrow().iter())
            .map(|(name, &length)| Contig::new(name.clone(), length))
            .collect()
    }

    /// Export the dictionary to JSON
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let data = CatalogData {
            version: CATALOG_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            references: self.contigs(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Number of references in the store
    pub fn len(&self) -> usize {
        self.names.borrow().len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.names.borrow().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::LinearLookup;
    use crate::core::types::ContextMode;

    fn store() -> ReferenceStore {
        let store = ReferenceStore::new();
        store.append("chr1", 1000).unwrap();
        store.append("chr2", 2000).unwrap();
        store
    }

    #[test]
    fn test_append_assigns_dense_ids() {
        let store = store();
        assert_eq!(store.len(), 2);
        assert_eq!(store.append("chrM", 16569).unwrap(), 2);
        assert_eq!(*store.lengths(), vec![1000, 2000, 16569]);
    }

    #[test]
    fn test_append_duplicate_rejected() {
        let store = store();
        assert!(matches!(
            store.append("chr1", 5),
            Err(ContextError::DuplicateReference { id: 0, .. })
        ));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_context_sees_appends() {
        let store = store();
        let context = store.context();
        assert_eq!(context.mode(), Some(ContextMode::FullyBorrowed));
        assert!(context.resolve_name_by_id(2).is_none());

        store.append("chr3", 3000).unwrap();
        assert_eq!(context.resolve_name_by_id(2).as_deref(), Some("chr3"));
        assert_eq!(context.resolve_id_by_name("chr3"), Some(2));
        assert_eq!(context.resolve_length_by_id(2), Some(3000));
    }

    #[test]
    fn test_names_context_owns_lengths() {
        let store = store();
        let mut context = store.names_context();
        assert_eq!(context.mode(), Some(ContextMode::Mixed));

        context.lengths_mut().unwrap().extend([10, 20]);
        assert_eq!(context.resolve_length_by_id(1), Some(20));
        assert_eq!(*store.lengths(), vec![1000, 2000]);
        assert!(context.names_mut().is_err());
    }

    #[test]
    fn test_linear_lookup_store() {
        let store = ReferenceStore::with_lookup(LinearLookup);
        store.append("1", 10).unwrap();
        store.append("2", 20).unwrap();
        assert_eq!(store.context().resolve_id_by_name("2"), Some(1));
    }

    #[test]
    fn test_json_round_trip() {
        let store = store();
        let json = store.to_json().unwrap();
        let loaded = ReferenceStore::from_json(&json).unwrap();

        assert_eq!(*loaded.names(), vec!["chr1".to_string(), "chr2".to_string()]);
        assert_eq!(*loaded.lengths(), vec![1000, 2000]);
    }

    #[test]
    fn test_from_json_rejects_duplicates() {
        let json = r#"{
            "version": "1.0.0",
            "created_at": "2024-01-01T00:00:00Z",
            "references": [
                {"name": "chr1", "length": 1},
                {"name": "chr1", "length": 1}
            ]
        }"#;
        assert!(matches!(
            ReferenceStore::from_json(json),
            Err(CatalogError::Context(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let temp = tempfile::NamedTempFile::with_suffix(".json").unwrap();
        std::fs::write(temp.path(), store().to_json().unwrap()).unwrap();

        let loaded = ReferenceStore::load_from_file(temp.path()).unwrap();
        assert_eq!(loaded.len(), 2);
    }
}
