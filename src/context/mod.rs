//! The reference context shared by a SAM/BAM reader or writer.
//!
//! A [`ReferenceContext`] holds the reference dictionary that record
//! reference fields point into:
//!
//! - the ordered reference names, indexed by global reference id
//! - a [`NameLookup`] accelerator for name to id lookups
//! - the reference lengths, index-aligned with the names
//! - [`ScratchBuffers`] for assembling text while parsing
//! - the [`LocalTranslation`] of the source file currently being read
//!
//! Each of the three tables is held in a [`Storage`] slot that either owns
//! the table or borrows it from an external owner such as
//! [`ReferenceStore`](crate::catalog::store::ReferenceStore). The storage of
//! each slot is chosen at construction and never changes.
//!
//! ## Example
//!
//! ```rust
//! use ref_context::ReferenceContext;
//!
//! let mut context = ReferenceContext::new();
//! context.append_reference("chr1", 248_956_422).unwrap();
//! context.append_reference("chr2", 242_193_529).unwrap();
//!
//! assert_eq!(context.resolve_id_by_name("chr2"), Some(1));
//! assert_eq!(context.resolve_name_by_id(0).as_deref(), Some("chr1"));
//! assert!(context.resolve_name_by_id(2).is_none());
//!
//! context.rebind_local_translation(vec![1, 0]);
//! assert_eq!(context.translate_local_to_global(0), Some(1));
//! assert_eq!(context.translate_raw(-1), -1);
//! ```

pub mod lookup;
pub mod merge;
pub mod scratch;
pub mod storage;
pub mod translation;

use std::cell::{Ref, RefCell, RefMut};

use thiserror::Error;

use crate::core::contig::Contig;
use crate::core::types::{ContextMode, StorageMode, Table};
use crate::utils::validation::at_contig_limit;

pub use lookup::{LinearLookup, NameIndex, NameLookup};
pub use merge::{HeaderBinding, LengthConflict};
pub use scratch::ScratchBuffers;
pub use storage::Storage;
pub use translation::LocalTranslation;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContextError {
    #[error("Cannot {action} the {table} table: it is {mode} by this context")]
    ModeViolation {
        table: Table,
        mode: StorageMode,
        action: &'static str,
    },

    #[error("Names and lengths out of step: {names} names, {lengths} lengths")]
    LengthMismatch { names: usize, lengths: usize },

    #[error("Reference '{name}' is already present with id {id}")]
    DuplicateReference { name: String, id: usize },

    #[error("Reference '{0}' is not in the borrowed dictionary")]
    UnknownReference(String),

    #[error("A {0} context needs an owner to bind its tables to")]
    MissingOwner(ContextMode),

    #[error("Too many contigs: {0} exceeds maximum allowed (100000)")]
    TooManyContigs(usize),

    #[error("The {0} table is being written by its owner")]
    Busy(Table),
}

/// Reference dictionary and id translation state for one reading or writing
/// session.
#[derive(Debug)]
pub struct ReferenceContext<'a, A = NameIndex> {
    names: Storage<'a, Vec<String>>,
    name_index: Storage<'a, A>,
    lengths: Storage<'a, Vec<u64>>,
    scratch: ScratchBuffers,
    translation: LocalTranslation,
}

impl<'a> ReferenceContext<'a, NameIndex> {
    /// Create a fully owned, empty context
    #[must_use]
    pub fn new() -> Self {
        Self::with_lookup(NameIndex::new())
    }

    /// Create a fully owned context seeded with `contigs`, in order
    ///
    /// # Errors
    ///
    /// Returns `ContextError::DuplicateReference` if a name repeats, or
    /// `ContextError::TooManyContigs` if the limit is exceeded.
    pub fn from_contigs<'c>(
        contigs: impl IntoIterator<Item = &'c Contig>,
    ) -> Result<Self, ContextError> {
        let mut context = Self::new();
        for contig in contigs {
            context.append_reference(contig.name.as_str(), contig.length)?;
        }
        Ok(context)
    }

    /// Create an owned context for `mode`.
    ///
    /// Only [`ContextMode::FullyOwned`] can be built without an external
    /// owner; the borrowed modes need the tables to bind to.
    ///
    /// # Errors
    ///
    /// Returns `ContextError::MissingOwner` for the borrowed modes.
    pub fn with_mode(mode: ContextMode) -> Result<Self, ContextError> {
        match mode {
            ContextMode::FullyOwned => Ok(Self::new()),
            ContextMode::FullyBorrowed | ContextMode::Mixed => Err(ContextError::MissingOwner(mode)),
        }
    }
}

impl Default for ReferenceContext<'_, NameIndex> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, A: NameLookup> ReferenceContext<'a, A> {
    /// Create a fully owned, empty context using `lookup` as accelerator
    pub fn with_lookup(lookup: A) -> Self {
        Self {
            names: Storage::owned(Vec::new()),
            name_index: Storage::owned(lookup),
            lengths: Storage::owned(Vec::new()),
            scratch: ScratchBuffers::new(),
            translation: LocalTranslation::default(),
        }
    }

    /// Bind to a names table and its accelerator owned elsewhere.
    ///
    /// Lengths stay owned by the context, so they can be computed
    /// independently of the shared names.
    pub fn bind(names: &'a RefCell<Vec<String>>, name_index: &'a RefCell<A>) -> Self {
        Self {
            names: Storage::borrowed(names),
            name_index: Storage::borrowed(name_index),
            lengths: Storage::owned(Vec::new()),
            scratch: ScratchBuffers::new(),
            translation: LocalTranslation::default(),
        }
    }

    /// Bind to names, accelerator, and lengths all owned elsewhere
    pub fn borrowed(
        names: &'a RefCell<Vec<String>>,
        name_index: &'a RefCell<A>,
        lengths: &'a RefCell<Vec<u64>>,
    ) -> Self {
        Self {
            names: Storage::borrowed(names),
            name_index: Storage::borrowed(name_index),
            lengths: Storage::borrowed(lengths),
            scratch: ScratchBuffers::new(),
            translation: LocalTranslation::default(),
        }
    }

    /// Expose the tables of this context through a fully borrowed view.
    ///
    /// Nothing is copied: the view resolves through the same cells and
    /// answers exactly like `self`. It starts with its own empty scratch
    /// space and no bound translation.
    pub fn view(&self) -> ReferenceContext<'_, A> {
        ReferenceContext {
            names: Storage::borrowed(self.names.cell()),
            name_index: Storage::borrowed(self.name_index.cell()),
            lengths: Storage::borrowed(self.lengths.cell()),
            scratch: ScratchBuffers::new(),
            translation: LocalTranslation::default(),
        }
    }

    /// Deep copy the current tables into a fully owned context.
    ///
    /// The bound translation is carried over; scratch space is not.
    pub fn detach(&self) -> ReferenceContext<'a, A>
    where
        A: Clone,
    {
        ReferenceContext {
            names: self.names.to_owned_storage(),
            name_index: self.name_index.to_owned_storage(),
            lengths: self.lengths.to_owned_storage(),
            scratch: ScratchBuffers::new(),
            translation: self.translation.clone(),
        }
    }

    // === Storage ===

    #[must_use]
    pub fn storage_mode(&self, table: Table) -> StorageMode {
        match table {
            Table::Names => self.names.mode(),
            Table::NameIndex => self.name_index.mode(),
            Table::Lengths => self.lengths.mode(),
        }
    }

    /// The construction mode, or `None` for owned names over borrowed lengths
    #[must_use]
    pub fn mode(&self) -> Option<ContextMode> {
        ContextMode::from_storage(self.names.mode(), self.lengths.mode())
    }

    pub fn names(&self) -> Ref<'_, Vec<String>> {
        self.names.get()
    }

    /// Shared access to the names table, failing while the owner writes it.
    ///
    /// # Errors
    ///
    /// Returns `ContextError::Busy` if the table is mutably borrowed.
    pub fn try_names(&self) -> Result<Ref<'_, Vec<String>>, ContextError> {
        self.names.try_get().ok_or(ContextError::Busy(Table::Names))
    }

    /// Mutable access to an owned names table.
    ///
    /// The accelerator is not updated; prefer
    /// [`append_reference`](Self::append_reference) for growth.
    ///
    /// # Errors
    ///
    /// Returns `ContextError::ModeViolation` if the names are borrowed.
    pub fn names_mut(&mut self) -> Result<RefMut<'_, Vec<String>>, ContextError> {
        self.names
            .owned_mut()
            .ok_or_else(|| write_violation(Table::Names))
    }

    /// Point the borrowed names table at another collection.
    ///
    /// # Errors
    ///
    /// Returns `ContextError::ModeViolation` if the context owns its names;
    /// the owned names are left unchanged.
    pub fn set_names(&mut self, names: &'a RefCell<Vec<String>>) -> Result<(), ContextError> {
        if self.names.rebind(names) {
            Ok(())
        } else {
            Err(rebind_violation(Table::Names))
        }
    }

    pub fn lengths(&self) -> Ref<'_, Vec<u64>> {
        self.lengths.get()
    }

    /// # Errors
    ///
    /// Returns `ContextError::Busy` if the table is mutably borrowed.
    pub fn try_lengths(&self) -> Result<Ref<'_, Vec<u64>>, ContextError> {
        self.lengths.try_get().ok_or(ContextError::Busy(Table::Lengths))
    }

    /// Mutable access to an owned lengths table.
    ///
    /// # Errors
    ///
    /// Returns `ContextError::ModeViolation` if the lengths are borrowed.
    pub fn lengths_mut(&mut self) -> Result<RefMut<'_, Vec<u64>>, ContextError> {
        self.lengths
            .owned_mut()
            .ok_or_else(|| write_violation(Table::Lengths))
    }

    /// Point the borrowed lengths table at another collection.
    ///
    /// # Errors
    ///
    /// Returns `ContextError::ModeViolation` if the context owns its lengths.
    pub fn set_lengths(&mut self, lengths: &'a RefCell<Vec<u64>>) -> Result<(), ContextError> {
        if self.lengths.rebind(lengths) {
            Ok(())
        } else {
            Err(rebind_violation(Table::Lengths))
        }
    }

    pub fn name_index(&self) -> Ref<'_, A> {
        self.name_index.get()
    }

    /// # Errors
    ///
    /// Returns `ContextError::ModeViolation` if the accelerator is borrowed.
    pub fn name_index_mut(&mut self) -> Result<RefMut<'_, A>, ContextError> {
        self.name_index
            .owned_mut()
            .ok_or_else(|| write_violation(Table::NameIndex))
    }

    /// Point the borrowed accelerator at another instance.
    ///
    /// # Errors
    ///
    /// Returns `ContextError::ModeViolation` if the context owns its
    /// accelerator.
    pub fn set_name_index(&mut self, name_index: &'a RefCell<A>) -> Result<(), ContextError> {
        if self.name_index.rebind(name_index) {
            Ok(())
        } else {
            Err(rebind_violation(Table::NameIndex))
        }
    }

    pub fn scratch_mut(&mut self) -> &mut ScratchBuffers {
        &mut self.scratch
    }

    // === Lookups ===

    /// Number of references in the dictionary
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.get().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.get().is_empty()
    }

    /// Global id of `name`, or `None` if it is not in the dictionary.
    ///
    /// Ids reported by a stale accelerator that fall outside the names table
    /// are treated as misses.
    #[must_use]
    pub fn resolve_id_by_name(&self, name: &str) -> Option<usize> {
        let names = self.names.cell().try_borrow().ok()?;
        let index = self.name_index.cell().try_borrow().ok()?;
        index.find(&names, name).filter(|&id| id < names.len())
    }

    /// Name of global id `id`, or `None` if it is out of range
    #[must_use]
    pub fn resolve_name_by_id(&self, id: usize) -> Option<Ref<'_, str>> {
        let names = self.names.cell().try_borrow().ok()?;
        Ref::filter_map(names, |names| names.get(id).map(String::as_str)).ok()
    }

    /// Name for a raw BAM reference id; negative ids mean "no reference"
    #[must_use]
    pub fn resolve_raw_name(&self, raw: i32) -> Option<Ref<'_, str>> {
        usize::try_from(raw)
            .ok()
            .and_then(|id| self.resolve_name_by_id(id))
    }

    /// Length of global id `id`, or `None` if it is out of range or lengths
    /// have not been populated
    #[must_use]
    pub fn resolve_length_by_id(&self, id: usize) -> Option<u64> {
        let lengths = self.lengths.cell().try_borrow().ok()?;
        lengths.get(id).copied()
    }

    /// Snapshot of the dictionary as contigs, in global id order.
    ///
    /// References without a length yet report length 0.
    pub fn contigs(&self) -> Vec<Contig> {
        let lengths = self.lengths.get();
        self.names
            .get()
            .iter()
            .enumerate()
            .map(|(id, name)| Contig::new(name.clone(), lengths.get(id).copied().unwrap_or(0)))
            .collect()
    }

    // === Translation ===

    /// Global id of local id `local` in the currently bound source file.
    ///
    /// Returns `None` before any header is bound and for ids outside the
    /// bound header.
    #[must_use]
    pub fn translate_local_to_global(&self, local: usize) -> Option<usize> {
        self.translation.get(local)
    }

    /// Translate a raw BAM reference id, mapping every miss to
    /// [`UNMAPPED_REF_ID`](crate::core::types::UNMAPPED_REF_ID)
    #[must_use]
    pub fn translate_raw(&self, raw: i32) -> i32 {
        self.translation.translate_raw(raw)
    }

    /// Replace the local to global table for a new source file
    pub fn rebind_local_translation(&mut self, table: Vec<usize>) {
        self.translation.replace(table);
    }

    #[must_use]
    pub fn translation(&self) -> &LocalTranslation {
        &self.translation
    }

    // === Growth ===

    /// Append a reference, growing names, accelerator, and lengths together.
    ///
    /// # Errors
    ///
    /// Returns `ContextError::ModeViolation` if any of the three tables is
    /// borrowed, `ContextError::LengthMismatch` if the tables are already
    /// out of step, `ContextError::DuplicateReference` if `name` is present,
    /// or `ContextError::TooManyContigs` if the limit is reached.
    pub fn append_reference(
        &mut self,
        name: impl Into<String>,
        length: u64,
    ) -> Result<usize, ContextError> {
        let name = name.into();
        self.ensure_appendable()?;
        if let Some(id) = self.resolve_id_by_name(&name) {
            return Err(ContextError::DuplicateReference { name, id });
        }

        let mut names = self.names.get_mut();
        let id = names.len();
        if at_contig_limit(id) {
            return Err(ContextError::TooManyContigs(id));
        }
        self.name_index.get_mut().record(&name, id);
        names.push(name);
        self.lengths.get_mut().push(length);
        Ok(id)
    }

    /// Check that names and lengths agree in size when both are populated.
    ///
    /// # Errors
    ///
    /// Returns `ContextError::LengthMismatch` if they do not.
    pub fn check_lengths(&self) -> Result<(), ContextError> {
        let names = self.names.get().len();
        let lengths = self.lengths.get().len();
        if names != 0 && lengths != 0 && names != lengths {
            return Err(ContextError::LengthMismatch { names, lengths });
        }
        Ok(())
    }

    /// Appending requires every table owned and in lock-step
    pub(crate) fn ensure_appendable(&self) -> Result<(), ContextError> {
        for table in [Table::Names, Table::NameIndex, Table::Lengths] {
            let mode = self.storage_mode(table);
            if mode == StorageMode::Borrowed {
                return Err(ContextError::ModeViolation {
                    table,
                    mode,
                    action: "append to",
                });
            }
        }
        let names = self.names.get().len();
        let lengths = self.lengths.get().len();
        if names != lengths {
            return Err(ContextError::LengthMismatch { names, lengths });
        }
        Ok(())
    }
}

fn write_violation(table: Table) -> ContextError {
    ContextError::ModeViolation {
        table,
        mode: StorageMode::Borrowed,
        action: "modify",
    }
}

fn rebind_violation(table: Table) -> ContextError {
    ContextError::ModeViolation {
        table,
        mode: StorageMode::Owned,
        action: "rebind",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned_context() -> ReferenceContext<'static> {
        let mut context = ReferenceContext::new();
        context.append_reference("chr1", 1000).unwrap();
        context.append_reference("chr2", 2000).unwrap();
        context.append_reference("chrM", 16569).unwrap();
        context
    }

    #[test]
    fn test_new_is_fully_owned_and_empty() {
        let context = ReferenceContext::new();
        assert!(context.is_empty());
        assert_eq!(context.mode(), Some(ContextMode::FullyOwned));
        assert!(context.translation().is_empty());
    }

    #[test]
    fn test_append_and_resolve() {
        let context = owned_context();

        assert_eq!(context.len(), 3);
        for (id, name) in ["chr1", "chr2", "chrM"].iter().enumerate() {
            assert_eq!(context.resolve_id_by_name(name), Some(id));
            assert_eq!(context.resolve_name_by_id(id).as_deref(), Some(*name));
        }
        assert_eq!(context.resolve_length_by_id(2), Some(16569));
    }

    #[test]
    fn test_lookup_misses() {
        let context = owned_context();

        assert_eq!(context.resolve_id_by_name("chrX"), None);
        assert!(context.resolve_name_by_id(3).is_none());
        assert!(context.resolve_name_by_id(usize::MAX).is_none());
        assert_eq!(context.resolve_length_by_id(3), None);
        assert!(context.resolve_raw_name(-1).is_none());
        assert_eq!(context.resolve_raw_name(1).as_deref(), Some("chr2"));
    }

    #[test]
    fn test_append_duplicate_rejected() {
        let mut context = owned_context();
        let err = context.append_reference("chr2", 5).unwrap_err();

        assert_eq!(
            err,
            ContextError::DuplicateReference {
                name: "chr2".to_string(),
                id: 1
            }
        );
        assert_eq!(context.len(), 3);
        assert_eq!(context.lengths().len(), 3);
    }

    #[test]
    fn test_set_names_on_owned_rejected() {
        let other = RefCell::new(vec!["other".to_string()]);
        let mut context = owned_context();

        let err = context.set_names(&other).unwrap_err();
        assert!(matches!(
            err,
            ContextError::ModeViolation {
                table: Table::Names,
                mode: StorageMode::Owned,
                ..
            }
        ));
        assert_eq!(context.names()[0], "chr1");
        assert_eq!(context.len(), 3);
    }

    #[test]
    fn test_set_lengths_and_index_on_owned_rejected() {
        let lengths = RefCell::new(vec![1_u64]);
        let index = RefCell::new(NameIndex::new());
        let mut context = owned_context();

        assert!(context.set_lengths(&lengths).is_err());
        assert!(context.set_name_index(&index).is_err());
        assert_eq!(*context.lengths(), vec![1000, 2000, 16569]);
    }

    #[test]
    fn test_bind_is_mixed() {
        let names = RefCell::new(vec!["chr1".to_string(), "chr2".to_string()]);
        let index = RefCell::new(NameIndex::from_names(&names.borrow()));
        let context = ReferenceContext::bind(&names, &index);

        assert_eq!(context.mode(), Some(ContextMode::Mixed));
        assert_eq!(context.storage_mode(Table::NameIndex), StorageMode::Borrowed);
        assert_eq!(context.resolve_id_by_name("chr2"), Some(1));
        assert!(context.lengths().is_empty());
        assert!(context.check_lengths().is_ok());
    }

    #[test]
    fn test_append_on_borrowed_names_rejected() {
        let names = RefCell::new(vec!["chr1".to_string()]);
        let index = RefCell::new(NameIndex::from_names(&names.borrow()));
        let mut context = ReferenceContext::bind(&names, &index);

        let err = context.append_reference("chr2", 10).unwrap_err();
        assert!(matches!(
            err,
            ContextError::ModeViolation {
                table: Table::Names,
                mode: StorageMode::Borrowed,
                ..
            }
        ));
        assert_eq!(names.borrow().len(), 1);
    }

    #[test]
    fn test_mut_accessors_on_borrowed_tables_rejected() {
        let names = RefCell::new(vec!["chr1".to_string()]);
        let index = RefCell::new(NameIndex::from_names(&names.borrow()));
        let mut context = ReferenceContext::bind(&names, &index);

        assert_eq!(
            context.names_mut().unwrap_err(),
            ContextError::ModeViolation {
                table: Table::Names,
                mode: StorageMode::Borrowed,
                action: "modify",
            }
        );
        assert!(context.name_index_mut().is_err());
        context.lengths_mut().unwrap().push(10);

        assert_eq!(*names.borrow(), vec!["chr1".to_string()]);
        assert_eq!(context.resolve_length_by_id(0), Some(10));
    }

    #[test]
    fn test_try_names_during_owner_write() {
        let names = RefCell::new(vec!["chr1".to_string()]);
        let index = RefCell::new(LinearLookup);
        let context = ReferenceContext::bind(&names, &index);

        let guard = names.borrow_mut();
        assert_eq!(
            context.try_names().unwrap_err(),
            ContextError::Busy(Table::Names)
        );
        drop(guard);
        assert_eq!(context.try_names().unwrap().len(), 1);
    }

    #[test]
    fn test_rebind_borrowed_names() {
        let first = RefCell::new(vec!["chr1".to_string()]);
        let second = RefCell::new(vec!["1".to_string(), "2".to_string()]);
        let index = RefCell::new(LinearLookup);
        let mut context = ReferenceContext::bind(&first, &index);

        context.set_names(&second).unwrap();
        assert_eq!(context.resolve_id_by_name("2"), Some(1));
        assert_eq!(context.resolve_id_by_name("chr1"), None);
    }

    #[test]
    fn test_stale_accelerator_id_is_a_miss() {
        let names = RefCell::new(vec!["chr1".to_string()]);
        let mut stale = NameIndex::new();
        stale.record("chr9", 7);
        let index = RefCell::new(stale);
        let context = ReferenceContext::bind(&names, &index);

        assert_eq!(context.resolve_id_by_name("chr9"), None);
    }

    #[test]
    fn test_lookup_during_owner_write_is_a_miss() {
        let names = RefCell::new(vec!["chr1".to_string()]);
        let index = RefCell::new(LinearLookup);
        let context = ReferenceContext::bind(&names, &index);

        let _guard = names.borrow_mut();
        assert!(context.resolve_name_by_id(0).is_none());
        assert_eq!(context.resolve_id_by_name("chr1"), None);
    }

    #[test]
    fn test_check_lengths_detects_single_table_growth() {
        let mut context = owned_context();
        context.names_mut().unwrap().push("chrX".to_string());

        assert_eq!(
            context.check_lengths(),
            Err(ContextError::LengthMismatch {
                names: 4,
                lengths: 3
            })
        );
        assert_eq!(
            context.append_reference("chrY", 10),
            Err(ContextError::LengthMismatch {
                names: 4,
                lengths: 3
            })
        );
    }

    #[test]
    fn test_view_shares_tables() {
        let context = owned_context();
        let view = context.view();

        assert_eq!(view.mode(), Some(ContextMode::FullyBorrowed));
        for id in 0..context.len() {
            let name = context.resolve_name_by_id(id).unwrap().to_string();
            assert_eq!(view.resolve_name_by_id(id).as_deref(), Some(name.as_str()));
            assert_eq!(view.resolve_id_by_name(&name), Some(id));
        }
        assert!(std::ptr::eq(
            &*context.names() as *const Vec<String>,
            &*view.names() as *const Vec<String>
        ));
    }

    #[test]
    fn test_detach_copies() {
        let context = owned_context();
        let mut detached = context.view().detach();

        detached.append_reference("chrX", 5).unwrap();
        assert_eq!(detached.mode(), Some(ContextMode::FullyOwned));
        assert_eq!(detached.len(), 4);
        assert_eq!(context.len(), 3);
    }

    #[test]
    fn test_with_mode() {
        assert!(ReferenceContext::with_mode(ContextMode::FullyOwned).is_ok());
        assert_eq!(
            ReferenceContext::with_mode(ContextMode::Mixed).unwrap_err(),
            ContextError::MissingOwner(ContextMode::Mixed)
        );
        assert!(ReferenceContext::with_mode(ContextMode::FullyBorrowed).is_err());
    }

    #[test]
    fn test_from_contigs() {
        let contigs = vec![Contig::new("chr1", 100), Contig::new("chr2", 200)];
        let context = ReferenceContext::from_contigs(&contigs).unwrap();
        assert_eq!(context.resolve_id_by_name("chr2"), Some(1));
        assert_eq!(*context.lengths(), vec![100, 200]);

        let repeated = vec![Contig::new("chr1", 100), Contig::new("chr1", 100)];
        assert!(ReferenceContext::from_contigs(&repeated).is_err());
    }

    #[test]
    fn test_translation_before_bind_is_unmapped() {
        let context = owned_context();
        assert_eq!(context.translate_local_to_global(0), None);
        assert_eq!(context.translate_raw(0), -1);
    }
}
