use std::collections::HashMap;

use serde::Serialize;

use crate::context::{ContextError, NameLookup, ReferenceContext};
use crate::core::header::SourceHeader;
use crate::core::types::{StorageMode, Table};
use crate::utils::validation::MAX_CONTIGS;

/// A header reference whose length disagrees with the global dictionary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LengthConflict {
    pub name: String,
    pub local_id: usize,
    pub global_id: usize,
    pub header_length: u64,
    pub global_length: u64,
}

/// Outcome of binding one source header into a context
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeaderBinding {
    /// Global ids appended to the dictionary for names it did not know yet
    pub appended: Vec<usize>,

    /// Known names whose header length differs; the global length is kept
    pub conflicts: Vec<LengthConflict>,
}

impl HeaderBinding {
    #[must_use]
    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }
}

impl<A: NameLookup> ReferenceContext<'_, A> {
    /// Bind a new source header: resolve every local reference into the
    /// global dictionary and replace the local to global table.
    ///
    /// Names the dictionary does not know are appended when the context owns
    /// its tables. A name repeated inside the header resolves to the same
    /// global id each time. When the names are borrowed but the lengths are
    /// owned, header lengths fill the context's own lengths for references
    /// that have none yet; later headers are checked against them. On error
    /// the dictionary, the lengths and the previously bound table are left
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns `ContextError::UnknownReference` if a name is missing from a
    /// borrowed dictionary, `ContextError::ModeViolation` or
    /// `ContextError::LengthMismatch` if new names cannot be appended, or
    /// `ContextError::TooManyContigs` if the header or the grown dictionary
    /// exceeds the limit.
    pub fn bind_header(&mut self, header: &SourceHeader) -> Result<HeaderBinding, ContextError> {
        if header.len() > MAX_CONTIGS {
            return Err(ContextError::TooManyContigs(header.len()));
        }

        let base = self.len();
        let names_owned = self.storage_mode(Table::Names) == StorageMode::Owned;
        let lengths_owned = self.storage_mode(Table::Lengths) == StorageMode::Owned;
        let mut pending: HashMap<&str, usize> = HashMap::new();
        let mut pending_order: Vec<(&str, u64)> = Vec::new();
        let mut filled: HashMap<usize, u64> = HashMap::new();
        let mut table = Vec::with_capacity(header.len());
        let mut binding = HeaderBinding::default();

        for (local_id, contig) in header.contigs.iter().enumerate() {
            if let Some(global_id) = self.resolve_id_by_name(&contig.name) {
                // A zero length is a placeholder left by an earlier fill
                let known = self
                    .resolve_length_by_id(global_id)
                    .filter(|&length| length != 0)
                    .or_else(|| filled.get(&global_id).copied());
                match known {
                    Some(global_length) if global_length != contig.length => {
                        binding.conflicts.push(LengthConflict {
                            name: contig.name.clone(),
                            local_id,
                            global_id,
                            header_length: contig.length,
                            global_length,
                        });
                    }
                    Some(_) => {}
                    None if lengths_owned => {
                        filled.insert(global_id, contig.length);
                    }
                    None => {}
                }
                table.push(global_id);
            } else if let Some(&global_id) = pending.get(contig.name.as_str()) {
                table.push(global_id);
            } else if names_owned {
                let global_id = base + pending_order.len();
                pending.insert(&contig.name, global_id);
                pending_order.push((&contig.name, contig.length));
                table.push(global_id);
            } else {
                return Err(ContextError::UnknownReference(contig.name.clone()));
            }
        }

        if !pending_order.is_empty() {
            self.ensure_appendable()?;
            if base + pending_order.len() > MAX_CONTIGS {
                return Err(ContextError::TooManyContigs(base + pending_order.len()));
            }
            for (name, length) in pending_order {
                let id = self.append_reference(name, length)?;
                binding.appended.push(id);
            }
        }

        if !filled.is_empty() {
            let len = self.len();
            let mut lengths = self.lengths_mut()?;
            if lengths.len() < len {
                lengths.resize(len, 0);
            }
            for (id, length) in filled {
                lengths[id] = length;
            }
        }

        self.rebind_local_translation(table);

        Ok(binding)
    }
}
