use crate::core::types::UNMAPPED_REF_ID;

/// Mapping from one source file's local reference ids to global ids.
///
/// Index `i` holds the global id of local id `i`. The table is empty until
/// the first header is bound, and every bind replaces it entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalTranslation {
    table: Vec<usize>,
}

impl LocalTranslation {
    #[must_use]
    pub fn new(table: Vec<usize>) -> Self {
        Self { table }
    }

    /// Global id of `local`, or `None` when it is outside the bound table
    #[must_use]
    pub fn get(&self, local: usize) -> Option<usize> {
        self.table.get(local).copied()
    }

    /// Translate a raw BAM reference id.
    ///
    /// Negative ids, ids outside the bound table, and global ids that do not
    /// fit an `i32` all map to [`UNMAPPED_REF_ID`].
    #[must_use]
    pub fn translate_raw(&self, raw: i32) -> i32 {
        usize::try_from(raw)
            .ok()
            .and_then(|local| self.get(local))
            .and_then(|global| i32::try_from(global).ok())
            .unwrap_or(UNMAPPED_REF_ID)
    }

    /// Replace the whole table, returning the previous one
    pub fn replace(&mut self, table: Vec<usize>) -> Vec<usize> {
        std::mem::replace(&mut self.table, table)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.table
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// True before any header has been bound (or after binding an empty one)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Whether every local id maps to itself
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.table.iter().enumerate().all(|(local, &global)| local == global)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get() {
        let translation = LocalTranslation::new(vec![5, 2, 0]);
        assert_eq!(translation.get(0), Some(5));
        assert_eq!(translation.get(1), Some(2));
        assert_eq!(translation.get(2), Some(0));
        assert_eq!(translation.get(3), None);
    }

    #[test]
    fn test_translate_raw() {
        let translation = LocalTranslation::new(vec![5, 2, 0]);
        assert_eq!(translation.translate_raw(0), 5);
        assert_eq!(translation.translate_raw(2), 0);
        assert_eq!(translation.translate_raw(3), UNMAPPED_REF_ID);
        assert_eq!(translation.translate_raw(-1), UNMAPPED_REF_ID);
        assert_eq!(translation.translate_raw(i32::MIN), UNMAPPED_REF_ID);
    }

    #[test]
    fn test_unbound_translation_is_unmapped() {
        let translation = LocalTranslation::default();
        assert!(translation.is_empty());
        assert_eq!(translation.get(0), None);
        assert_eq!(translation.translate_raw(0), UNMAPPED_REF_ID);
    }

    #[test]
    fn test_replace_is_wholesale() {
        let mut translation = LocalTranslation::new(vec![3, 4, 5, 6]);
        let previous = translation.replace(vec![1]);

        assert_eq!(previous, vec![3, 4, 5, 6]);
        assert_eq!(translation.as_slice(), &[1]);
        assert_eq!(translation.get(2), None);
    }

    #[test]
    fn test_is_identity() {
        assert!(LocalTranslation::new(vec![0, 1, 2]).is_identity());
        assert!(!LocalTranslation::new(vec![1, 0]).is_identity());
        assert!(LocalTranslation::default().is_identity());
    }
}
