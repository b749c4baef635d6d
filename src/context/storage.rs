use std::cell::{Ref, RefCell, RefMut};

use crate::core::types::StorageMode;

/// One table slot of a context: either the table itself or a view over a
/// table owned elsewhere.
///
/// Both variants go through a `RefCell` so the owner of a borrowed table can
/// keep growing it while views are alive, and an owned slot can be exposed
/// as a view without moving or copying it.
#[derive(Debug)]
pub enum Storage<'a, T> {
    Owned(RefCell<T>),
    Borrowed(&'a RefCell<T>),
}

impl<'a, T> Storage<'a, T> {
    pub fn owned(value: T) -> Self {
        Self::Owned(RefCell::new(value))
    }

    pub fn borrowed(cell: &'a RefCell<T>) -> Self {
        Self::Borrowed(cell)
    }

    #[must_use]
    pub fn mode(&self) -> StorageMode {
        match self {
            Self::Owned(_) => StorageMode::Owned,
            Self::Borrowed(_) => StorageMode::Borrowed,
        }
    }

    /// The cell holding the table, wherever it lives
    pub fn cell(&self) -> &RefCell<T> {
        match self {
            Self::Owned(cell) => cell,
            Self::Borrowed(cell) => *cell,
        }
    }

    pub fn get(&self) -> Ref<'_, T> {
        self.cell().borrow()
    }

    pub fn get_mut(&self) -> RefMut<'_, T> {
        self.cell().borrow_mut()
    }

    /// Shared access that fails instead of panicking while the table is
    /// being written
    pub fn try_get(&self) -> Option<Ref<'_, T>> {
        self.cell().try_borrow().ok()
    }

    /// Mutable access, only when this slot owns its table
    pub fn owned_mut(&self) -> Option<RefMut<'_, T>> {
        match self {
            Self::Owned(cell) => Some(cell.borrow_mut()),
            Self::Borrowed(_) => None,
        }
    }

    /// Point a borrowed slot at another cell.
    ///
    /// Returns `false` and leaves the slot untouched when it owns its table.
    pub fn rebind(&mut self, cell: &'a RefCell<T>) -> bool {
        match self {
            Self::Owned(_) => false,
            Self::Borrowed(current) => {
                *current = cell;
                true
            }
        }
    }

    /// Whether this slot and `other` resolve to the same cell
    pub fn shares_with(&self, other: &RefCell<T>) -> bool {
        std::ptr::eq(self.cell(), other)
    }
}

impl<'a, T: Clone> Storage<'a, T> {
    /// Deep copy into an owned slot
    pub fn to_owned_storage(&self) -> Storage<'a, T> {
        Storage::owned(self.get().clone())
    }
}

impl<T: Default> Default for Storage<'_, T> {
    fn default() -> Self {
        Self::owned(T::default())
    }
}
