use serde::{Deserialize, Serialize};

/// Raw reference id carried by BAM records that are not placed on any reference
pub const UNMAPPED_REF_ID: i32 = -1;

/// How a context slot holds its table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageMode {
    /// The context owns the table and drops it with itself
    Owned,
    /// The context is a view over a table owned elsewhere
    Borrowed,
}

impl std::fmt::Display for StorageMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Owned => write!(f, "owned"),
            Self::Borrowed => write!(f, "borrowed"),
        }
    }
}

/// The tables a context holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Table {
    Names,
    NameIndex,
    Lengths,
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Names => write!(f, "names"),
            Self::NameIndex => write!(f, "name index"),
            Self::Lengths => write!(f, "lengths"),
        }
    }
}

/// Construction mode of a whole context
///
/// | Mode | names | lengths |
/// |------|-------|---------|
/// | `FullyOwned` | owned | owned |
/// | `FullyBorrowed` | borrowed | borrowed |
/// | `Mixed` | borrowed | owned |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ContextMode {
    #[default]
    FullyOwned,
    FullyBorrowed,
    Mixed,
}

impl ContextMode {
    /// Derive the mode from the storage of the names and lengths tables.
    ///
    /// Owned names over borrowed lengths has no named mode and is reported
    /// as `None`.
    #[must_use]
    pub fn from_storage(names: StorageMode, lengths: StorageMode) -> Option<Self> {
        match (names, lengths) {
            (StorageMode::Owned, StorageMode::Owned) => Some(Self::FullyOwned),
            (StorageMode::Borrowed, StorageMode::Borrowed) => Some(Self::FullyBorrowed),
            (StorageMode::Borrowed, StorageMode::Owned) => Some(Self::Mixed),
            (StorageMode::Owned, StorageMode::Borrowed) => None,
        }
    }

    #[must_use]
    pub fn names(self) -> StorageMode {
        match self {
            Self::FullyOwned => StorageMode::Owned,
            Self::FullyBorrowed | Self::Mixed => StorageMode::Borrowed,
        }
    }

    #[must_use]
    pub fn lengths(self) -> StorageMode {
        match self {
            Self::FullyOwned | Self::Mixed => StorageMode::Owned,
            Self::FullyBorrowed => StorageMode::Borrowed,
        }
    }
}

impl std::fmt::Display for ContextMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FullyOwned => write!(f, "fully owned"),
            Self::FullyBorrowed => write!(f, "fully borrowed"),
            Self::Mixed => write!(f, "mixed"),
        }
    }
}
