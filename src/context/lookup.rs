use std::collections::HashMap;

/// Name to global id accelerator kept consistent with a names table.
///
/// The context only queries the accelerator and records appends it makes to
/// tables it owns. Whoever owns a borrowed names table is responsible for
/// keeping the matching accelerator in sync.
pub trait NameLookup {
    /// Find the global id of `name`. `names` is the table the accelerator
    /// indexes.
    fn find(&self, names: &[String], name: &str) -> Option<usize>;

    /// Record that `name` was appended at `id`
    fn record(&mut self, name: &str, id: usize);

    /// Rebuild from scratch after the names table was changed wholesale
    fn rebuild(&mut self, names: &[String]);
}

/// Hash-backed accelerator with O(1) amortized lookups
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameIndex {
    ids: HashMap<String, usize>,
}

impl NameIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index over an existing names table.
    ///
    /// When a name occurs more than once the first id wins, matching a scan
    /// from the start of the table.
    #[must_use]
    pub fn from_names(names: &[String]) -> Self {
        let mut index = Self::new();
        index.rebuild(names);
        index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl NameLookup for NameIndex {
    fn find(&self, _names: &[String], name: &str) -> Option<usize> {
        self.ids.get(name).copied()
    }

    fn record(&mut self, name: &str, id: usize) {
        self.ids.entry(name.to_string()).or_insert(id);
    }

    fn rebuild(&mut self, names: &[String]) {
        self.ids.clear();
        self.ids.reserve(names.len());
        for (id, name) in names.iter().enumerate() {
            self.ids.entry(name.clone()).or_insert(id);
        }
    }
}

/// Stateless accelerator that scans the names table.
///
/// Always in sync by construction; suitable for small dictionaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinearLookup;

impl NameLookup for LinearLookup {
    fn find(&self, names: &[String], name: &str) -> Option<usize> {
        names.iter().position(|n| n == name)
    }

    fn record(&mut self, _name: &str, _id: usize) {}

    fn rebuild(&mut self, _names: &[String]) {}
}
