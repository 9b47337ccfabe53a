// table.rs - Name-to-index table for capturing groups.
//
// Built once from the scanner's output and never mutated afterwards.

use std::collections::HashMap;

use crate::error::PatternError;
use crate::scanner::Group;

/// Maps capture group names to their 1-based capture indices.
#[derive(Debug, Clone, Default)]
pub struct NameTable {
    index: HashMap<String, usize>,
}

impl NameTable {
    /// Build the table from scanned groups.
    ///
    /// The group at ordinal position `i` has capture index `i + 1`.
    /// Unnamed groups keep their slot in the numbering but get no
    /// entry. Fails with [`PatternError::DuplicateName`] on the first
    /// name seen twice.
    pub fn build(groups: &[Group<'_>]) -> Result<NameTable, PatternError> {
        let mut index = HashMap::new();
        for (i, group) in groups.iter().enumerate() {
            if let Group::Named(name) = *group {
                if index.contains_key(name) {
                    return Err(PatternError::DuplicateName(name.to_string()));
                }
                index.insert(name.to_string(), i + 1);
            }
        }
        Ok(NameTable { index })
    }

    /// Capture index of `name`, or `None` if no such group exists.
    pub fn get(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Number of named groups.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` if the pattern has no named groups.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Iterate over `(name, index)` entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.index.iter().map(|(name, &i)| (name.as_str(), i))
    }
}
