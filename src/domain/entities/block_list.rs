//! Block-lists of codes that custom or generated codes may never use.

use std::collections::HashSet;

/// Three named sets of lower-cased codes.
///
/// The sets are disjoint by convention only; nothing enforces it. The list is
/// supplied once at startup and never changes for the lifetime of the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeBlockList {
    /// Codes reserved for routes and system use (e.g. `api`, `static`).
    pub reserved: HashSet<String>,
    pub offensive: HashSet<String>,
    /// Codes held back for specific owners.
    pub protected: HashSet<String>,
}

impl CodeBlockList {
    /// Builds a block-list from three comma-separated strings.
    ///
    /// Each entry is trimmed and lower-cased; empty entries are dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use flipr::domain::entities::CodeBlockList;
    ///
    /// let list = CodeBlockList::parse("Admin, api,,", "", "");
    /// assert!(list.reserved.contains("admin"));
    /// assert!(list.reserved.contains("api"));
    /// assert_eq!(list.reserved.len(), 2);
    /// ```
    pub fn parse(reserved: &str, offensive: &str, protected: &str) -> Self {
        Self {
            reserved: parse_entries(reserved),
            offensive: parse_entries(offensive),
            protected: parse_entries(protected),
        }
    }

    /// Returns the union of all three sets.
    pub fn union(&self) -> HashSet<String> {
        self.reserved
            .iter()
            .chain(&self.offensive)
            .chain(&self.protected)
            .cloned()
            .collect()
    }

    /// Total number of entries across the three sets, duplicates included.
    pub fn len(&self) -> usize {
        self.reserved.len() + self.offensive.len() + self.protected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn parse_entries(raw: &str) -> HashSet<String> {
    raw.split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_lowercases() {
        let list = CodeBlockList::parse(" Admin ,API", "BadWord", "vip");

        assert!(list.reserved.contains("admin"));
        assert!(list.reserved.contains("api"));
        assert!(list.offensive.contains("badword"));
        assert!(list.protected.contains("vip"));
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn test_parse_drops_empty_entries() {
        let list = CodeBlockList::parse(",, ,", "", "   ");

        assert!(list.is_empty());
    }

    #[test]
    fn test_union_merges_overlapping_sets() {
        let list = CodeBlockList::parse("admin,api", "admin", "vip");
        let union = list.union();

        assert_eq!(union.len(), 3);
        assert!(union.contains("admin"));
        assert!(union.contains("api"));
        assert!(union.contains("vip"));
    }
}
