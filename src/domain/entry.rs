//! Roster entry model.
//!
//! This module defines the core `Entry` type: a named roster line with a
//! favorite flag and a stable identifier. The identifier is assigned once by
//! the state layer and never reused, so mutations (toggle, delete) address a
//! single entry even when names collide.

use serde::{Deserialize, Serialize};

/// Stable identifier for a roster entry.
///
/// Ids are handed out by a monotonic counter owned by the application state
/// and are unique for the lifetime of the pane. Matching by id (instead of by
/// name or structural equality) keeps duplicate names from aliasing together
/// under toggle and delete.
pub type EntryId = u64;

/// A single roster entry.
///
/// An entry is a display name plus a favorite flag. The name is stored exactly
/// as the user submitted it; leading and trailing whitespace is preserved. The
/// only validation applied is at the add boundary, where input with no
/// non-whitespace character is rejected.
///
/// # Fields
///
/// - `id`: Stable identifier, unique within one pane session
/// - `name`: Display name, untrimmed
/// - `favorite`: Whether the entry is pinned to the favorites group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub name: String,
    pub favorite: bool,
}

impl Entry {
    /// Creates a new non-favorite entry with the given id and name.
    ///
    /// # Examples
    ///
    /// ```
    /// use zroster::domain::Entry;
    ///
    /// let entry = Entry::new(7, "Cara".to_string());
    /// assert_eq!(entry.id, 7);
    /// assert_eq!(entry.name, "Cara");
    /// assert!(!entry.favorite);
    /// ```
    #[must_use]
    pub const fn new(id: EntryId, name: String) -> Self {
        Self {
            id,
            name,
            favorite: false,
        }
    }

    /// Returns whether the entry name contains `query` as a case-insensitive
    /// substring.
    ///
    /// An empty query matches every entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use zroster::domain::Entry;
    ///
    /// let entry = Entry::new(1, "Cara".to_string());
    /// assert!(entry.matches(""));
    /// assert!(entry.matches("AR"));
    /// assert!(!entry.matches("bob"));
    /// ```
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_entry_starts_unfavorited() {
        let entry = Entry::new(3, "Bob".to_string());
        assert_eq!(entry.id, 3);
        assert!(!entry.favorite);
    }

    #[test]
    fn matches_is_case_insensitive_substring() {
        let entry = Entry::new(1, "Ann Marie".to_string());
        assert!(entry.matches("ann"));
        assert!(entry.matches("N M"));
        assert!(entry.matches("MARIE"));
        assert!(!entry.matches("annie"));
    }

    #[test]
    fn empty_query_matches_everything() {
        let entry = Entry::new(1, "  spaced name  ".to_string());
        assert!(entry.matches(""));
    }

    #[test]
    fn name_is_stored_untrimmed() {
        let entry = Entry::new(1, "  Ann ".to_string());
        assert_eq!(entry.name, "  Ann ");
    }
}
