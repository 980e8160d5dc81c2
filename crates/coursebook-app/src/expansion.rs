//! Expanded/collapsed flags for course cards.

use std::collections::HashSet;

/// Tracks which cards are expanded, keyed by catalog position.
///
/// Cards start collapsed; only cards the user toggled open are stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardExpansion {
    expanded: HashSet<usize>,
}

impl CardExpansion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from a list of expanded card indices
    pub fn from_indices(indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            expanded: indices.into_iter().collect(),
        }
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.contains(&index)
    }

    /// Flip one card and return its new state
    pub fn toggle(&mut self, index: usize) -> bool {
        if self.expanded.remove(&index) {
            false
        } else {
            self.expanded.insert(index);
            true
        }
    }

    /// Number of expanded cards
    pub fn count(&self) -> usize {
        self.expanded.len()
    }

    /// Expanded card indices in ascending order
    pub fn indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self.expanded.iter().copied().collect();
        indices.sort_unstable();
        indices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cards_start_collapsed() {
        let cards = CardExpansion::new();
        assert!(!cards.is_expanded(0));
        assert!(!cards.is_expanded(14));
        assert_eq!(cards.count(), 0);
    }

    #[test]
    fn test_toggle_returns_new_state() {
        let mut cards = CardExpansion::new();
        assert!(cards.toggle(3));
        assert!(cards.is_expanded(3));
        assert!(!cards.toggle(3));
        assert!(!cards.is_expanded(3));
    }

    #[test]
    fn test_toggle_is_independent_per_card() {
        let mut cards = CardExpansion::new();
        cards.toggle(0);
        assert!(cards.is_expanded(0));
        assert!(!cards.is_expanded(1));
    }

    #[test]
    fn test_indices_are_sorted() {
        let cards = CardExpansion::from_indices([9, 2, 5]);
        assert_eq!(cards.indices(), vec![2, 5, 9]);
    }
}
