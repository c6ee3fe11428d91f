//! Board history ring and approximate positional superko.
//!
//! Exact positional superko needs every earlier position. Instead, the last
//! `H` board snapshots are kept in a fixed ring; a move that recreates any of
//! the previous `H - 1` snapshots triggers superko, and the player who made
//! it loses (see [`crate::scoring::terminal_values`]).

use crate::constants::TRIT_UNPLAYED;

/// Fixed-capacity ring of board snapshots, newest first.
///
/// Each snapshot stores one absolute black/white/empty value per point.
/// Unwritten slots hold [`TRIT_UNPLAYED`], which never matches a real board.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct History {
    area: usize,
    depth: usize,
    head: usize,
    data: Vec<i8>,
}

impl History {
    pub fn new(depth: usize, area: usize) -> Self {
        Self {
            area,
            depth,
            head: 0,
            data: vec![TRIT_UNPLAYED; depth * area],
        }
    }

    /// Number of slots (always full).
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Store a snapshot as slot 0, overwriting the oldest.
    pub fn push(&mut self, snapshot: &[i8]) {
        debug_assert_eq!(snapshot.len(), self.area);
        self.head = (self.head + self.depth - 1) % self.depth;
        let start = self.head * self.area;
        self.data[start..start + self.area].copy_from_slice(snapshot);
    }

    /// Snapshot `i` plies back; 0 is the most recent.
    pub fn get(&self, i: usize) -> &[i8] {
        let slot = (self.head + i) % self.depth;
        &self.data[slot * self.area..(slot + 1) * self.area]
    }

    /// Snapshots from newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &[i8]> + '_ {
        (0..self.depth).map(|i| self.get(i))
    }

    /// Whether the newest snapshot equals any older one still in the ring.
    pub fn repeats_latest(&self) -> bool {
        let latest = self.get(0);
        (1..self.depth).any(|i| self.get(i) == latest)
    }
}

/// Superko check run after every ply.
///
/// Only a stone placement can trigger it; after a pass the newest snapshot
/// trivially equals the previous one.
pub fn check_superko(history: &History, consecutive_passes: u32) -> bool {
    consecutive_passes == 0 && history.repeats_latest()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_history_is_unplayed() {
        let history = History::new(4, 3);
        assert_eq!(history.depth(), 4);
        for snap in history.iter() {
            assert_eq!(snap, &[TRIT_UNPLAYED; 3]);
        }
        assert!(history.repeats_latest(), "sentinels match each other");
        assert!(!check_superko(&History::new(1, 3), 0));
    }

    #[test]
    fn test_push_order_and_overwrite() {
        let mut history = History::new(3, 2);
        history.push(&[1, 0]);
        history.push(&[0, 1]);
        assert_eq!(history.get(0), &[0, 1]);
        assert_eq!(history.get(1), &[1, 0]);
        assert_eq!(history.get(2), &[TRIT_UNPLAYED, TRIT_UNPLAYED]);

        history.push(&[-1, 0]);
        history.push(&[0, -1]);
        assert_eq!(history.get(0), &[0, -1]);
        assert_eq!(history.get(1), &[-1, 0]);
        assert_eq!(history.get(2), &[0, 1]);
        assert_eq!(history.iter().count(), 3);
    }

    #[test]
    fn test_repeat_detection_window() {
        let mut history = History::new(3, 2);
        history.push(&[1, 0]);
        history.push(&[0, 0]);
        assert!(!history.repeats_latest());

        history.push(&[1, 0]);
        assert!(history.repeats_latest());
        assert!(check_superko(&history, 0));
        assert!(!check_superko(&history, 1));

        // the first [0, 1] is four plies back, outside a depth-3 ring
        history.push(&[0, 1]);
        history.push(&[0, 0]);
        history.push(&[1, 1]);
        history.push(&[0, 1]);
        assert!(!history.repeats_latest());
    }
}
