//! Junction decision ledger.
//!
//! A bounded, append-only log of decisions taken at junctions during
//! first-run exploration. Backtracking reads it (popping under the stack
//! discipline, scanning by coordinate otherwise); repeat runs replay it
//! through a cursor that resets every run while the contents persist.

use serde::{Deserialize, Serialize};

use crate::core::{GridPoint, Heading};

/// One recorded junction decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JunctionEntry {
    /// Where the junction was recorded.
    pub position: GridPoint,
    /// Heading the agent was facing when it arrived. Its reverse is the
    /// way back toward the previous junction.
    pub arrival: Heading,
    /// Heading most recently chosen at this junction. Updated in place
    /// when exploration re-chooses here, so replay follows the final
    /// decision rather than an abandoned one.
    pub chosen: Heading,
}

impl JunctionEntry {
    pub fn new(position: GridPoint, arrival: Heading) -> Self {
        Self {
            position,
            arrival,
            chosen: arrival,
        }
    }
}

/// Bounded ordered log of junction decisions with a replay cursor.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JunctionLedger {
    entries: Vec<JunctionEntry>,
    capacity: usize,
    cursor: usize,
}

impl JunctionLedger {
    /// Create an empty ledger with a fixed capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
            cursor: 0,
        }
    }

    /// Append an entry. Returns false (leaving prior entries unchanged)
    /// when the ledger is at capacity.
    pub fn record(&mut self, entry: JunctionEntry) -> bool {
        if self.entries.len() >= self.capacity {
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Most recent entry recorded at `position`, if any.
    pub fn lookup(&self, position: GridPoint) -> Option<&JunctionEntry> {
        self.entries.iter().rev().find(|e| e.position == position)
    }

    /// Remove and return the most recently recorded entry.
    pub fn pop_last(&mut self) -> Option<JunctionEntry> {
        self.entries.pop()
    }

    /// Update the chosen heading of the last entry, provided it was
    /// recorded at `position`. Returns whether an update happened.
    pub fn update_last_choice(&mut self, position: GridPoint, chosen: Heading) -> bool {
        match self.entries.last_mut() {
            Some(entry) if entry.position == position => {
                entry.chosen = chosen;
                true
            }
            _ => false,
        }
    }

    /// Update the chosen heading of the most recent entry recorded at
    /// `position`. Returns whether an update happened.
    pub fn update_choice_at(&mut self, position: GridPoint, chosen: Heading) -> bool {
        match self.entries.iter_mut().rev().find(|e| e.position == position) {
            Some(entry) => {
                entry.chosen = chosen;
                true
            }
            None => false,
        }
    }

    /// Next entry under the replay cursor, advancing it.
    pub fn replay_next(&mut self) -> Option<JunctionEntry> {
        let entry = self.entries.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(entry)
    }

    /// Zero the replay cursor; contents are untouched.
    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
    }

    /// Drop all entries and reset the cursor (a genuinely new maze).
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = 0;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Recorded entries in append order.
    pub fn entries(&self) -> &[JunctionEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(x: i32, y: i32, arrival: Heading) -> JunctionEntry {
        JunctionEntry::new(GridPoint::new(x, y), arrival)
    }

    #[test]
    fn test_capacity_bound() {
        let mut ledger = JunctionLedger::new(3);
        for i in 0..5 {
            let recorded = ledger.record(entry(i, 0, Heading::East));
            assert_eq!(recorded, i < 3);
        }
        assert_eq!(ledger.len(), 3);
        assert!(ledger.is_full());
        // Prior entries unchanged by rejected records.
        assert_eq!(ledger.entries()[2].position, GridPoint::new(2, 0));
    }

    #[test]
    fn test_pop_is_lifo() {
        let mut ledger = JunctionLedger::new(10);
        ledger.record(entry(0, 0, Heading::North));
        ledger.record(entry(1, 0, Heading::East));
        assert_eq!(ledger.pop_last().unwrap().position, GridPoint::new(1, 0));
        assert_eq!(ledger.pop_last().unwrap().position, GridPoint::new(0, 0));
        assert!(ledger.pop_last().is_none());
    }

    #[test]
    fn test_lookup_prefers_recent() {
        let mut ledger = JunctionLedger::new(10);
        ledger.record(entry(2, 2, Heading::North));
        ledger.record(entry(5, 5, Heading::East));
        ledger.record(entry(2, 2, Heading::South));
        let found = ledger.lookup(GridPoint::new(2, 2)).unwrap();
        assert_eq!(found.arrival, Heading::South);
        assert!(ledger.lookup(GridPoint::new(9, 9)).is_none());
    }

    #[test]
    fn test_update_choice() {
        let mut ledger = JunctionLedger::new(10);
        ledger.record(entry(1, 1, Heading::North));
        ledger.record(entry(2, 2, Heading::East));

        // Last-entry update only applies at the matching position.
        assert!(!ledger.update_last_choice(GridPoint::new(1, 1), Heading::West));
        assert!(ledger.update_last_choice(GridPoint::new(2, 2), Heading::West));
        assert_eq!(ledger.entries()[1].chosen, Heading::West);

        // Coordinate update finds a buried entry.
        assert!(ledger.update_choice_at(GridPoint::new(1, 1), Heading::South));
        assert_eq!(ledger.entries()[0].chosen, Heading::South);
    }

    #[test]
    fn test_replay_cursor() {
        let mut ledger = JunctionLedger::new(10);
        ledger.record(entry(0, 0, Heading::North));
        ledger.record(entry(1, 0, Heading::East));

        assert_eq!(ledger.replay_next().unwrap().position, GridPoint::new(0, 0));
        assert_eq!(ledger.replay_next().unwrap().position, GridPoint::new(1, 0));
        assert!(ledger.replay_next().is_none());

        // Reset rewinds the cursor without touching contents.
        ledger.reset_cursor();
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.replay_next().unwrap().position, GridPoint::new(0, 0));
    }

    #[test]
    fn test_clear() {
        let mut ledger = JunctionLedger::new(10);
        ledger.record(entry(0, 0, Heading::North));
        ledger.replay_next();
        ledger.clear();
        assert!(ledger.is_empty());
        assert!(ledger.replay_next().is_none());
    }
}
