//! Data Models
//!
//! Core data structures persisted to localStorage, plus the pure
//! arithmetic derived from them.

use serde::{Deserialize, Serialize};

/// A single logged food item with its protein content.
///
/// Immutable once created; corrections are a delete plus a re-add.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodEntry {
    /// Unique identifier (creation instant in ms, as a decimal string)
    pub id: String,
    /// Name of the food item
    pub name: String,
    /// Protein in grams
    pub protein: f64,
    /// Creation instant (ms since epoch)
    pub timestamp: u64,
}

impl FoodEntry {
    /// Build an entry stamped with the given instant. The id reuses the
    /// timestamp, so two entries created within the same millisecond would
    /// collide; matching the stored format takes priority over closing
    /// that window.
    pub fn new(name: String, protein: f64, now_ms: u64) -> Self {
        Self {
            id: now_ms.to_string(),
            name,
            protein,
            timestamp: now_ms,
        }
    }
}

/// The list the UI renders: the optimistic overlay while one is staged,
/// otherwise the committed entries.
pub fn effective_entries(staged: Vec<FoodEntry>, committed: Vec<FoodEntry>) -> Vec<FoodEntry> {
    if staged.is_empty() {
        committed
    } else {
        staged
    }
}

/// Sum of protein over a list of entries.
pub fn total_protein(entries: &[FoodEntry]) -> f64 {
    entries.iter().map(|e| e.protein).sum()
}

/// Percentage of the goal reached. The UI never evaluates this while the
/// goal is unset, but the division is guarded anyway.
pub fn progress_percent(total: f64, goal: u32) -> f64 {
    if goal == 0 {
        0.0
    } else {
        total / goal as f64 * 100.0
    }
}

/// Grams still needed to reach the goal, clamped at zero.
pub fn remaining(total: f64, goal: u32) -> f64 {
    (goal as f64 - total).max(0.0)
}

/// Whether the goal has been exceeded (strictly).
pub fn is_over_goal(total: f64, goal: u32) -> bool {
    total > goal as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(protein: f64) -> FoodEntry {
        FoodEntry::new("Chicken".to_string(), protein, 1_700_000_000_000)
    }

    #[test]
    fn test_total_protein_sums_entries() {
        let entries = vec![entry(30.0), entry(12.5), entry(0.0)];
        assert_eq!(total_protein(&entries), 42.5);
        assert_eq!(total_protein(&[]), 0.0);
    }

    #[test]
    fn test_remaining_clamps_at_zero() {
        assert_eq!(remaining(80.0, 120), 40.0);
        assert_eq!(remaining(120.0, 120), 0.0);
        assert_eq!(remaining(150.0, 120), 0.0);
    }

    #[test]
    fn test_over_goal_iff_remaining_is_zero_and_strictly_over() {
        // exactly at goal is not "over"
        assert!(!is_over_goal(120.0, 120));
        assert!(is_over_goal(120.1, 120));
        assert!(!is_over_goal(80.0, 120));
        // over implies nothing remains
        assert_eq!(remaining(120.1, 120), 0.0);
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(progress_percent(60.0, 120), 50.0);
        assert_eq!(progress_percent(150.0, 100), 150.0);
        // guarded division while the goal sentinel holds
        assert_eq!(progress_percent(50.0, 0), 0.0);
    }

    #[test]
    fn test_entry_id_derives_from_timestamp() {
        let e = FoodEntry::new("Eggs".to_string(), 12.0, 1_700_000_000_123);
        assert_eq!(e.id, "1700000000123");
        assert_eq!(e.timestamp, 1_700_000_000_123);
    }

    #[test]
    fn test_overlay_replaces_committed_entries_while_staged() {
        let committed = vec![entry(30.0)];

        // add: staged prepend shows immediately, one entry longer
        let added = FoodEntry::new("Chicken".to_string(), 30.0, 1_700_000_000_500);
        let mut staged = committed.clone();
        staged.insert(0, added.clone());
        let effective = effective_entries(staged, committed.clone());
        assert_eq!(effective.len(), committed.len() + 1);
        assert_eq!(effective[0], added);

        // settle: overlay cleared, committed list is back in charge
        let effective = effective_entries(Vec::new(), committed.clone());
        assert_eq!(effective, committed);
    }

    #[test]
    fn test_overlay_delete_hides_entry_immediately() {
        let committed = vec![
            FoodEntry::new("One".to_string(), 10.0, 1),
            FoodEntry::new("Two".to_string(), 20.0, 2),
        ];
        let staged: Vec<FoodEntry> = committed
            .iter()
            .filter(|e| e.id != "1")
            .cloned()
            .collect();
        let effective = effective_entries(staged, committed);
        assert_eq!(effective.len(), 1);
        assert_eq!(effective[0].id, "2");
    }

    #[test]
    fn test_food_entry_round_trips_through_json() {
        let e = entry(25.5);
        let json = serde_json::to_string(&e).expect("serialize");
        let back: FoodEntry = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, e);
    }
}
