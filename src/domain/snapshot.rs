use serde::{Deserialize, Serialize};

/// State persisted between runs: the tracked candidate's lead and the
/// fraction of election returns processed so far.
///
/// Replaced wholesale on each run; nothing else outlives the process.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Signed vote-count difference between the tracked candidate and the
    /// strongest opposing candidate. Negative when the target trails.
    pub lead: i64,
    /// Returns processed over total returns, in [0, 1] for valid input.
    pub processed: f64,
}

impl Snapshot {
    pub fn new(lead: i64, processed: f64) -> Self {
        Self { lead, processed }
    }

    /// Exact-equality change check on the processed fraction. A tolerance
    /// comparison would suppress legitimate small updates; the upstream
    /// fraction only moves in whole-return increments.
    pub fn has_changed_from(&self, old: &Snapshot) -> bool {
        old.processed != self.processed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_fractions_mean_no_change() {
        let old = Snapshot::new(100, 0.5);
        let new = Snapshot::new(90, 0.5);
        assert!(!new.has_changed_from(&old));
    }

    #[test]
    fn any_fraction_movement_is_a_change() {
        let old = Snapshot::new(100, 0.5);
        let new = Snapshot::new(100, 0.5000001);
        assert!(new.has_changed_from(&old));
    }

    #[test]
    fn snapshot_uses_short_json_keys() {
        let json = serde_json::to_string(&Snapshot::new(-5, 0.25)).unwrap();
        assert_eq!(json, r#"{"lead":-5,"processed":0.25}"#);
    }
}
