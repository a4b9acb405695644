use serde::{Deserialize, Serialize};

/// Outcome of one audit category: how many checks passed out of how many
/// were actually attempted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryResult {
    pub passed: usize,
    pub total: usize,
    pub score: f64,
}

impl CategoryResult {
    pub fn new(passed: usize, total: usize) -> Self {
        debug_assert!(passed <= total);
        let score = if total > 0 {
            (passed as f64 / total as f64) * 100.0
        } else {
            0.0
        };
        Self { passed, total, score }
    }

    /// Category whose prerequisite fetch failed: zero checks attempted.
    pub fn skipped() -> Self {
        Self::new(0, 0)
    }
}
