use serde::Serialize;
use crate::enums::grade::Grade;

/// Aggregate totals over all audit categories.
#[derive(Debug, Clone, Serialize)]
pub struct AuditSummary {
    pub total_passed: usize,
    pub total_tests: usize,
    pub overall_score: f64,
    pub grade: Grade,
    pub timestamp: String,
}
