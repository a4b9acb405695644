use crate::logger::report_logger::ReportLogger;
use crate::structs::category_result::CategoryResult;

/// Per-category check accumulator. Every call to `check` counts one
/// attempted predicate; passes are tallied and the outcome printed.
pub struct Checklist {
    passed: usize,
    total: usize,
}

impl Checklist {
    pub fn new() -> Self {
        Self { passed: 0, total: 0 }
    }

    pub fn check(&mut self, name: &str, passed: bool, detail: Option<String>) {
        self.total += 1;
        if passed {
            self.passed += 1;
        }
        ReportLogger::print_check(name, passed, detail.as_deref());
    }

    pub fn passed(&self) -> usize {
        self.passed
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn into_result(self) -> CategoryResult {
        CategoryResult::new(self.passed, self.total)
    }
}

impl Default for Checklist {
    fn default() -> Self {
        Self::new()
    }
}
