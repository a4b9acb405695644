use chrono::Local;
use crate::enums::grade::Grade;
use crate::structs::audit_report::AuditReport;
use crate::structs::audit_summary::AuditSummary;
use crate::structs::category_result::CategoryResult;

/// Collects category results as the run progresses and derives the summary
/// when built. Categories never set default to an explicit zero result.
pub struct AuditReportBuilder {
    general_seo: Option<CategoryResult>,
    local_seo: Option<CategoryResult>,
    schema_validation: Option<CategoryResult>,
    performance: Option<CategoryResult>,
    sitemap_robots: Option<CategoryResult>,
}

impl AuditReportBuilder {
    pub fn new() -> Self {
        Self {
            general_seo: None,
            local_seo: None,
            schema_validation: None,
            performance: None,
            sitemap_robots: None,
        }
    }

    pub fn general_seo(mut self, result: CategoryResult) -> Self {
        self.general_seo = Some(result);
        self
    }

    pub fn local_seo(mut self, result: CategoryResult) -> Self {
        self.local_seo = Some(result);
        self
    }

    pub fn schema_validation(mut self, result: CategoryResult) -> Self {
        self.schema_validation = Some(result);
        self
    }

    pub fn performance(mut self, result: CategoryResult) -> Self {
        self.performance = Some(result);
        self
    }

    pub fn sitemap_robots(mut self, result: CategoryResult) -> Self {
        self.sitemap_robots = Some(result);
        self
    }

    pub fn build(self) -> AuditReport {
        let general_seo = self.general_seo.unwrap_or_else(CategoryResult::skipped);
        let local_seo = self.local_seo.unwrap_or_else(CategoryResult::skipped);
        let schema_validation = self.schema_validation.unwrap_or_else(CategoryResult::skipped);
        let performance = self.performance.unwrap_or_else(CategoryResult::skipped);
        let sitemap_robots = self.sitemap_robots.unwrap_or_else(CategoryResult::skipped);

        let categories = [
            &general_seo,
            &local_seo,
            &schema_validation,
            &performance,
            &sitemap_robots,
        ];
        let total_passed: usize = categories.iter().map(|c| c.passed).sum();
        let total_tests: usize = categories.iter().map(|c| c.total).sum();
        let overall_score = if total_tests > 0 {
            (total_passed as f64 / total_tests as f64) * 100.0
        } else {
            0.0
        };

        let summary = AuditSummary {
            total_passed,
            total_tests,
            overall_score,
            grade: Grade::from_score(overall_score),
            timestamp: Local::now().to_rfc3339(),
        };

        AuditReport {
            general_seo,
            local_seo,
            schema_validation,
            performance,
            sitemap_robots,
            summary,
        }
    }
}

impl Default for AuditReportBuilder {
    fn default() -> Self {
        Self::new()
    }
}
