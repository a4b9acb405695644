use serde::Serialize;
use crate::structs::audit_summary::AuditSummary;
use crate::structs::category_result::CategoryResult;

/// Full results of one audit run: the five category breakdowns plus the
/// aggregate summary. Serialized verbatim into the report file.
#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    pub general_seo: CategoryResult,
    pub local_seo: CategoryResult,
    pub schema_validation: CategoryResult,
    pub performance: CategoryResult,
    pub sitemap_robots: CategoryResult,
    pub summary: AuditSummary,
}

impl AuditReport {
    /// Display name and result for each category, in run order.
    pub fn categories(&self) -> [(&'static str, &CategoryResult); 5] {
        [
            ("General SEO", &self.general_seo),
            ("Local SEO", &self.local_seo),
            ("Schema Validation", &self.schema_validation),
            ("Performance", &self.performance),
            ("Sitemap/Robots", &self.sitemap_robots),
        ]
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
