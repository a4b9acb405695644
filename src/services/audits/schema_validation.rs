use scraper::Html;
use serde_json::Value;
use crate::logger::report_logger::ReportLogger;
use crate::services::json_ld;
use crate::services::page_fetcher::PageFetcher;
use crate::structs::category_result::CategoryResult;
use crate::structs::checklist::Checklist;

/// Required properties per schema.org type.
const LOCAL_BUSINESS_REQUIRED: &[&str] = &["name", "address", "geo"];
const WEB_PAGE_REQUIRED: &[&str] = &["name", "description", "url"];

/// Structural validation of every embedded JSON-LD block on the homepage.
pub struct SchemaValidationAudit;

impl SchemaValidationAudit {
    pub async fn run(fetcher: &PageFetcher) -> CategoryResult {
        ReportLogger::print_header("SCHEMA.ORG VALIDATION");

        let page = match fetcher.fetch_homepage().await {
            Ok(page) => page,
            Err(e) => {
                log::error!("❌ Homepage fetch failed, skipping schema validation: {}", e);
                return CategoryResult::skipped();
            }
        };

        let document = Html::parse_document(&page.body);
        let result = Self::evaluate(&document).into_result();
        ReportLogger::print_category_score("Schema Validation", &result);
        result
    }

    fn evaluate(document: &Html) -> Checklist {
        let mut checks = Checklist::new();

        let raw_blocks = json_ld::raw_blocks(document);
        checks.check(
            "JSON-LD scripts present",
            !raw_blocks.is_empty(),
            Some(format!("{} schema block(s)", raw_blocks.len())),
        );
        if raw_blocks.is_empty() {
            return checks;
        }

        for (index, raw) in raw_blocks.iter().enumerate() {
            let number = index + 1;
            match json_ld::parse_block(raw) {
                Ok(block) => Self::validate_block(&mut checks, number, &block),
                Err(e) => {
                    // Malformed JSON is a failed check, never a fatal error.
                    checks.check(
                        &format!("Schema #{number} JSON parse"),
                        false,
                        Some(e.to_string()),
                    );
                }
            }
        }

        checks
    }

    fn validate_block(checks: &mut Checklist, number: usize, block: &Value) {
        let structure_valid = (json_ld::has_field(block, "@context")
            && json_ld::has_field(block, "@type"))
            || json_ld::has_field(block, "@graph");
        let described_type = json_ld::object_type(block).unwrap_or("Graph").to_string();
        checks.check(
            &format!("Schema #{number} structure valid"),
            structure_valid,
            Some(described_type),
        );

        for object in json_ld::typed_objects(block, "LocalBusiness") {
            Self::check_required_properties(checks, "LocalBusiness", object, LOCAL_BUSINESS_REQUIRED);
        }
        for object in json_ld::typed_objects(block, "WebPage") {
            Self::check_required_properties(checks, "WebPage", object, WEB_PAGE_REQUIRED);
        }
    }

    fn check_required_properties(
        checks: &mut Checklist,
        type_name: &str,
        object: &Value,
        required: &[&str],
    ) {
        let missing: Vec<&str> = required
            .iter()
            .filter(|field| !json_ld::has_field(object, field))
            .copied()
            .collect();
        checks.check(
            &format!("{type_name} required props"),
            missing.is_empty(),
            (!missing.is_empty()).then(|| format!("Missing: {}", missing.join(", "))),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document_with_blocks(blocks: &[&str]) -> Html {
        let scripts: String = blocks
            .iter()
            .map(|block| format!(r#"<script type="application/ld+json">{block}</script>"#))
            .collect();
        Html::parse_document(&format!(
            "<html><head>{scripts}</head><body></body></html>"
        ))
    }

    #[test]
    fn test_no_blocks_is_single_failed_check() {
        let document = Html::parse_document("<html><head></head><body></body></html>");
        let checks = SchemaValidationAudit::evaluate(&document);
        assert_eq!(checks.total(), 1);
        assert_eq!(checks.passed(), 0);
        assert_eq!(checks.into_result().score, 0.0);
    }

    #[test]
    fn test_valid_local_business_block() {
        let document = document_with_blocks(&[r#"{
            "@context": "https://schema.org",
            "@type": "LocalBusiness",
            "name": "X",
            "address": {"addressLocality": "Angoulême"},
            "geo": {"latitude": 45.6484, "longitude": 0.1560}
        }"#]);
        let checks = SchemaValidationAudit::evaluate(&document);
        // presence + structure + LocalBusiness props
        assert_eq!(checks.total(), 3);
        assert_eq!(checks.passed(), 3);
    }

    #[test]
    fn test_malformed_json_counts_one_failed_check() {
        let document = document_with_blocks(&[r#"{"@type": "WebPage", not json"#]);
        let checks = SchemaValidationAudit::evaluate(&document);
        // presence passes, parse fails
        assert_eq!(checks.total(), 2);
        assert_eq!(checks.passed(), 1);
    }

    #[test]
    fn test_graph_members_are_validated_per_type() {
        let document = document_with_blocks(&[r#"{
            "@context": "https://schema.org",
            "@graph": [
                {"@type": "LocalBusiness", "name": "X", "address": {}, "geo": {}},
                {"@type": "WebPage", "name": "Home", "description": "d"}
            ]
        }"#]);
        let checks = SchemaValidationAudit::evaluate(&document);
        // presence + structure + LocalBusiness props + WebPage props (missing url)
        assert_eq!(checks.total(), 4);
        assert_eq!(checks.passed(), 3);
    }

    #[test]
    fn test_block_without_context_fails_structure() {
        let document = document_with_blocks(&[r#"{"@type": "WebPage", "name": "n", "description": "d", "url": "u"}"#]);
        let checks = SchemaValidationAudit::evaluate(&document);
        // presence passes, structure fails, WebPage props pass
        assert_eq!(checks.total(), 3);
        assert_eq!(checks.passed(), 2);
    }

    #[test]
    fn test_top_level_array_fails_structure_gracefully() {
        let document = document_with_blocks(&[r#"[{"@type": "WebPage"}]"#]);
        let checks = SchemaValidationAudit::evaluate(&document);
        assert_eq!(checks.total(), 2);
        assert_eq!(checks.passed(), 1);
    }
}
