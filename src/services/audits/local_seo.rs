use scraper::Html;
use serde_json::Value;
use crate::config::constants;
use crate::logger::report_logger::ReportLogger;
use crate::services::audits::meta_by_name;
use crate::services::audits::meta_content_by_name;
use crate::services::json_ld;
use crate::services::page_fetcher::PageFetcher;
use crate::structs::category_result::CategoryResult;
use crate::structs::checklist::Checklist;

/// Local-search signals for the Angoulême market: geo meta tags, the
/// LocalBusiness JSON-LD object and its NAP fields, local keywords.
pub struct LocalSeoAudit;

impl LocalSeoAudit {
    pub async fn run(fetcher: &PageFetcher) -> CategoryResult {
        ReportLogger::print_header("LOCAL SEO TESTS - ANGOULÊME");

        let page = match fetcher.fetch_homepage().await {
            Ok(page) => page,
            Err(e) => {
                log::error!("❌ Homepage fetch failed, skipping local SEO checks: {}", e);
                return CategoryResult::skipped();
            }
        };

        let document = Html::parse_document(&page.body);
        let result = Self::evaluate(&document).into_result();
        ReportLogger::print_category_score("Local SEO", &result);
        result
    }

    fn evaluate(document: &Html) -> Checklist {
        let mut checks = Checklist::new();

        let missing_geo: Vec<&str> = constants::GEO_META_TAGS
            .iter()
            .filter(|name| meta_by_name(document, name).is_none())
            .copied()
            .collect();
        let geo_detail = if missing_geo.is_empty() {
            meta_content_by_name(document, "geo.region").map(|region| format!("Region: {region}"))
        } else {
            Some(format!("Missing: {}", missing_geo.join(", ")))
        };
        checks.check("Geo meta tags complete", missing_geo.is_empty(), geo_detail);

        match meta_content_by_name(document, "geo.position") {
            Some(coords) => {
                let matches = coords.contains(constants::LATITUDE_LITERAL)
                    && coords.contains(constants::LONGITUDE_LITERAL);
                checks.check("GPS coordinates Angoulême", matches, Some(coords));
            }
            None => {
                checks.check(
                    "GPS coordinates Angoulême",
                    false,
                    Some("No geo.position tag".to_string()),
                );
            }
        }

        let blocks: Vec<Value> = json_ld::raw_blocks(document)
            .iter()
            .filter_map(|raw| json_ld::parse_block(raw).ok())
            .collect();
        let local_business = blocks
            .iter()
            .flat_map(|block| json_ld::typed_objects(block, "LocalBusiness"))
            .next();

        checks.check(
            "LocalBusiness Schema",
            local_business.is_some(),
            local_business.map(|_| "Found in JSON-LD".to_string()),
        );

        Self::check_business_gps(&mut checks, local_business);
        Self::check_business_address(&mut checks, local_business);

        let area_served = local_business
            .map(|business| json_ld::non_empty_field(business, "areaServed"))
            .unwrap_or(false);
        let area_detail = local_business
            .filter(|business| json_ld::has_field(business, "areaServed"))
            .map(|business| format!("{} areas", json_ld::entry_count(business, "areaServed")));
        checks.check("Service area defined", area_served, area_detail);

        let opening_hours = local_business
            .map(|business| json_ld::has_field(business, "openingHoursSpecification"))
            .unwrap_or(false);
        checks.check("Opening hours specified", opening_hours, None);

        let nap_complete = local_business
            .map(|business| {
                json_ld::non_empty_field(business, "name")
                    && (json_ld::non_empty_field(business, "telephone")
                        || json_ld::non_empty_field(business, "email"))
            })
            .unwrap_or(false);
        checks.check("Contact info (NAP)", nap_complete, None);

        let offer_count = local_business
            .map(|business| json_ld::entry_count(business, "makesOffer"))
            .unwrap_or(0);
        checks.check(
            "Services/offers defined",
            offer_count >= constants::MIN_OFFER_COUNT,
            Some(format!(
                "{} services (need {}+)",
                offer_count,
                constants::MIN_OFFER_COUNT
            )),
        );

        let page_text = document
            .root_element()
            .text()
            .collect::<String>()
            .to_lowercase();
        let found_keywords: Vec<&str> = constants::LOCAL_KEYWORDS
            .iter()
            .filter(|keyword| page_text.contains(**keyword))
            .copied()
            .collect();
        checks.check(
            "Local keywords present",
            found_keywords.len() >= constants::MIN_LOCAL_KEYWORDS,
            Some(if found_keywords.is_empty() {
                "none found".to_string()
            } else {
                found_keywords.join(", ")
            }),
        );

        checks
    }

    fn check_business_gps(checks: &mut Checklist, local_business: Option<&Value>) {
        let geo = local_business.and_then(|business| business.get("geo"));
        match geo {
            Some(geo) => {
                let matches = json_ld::f64_field(geo, "latitude")
                    == Some(constants::EXPECTED_LATITUDE)
                    && json_ld::f64_field(geo, "longitude") == Some(constants::EXPECTED_LONGITUDE);
                checks.check(
                    "LocalBusiness GPS in schema",
                    matches,
                    (!matches).then(|| "Coordinates mismatch".to_string()),
                );
            }
            None => {
                checks.check(
                    "LocalBusiness GPS in schema",
                    false,
                    Some("No geo in schema".to_string()),
                );
            }
        }
    }

    fn check_business_address(checks: &mut Checklist, local_business: Option<&Value>) {
        let address = local_business.and_then(|business| business.get("address"));
        match address {
            Some(address) => {
                let complete = constants::REQUIRED_ADDRESS_FIELDS
                    .iter()
                    .all(|field| json_ld::has_field(address, field))
                    && json_ld::str_field(address, "addressLocality")
                        == Some(constants::EXPECTED_LOCALITY);
                let detail = complete.then(|| {
                    format!(
                        "{}, {}",
                        json_ld::str_field(address, "addressLocality").unwrap_or_default(),
                        json_ld::str_field(address, "postalCode").unwrap_or_default()
                    )
                });
                checks.check("LocalBusiness complete address", complete, detail);
            }
            None => {
                checks.check(
                    "LocalBusiness complete address",
                    false,
                    Some("No address in schema".to_string()),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn homepage_with_schema(schema: &str) -> Html {
        Html::parse_document(&format!(
            r#"<html lang="fr"><head>
                <meta name="geo.region" content="FR-16">
                <meta name="geo.placename" content="Angoulême">
                <meta name="geo.position" content="45.6484;0.1560">
                <meta name="ICBM" content="45.6484, 0.1560">
                <script type="application/ld+json">{schema}</script>
            </head><body>
                <p>Agence basée à Angoulême, en Charente, au cœur de la Nouvelle-Aquitaine.</p>
            </body></html>"#
        ))
    }

    fn complete_business() -> String {
        r#"{
            "@context": "https://schema.org",
            "@type": "LocalBusiness",
            "name": "Théo Multimedia",
            "telephone": "+33 5 45 00 00 00",
            "geo": {"latitude": 45.6484, "longitude": 0.1560},
            "address": {
                "addressLocality": "Angoulême",
                "addressRegion": "Nouvelle-Aquitaine",
                "postalCode": "16000",
                "addressCountry": "FR"
            },
            "areaServed": ["Angoulême", "Charente"],
            "openingHoursSpecification": [{"@type": "OpeningHoursSpecification"}],
            "makesOffer": [{"name": "a"}, {"name": "b"}, {"name": "c"}]
        }"#
        .to_string()
    }

    #[test]
    fn test_complete_local_page_passes_all_checks() {
        let document = homepage_with_schema(&complete_business());
        let checks = LocalSeoAudit::evaluate(&document);
        assert_eq!(checks.total(), 10);
        assert_eq!(checks.passed(), 10);
    }

    #[test]
    fn test_gps_in_schema_requires_exact_coordinates() {
        let exact = homepage_with_schema(&complete_business());
        let off = homepage_with_schema(&complete_business().replace("45.6484,", "45.6485,"));

        let exact_passed = LocalSeoAudit::evaluate(&exact).passed();
        let off_passed = LocalSeoAudit::evaluate(&off).passed();
        assert_eq!(exact_passed - off_passed, 1);
    }

    #[test]
    fn test_string_coordinates_fail_schema_gps_check() {
        let schema = complete_business().replace(
            r#""geo": {"latitude": 45.6484, "longitude": 0.1560}"#,
            r#""geo": {"latitude": "45.6484", "longitude": "0.1560"}"#,
        );
        let document = homepage_with_schema(&schema);
        let checks = LocalSeoAudit::evaluate(&document);
        assert_eq!(checks.passed(), 9);
    }

    #[test]
    fn test_local_business_found_under_graph() {
        let schema = format!(
            r#"{{"@context": "https://schema.org", "@graph": [{}]}}"#,
            complete_business()
        );
        let document = homepage_with_schema(&schema);
        let checks = LocalSeoAudit::evaluate(&document);
        assert_eq!(checks.passed(), 10);
    }

    #[test]
    fn test_missing_schema_fails_business_checks() {
        let document = Html::parse_document(
            r#"<html lang="fr"><head></head><body><p>Angoulême et la Charente</p></body></html>"#,
        );
        let checks = LocalSeoAudit::evaluate(&document);
        assert_eq!(checks.total(), 10);
        // Only the local-keywords check passes.
        assert_eq!(checks.passed(), 1);
    }

    #[test]
    fn test_wrong_locality_fails_address_check() {
        let schema = complete_business().replace("\"Angoulême\",", "\"Bordeaux\",");
        let document = homepage_with_schema(&schema);
        let checks = LocalSeoAudit::evaluate(&document);
        assert_eq!(checks.passed(), 9);
    }

    #[test]
    fn test_two_offers_are_not_enough() {
        let schema =
            complete_business().replace(r#"[{"name": "a"}, {"name": "b"}, {"name": "c"}]"#, r#"[{"name": "a"}, {"name": "b"}]"#);
        let document = homepage_with_schema(&schema);
        let checks = LocalSeoAudit::evaluate(&document);
        assert_eq!(checks.passed(), 9);
    }
}
