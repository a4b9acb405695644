use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use crate::config::constants;
use crate::logger::report_logger::ReportLogger;
use crate::services::audits::{meta_by_name, meta_content_by_name, meta_property_present};
use crate::services::page_fetcher::PageFetcher;
use crate::structs::category_result::CategoryResult;
use crate::structs::checklist::Checklist;

static TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("title").expect("valid selector"));
static CANONICAL_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"link[rel="canonical"]"#).expect("valid selector"));
static H1_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("h1").expect("valid selector"));
static H2_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("h2").expect("valid selector"));

const OPEN_GRAPH_TAGS: &[&str] = &["og:title", "og:description", "og:image", "og:url"];
const TWITTER_CARD_TAGS: &[&str] = &["twitter:card", "twitter:title", "twitter:image"];

/// On-page SEO fundamentals of the homepage: titles, meta tags, social
/// cards, heading structure, language.
pub struct GeneralSeoAudit;

impl GeneralSeoAudit {
    pub async fn run(fetcher: &PageFetcher) -> CategoryResult {
        ReportLogger::print_header("GENERAL SEO TESTS");

        let page = match fetcher.fetch_homepage().await {
            Ok(page) => page,
            Err(e) => {
                log::error!("❌ Homepage fetch failed, skipping general SEO checks: {}", e);
                return CategoryResult::skipped();
            }
        };

        let document = Html::parse_document(&page.body);
        let result = Self::evaluate(&document).into_result();
        ReportLogger::print_category_score("General SEO", &result);
        result
    }

    fn evaluate(document: &Html) -> Checklist {
        let mut checks = Checklist::new();

        let title_len = document
            .select(&TITLE_SELECTOR)
            .next()
            .map(|title| title.text().collect::<String>().chars().count())
            .unwrap_or(0);
        checks.check(
            "Title tag length",
            (constants::TITLE_MIN_CHARS..=constants::TITLE_MAX_CHARS).contains(&title_len),
            Some(format!(
                "{} chars (expected {}-{})",
                title_len,
                constants::TITLE_MIN_CHARS,
                constants::TITLE_MAX_CHARS
            )),
        );

        let description_len = meta_content_by_name(document, "description")
            .map(|content| content.chars().count())
            .unwrap_or(0);
        checks.check(
            "Meta description length",
            (constants::META_DESCRIPTION_MIN_CHARS..=constants::META_DESCRIPTION_MAX_CHARS)
                .contains(&description_len),
            Some(format!(
                "{} chars (expected {}-{})",
                description_len,
                constants::META_DESCRIPTION_MIN_CHARS,
                constants::META_DESCRIPTION_MAX_CHARS
            )),
        );

        checks.check(
            "Viewport meta tag",
            meta_by_name(document, "viewport").is_some(),
            None,
        );

        let canonical = document
            .select(&CANONICAL_SELECTOR)
            .next()
            .and_then(|link| link.value().attr("href"))
            .map(|href| href.to_string());
        checks.check("Canonical URL", canonical.is_some(), canonical);

        let robots = meta_content_by_name(document, "robots");
        let indexable = robots
            .as_deref()
            .map(|content| !content.to_lowercase().contains("noindex"))
            .unwrap_or(false);
        checks.check("Robots meta tag (indexable)", indexable, robots);

        let missing_og: Vec<&str> = OPEN_GRAPH_TAGS
            .iter()
            .filter(|tag| !meta_property_present(document, tag))
            .copied()
            .collect();
        checks.check(
            "Open Graph tags complete",
            missing_og.is_empty(),
            (!missing_og.is_empty()).then(|| format!("Missing: {}", missing_og.join(", "))),
        );

        let missing_twitter: Vec<&str> = TWITTER_CARD_TAGS
            .iter()
            .filter(|tag| meta_by_name(document, tag).is_none())
            .copied()
            .collect();
        checks.check(
            "Twitter Card tags",
            missing_twitter.is_empty(),
            (!missing_twitter.is_empty())
                .then(|| format!("Missing: {}", missing_twitter.join(", "))),
        );

        let h1_tags: Vec<String> = document
            .select(&H1_SELECTOR)
            .map(|h1| h1.text().collect::<String>().trim().to_string())
            .collect();
        let h1_detail = if h1_tags.len() == 1 {
            h1_tags[0].chars().take(50).collect::<String>()
        } else {
            format!("Found {} (should be exactly 1)", h1_tags.len())
        };
        checks.check("H1 tag (exactly 1)", h1_tags.len() == 1, Some(h1_detail));

        let h2_count = document.select(&H2_SELECTOR).count();
        checks.check(
            "H2 tags structure",
            h2_count >= constants::MIN_H2_COUNT,
            Some(format!(
                "{} H2 tags (need {}+)",
                h2_count,
                constants::MIN_H2_COUNT
            )),
        );

        let lang = document.root_element().value().attr("lang");
        checks.check(
            "HTML lang attribute",
            lang == Some(constants::EXPECTED_LANG),
            Some(lang.unwrap_or("missing").to_string()),
        );

        checks
    }
}
