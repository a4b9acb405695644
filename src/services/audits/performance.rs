use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use crate::config::constants;
use crate::logger::report_logger::ReportLogger;
use crate::services::page_fetcher::PageFetcher;
use crate::structs::category_result::CategoryResult;
use crate::structs::checklist::Checklist;
use crate::structs::fetched_page::FetchedPage;

static IMG_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("img").expect("valid selector"));

/// Delivery proxies for page speed: timing, compression, caching, payload
/// size and image dimension hints.
pub struct PerformanceAudit;

impl PerformanceAudit {
    pub async fn run(fetcher: &PageFetcher) -> CategoryResult {
        ReportLogger::print_header("PERFORMANCE TESTS");

        let page = match fetcher.fetch_homepage().await {
            Ok(page) => page,
            Err(e) => {
                log::error!("❌ Homepage fetch failed, skipping performance checks: {}", e);
                return CategoryResult::skipped();
            }
        };

        let negotiated_encoding = match fetcher.probe_compression().await {
            Ok(encoding) => encoding,
            Err(e) => {
                log::warn!("⚠️ Compression probe failed: {}", e);
                None
            }
        };

        let result = Self::evaluate(&page, negotiated_encoding.as_deref()).into_result();
        ReportLogger::print_category_score("Performance", &result);
        result
    }

    fn evaluate(page: &FetchedPage, negotiated_encoding: Option<&str>) -> Checklist {
        let mut checks = Checklist::new();

        let response_secs = page.elapsed.as_secs_f64();
        checks.check(
            "Response time < 2s",
            response_secs < constants::MAX_RESPONSE_TIME_SECS,
            Some(format!("{response_secs:.2}s")),
        );

        checks.check(
            "Gzip compression enabled",
            is_gzip(negotiated_encoding),
            negotiated_encoding.map(|encoding| encoding.to_string()),
        );

        checks.check(
            "Cache-Control header",
            cache_control_ok(page.cache_control.as_deref()),
            page.cache_control
                .as_deref()
                .map(|header| header.chars().take(50).collect()),
        );

        checks.check(
            "Page size < 500KB",
            page.size_kb() < constants::MAX_PAGE_SIZE_KB,
            Some(format!("{:.1}KB", page.size_kb())),
        );

        let document = Html::parse_document(&page.body);
        let (with_dimensions, total_images) = image_dimension_counts(&document);
        if total_images > 0 {
            let ratio = with_dimensions as f64 / total_images as f64;
            checks.check(
                "Images have dimensions",
                ratio >= constants::MIN_IMAGE_DIMENSION_RATIO,
                Some(format!("{with_dimensions}/{total_images}")),
            );
        } else {
            checks.check(
                "Images have dimensions",
                true,
                Some("No images to check".to_string()),
            );
        }

        checks
    }
}

fn is_gzip(encoding: Option<&str>) -> bool {
    encoding
        .map(|value| value.to_lowercase().contains("gzip"))
        .unwrap_or(false)
}

fn cache_control_ok(header: Option<&str>) -> bool {
    header
        .map(|value| value.contains("max-age") || value.contains("public"))
        .unwrap_or(false)
}

/// (images with both width and height, all images)
fn image_dimension_counts(document: &Html) -> (usize, usize) {
    let mut with_dimensions = 0;
    let mut total = 0;
    for image in document.select(&IMG_SELECTOR) {
        total += 1;
        let element = image.value();
        if element.attr("width").is_some() && element.attr("height").is_some() {
            with_dimensions += 1;
        }
    }
    (with_dimensions, total)
}
