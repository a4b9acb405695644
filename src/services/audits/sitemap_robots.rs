use crate::config::constants;
use crate::logger::report_logger::ReportLogger;
use crate::services::page_fetcher::PageFetcher;
use crate::structs::category_result::CategoryResult;
use crate::structs::checklist::Checklist;

/// Crawlability endpoints: robots.txt and sitemap.xml. Fetch failures fail
/// the access check and skip only the dependent body checks.
pub struct SitemapRobotsAudit;

impl SitemapRobotsAudit {
    pub async fn run(fetcher: &PageFetcher) -> CategoryResult {
        ReportLogger::print_header("SITEMAP & ROBOTS.TXT");

        let mut checks = Checklist::new();

        match fetcher.fetch("/robots.txt", constants::aux_timeout()).await {
            Ok(page) if page.status == 200 => {
                checks.check("robots.txt accessible", true, None);
                Self::evaluate_robots_body(&mut checks, &page.body);
            }
            Ok(page) => {
                checks.check(
                    "robots.txt accessible",
                    false,
                    Some(format!("Status {}", page.status)),
                );
            }
            Err(e) => {
                checks.check("robots.txt accessible", false, Some(e.to_string()));
            }
        }

        match fetcher.fetch("/sitemap.xml", constants::aux_timeout()).await {
            Ok(page) if page.status == 200 => {
                checks.check("sitemap.xml accessible", true, None);
                Self::evaluate_sitemap_body(&mut checks, &page.body);
            }
            Ok(page) => {
                checks.check(
                    "sitemap.xml accessible",
                    false,
                    Some(format!("Status {}", page.status)),
                );
            }
            Err(e) => {
                checks.check("sitemap.xml accessible", false, Some(e.to_string()));
            }
        }

        let result = checks.into_result();
        ReportLogger::print_category_score("Sitemap/Robots", &result);
        result
    }

    fn evaluate_robots_body(checks: &mut Checklist, body: &str) {
        checks.check("Sitemap referenced in robots.txt", mentions_sitemap(body), None);

        let found = ai_crawler_mentions(body);
        checks.check(
            "AI crawlers mentioned",
            found.len() >= constants::MIN_AI_CRAWLER_MENTIONS,
            Some(if found.is_empty() {
                "none found".to_string()
            } else {
                found.join(", ")
            }),
        );
    }

    fn evaluate_sitemap_body(checks: &mut Checklist, body: &str) {
        let url_count = location_entries(body);
        checks.check(
            "Sitemap has multiple URLs",
            url_count >= constants::MIN_SITEMAP_URLS,
            Some(format!("{url_count} URLs")),
        );
    }
}

fn mentions_sitemap(body: &str) -> bool {
    body.to_lowercase().contains("sitemap")
}

fn ai_crawler_mentions(body: &str) -> Vec<&'static str> {
    let body = body.to_lowercase();
    constants::AI_CRAWLERS
        .iter()
        .filter(|crawler| body.contains(*crawler))
        .copied()
        .collect()
}

fn location_entries(body: &str) -> usize {
    body.matches("<loc>").count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sitemap_mention_is_case_insensitive() {
        assert!(mentions_sitemap("Sitemap: https://example.com/sitemap.xml"));
        assert!(mentions_sitemap("SITEMAP: x"));
        assert!(!mentions_sitemap("User-agent: *\nAllow: /"));
    }

    #[test]
    fn test_ai_crawler_mentions() {
        let body = "User-agent: GPTBot\nAllow: /\n\nUser-agent: Claude-Web\nAllow: /";
        let found = ai_crawler_mentions(body);
        assert_eq!(found, vec!["gptbot", "claude"]);

        assert!(ai_crawler_mentions("User-agent: *").is_empty());
    }

    #[test]
    fn test_location_entry_threshold() {
        let five = "<urlset>".to_string() + &"<url><loc>https://x</loc></url>".repeat(5) + "</urlset>";
        let four = "<urlset>".to_string() + &"<url><loc>https://x</loc></url>".repeat(4) + "</urlset>";
        assert_eq!(location_entries(&five), 5);
        assert!(location_entries(&five) >= constants::MIN_SITEMAP_URLS);
        assert!(location_entries(&four) < constants::MIN_SITEMAP_URLS);
    }

    #[test]
    fn test_robots_body_checks_count() {
        let mut checks = Checklist::new();
        SitemapRobotsAudit::evaluate_robots_body(
            &mut checks,
            "Sitemap: /sitemap.xml\nUser-agent: GPTBot\nUser-agent: PerplexityBot",
        );
        assert_eq!(checks.total(), 2);
        assert_eq!(checks.passed(), 2);
    }

    #[test]
    fn test_sitemap_body_checks_count() {
        let mut checks = Checklist::new();
        SitemapRobotsAudit::evaluate_sitemap_body(&mut checks, "<loc>a</loc><loc>b</loc>");
        assert_eq!(checks.total(), 1);
        assert_eq!(checks.passed(), 0);
    }
}
