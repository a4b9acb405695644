use std::time::Duration;

pub const PRODUCTION_BASE_URL: &str = "https://theo-multimedia.com";
pub const LOCAL_BASE_URL: &str = "http://localhost:3000";
pub const USER_AGENT: &str = "SEO-Testing-Bot/2025 (theo-multimedia.com quality assurance)";

pub const HOMEPAGE_TIMEOUT_SECS: u64 = 10;
pub const AUX_TIMEOUT_SECS: u64 = 5;

pub const TITLE_MIN_CHARS: usize = 30;
pub const TITLE_MAX_CHARS: usize = 75;
pub const META_DESCRIPTION_MIN_CHARS: usize = 100;
pub const META_DESCRIPTION_MAX_CHARS: usize = 165;
pub const MIN_H2_COUNT: usize = 3;
pub const EXPECTED_LANG: &str = "fr";

// Angoulême
pub const EXPECTED_LATITUDE: f64 = 45.6484;
pub const EXPECTED_LONGITUDE: f64 = 0.1560;
pub const LATITUDE_LITERAL: &str = "45.6484";
pub const LONGITUDE_LITERAL: &str = "0.1560";
pub const EXPECTED_LOCALITY: &str = "Angoulême";

pub const GEO_META_TAGS: &[&str] = &["geo.region", "geo.placename", "geo.position", "ICBM"];

pub const REQUIRED_ADDRESS_FIELDS: &[&str] = &[
    "addressLocality",
    "addressRegion",
    "postalCode",
    "addressCountry",
];

pub const LOCAL_KEYWORDS: &[&str] = &["angoulême", "charente", "nouvelle-aquitaine"];
pub const MIN_LOCAL_KEYWORDS: usize = 2;
pub const MIN_OFFER_COUNT: usize = 3;

pub const AI_CRAWLERS: &[&str] = &["gptbot", "claude", "perplexity", "anthropic"];
pub const MIN_AI_CRAWLER_MENTIONS: usize = 2;
pub const MIN_SITEMAP_URLS: usize = 5;

pub const MAX_RESPONSE_TIME_SECS: f64 = 2.0;
pub const MAX_PAGE_SIZE_KB: f64 = 500.0;
pub const MIN_IMAGE_DIMENSION_RATIO: f64 = 0.8;

pub fn homepage_timeout() -> Duration {
    Duration::from_secs(HOMEPAGE_TIMEOUT_SECS)
}

pub fn aux_timeout() -> Duration {
    Duration::from_secs(AUX_TIMEOUT_SECS)
}
