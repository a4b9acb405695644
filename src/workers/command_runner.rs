use std::time::Instant;
use crate::config::constants;
use crate::enums::commands::Commands;
use crate::errors::SeolyzerResult;
use crate::logger::report_logger::{ReportLogger, GREEN, RESET, YELLOW};
use crate::services::audits::general_seo::GeneralSeoAudit;
use crate::services::audits::local_seo::LocalSeoAudit;
use crate::services::audits::performance::PerformanceAudit;
use crate::services::audits::schema_validation::SchemaValidationAudit;
use crate::services::audits::sitemap_robots::SitemapRobotsAudit;
use crate::services::page_fetcher::PageFetcher;
use crate::services::report_writer::ReportWriter;
use crate::structs::audit_report_builder::AuditReportBuilder;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self { start_time: None }
    }

    pub async fn run_command(&mut self, command: Commands) -> SeolyzerResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Audit { url, local } => self.audit_command(url, local).await,
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    async fn audit_command(&self, url: Option<String>, local: bool) -> SeolyzerResult<()> {
        let base_url = Self::resolve_base_url(url, local);
        log::info!("🔍 Starting SEO audit for {}", base_url);

        tokio::select! {
            result = Self::run_audit(&base_url) => result,
            _ = tokio::signal::ctrl_c() => {
                println!("\n{}Audit interrupted by user{}", YELLOW, RESET);
                std::process::exit(1);
            }
        }
    }

    async fn run_audit(base_url: &str) -> SeolyzerResult<()> {
        let fetcher = PageFetcher::new(base_url)?;
        ReportLogger::print_banner(fetcher.base_url());

        let report = AuditReportBuilder::new()
            .general_seo(GeneralSeoAudit::run(&fetcher).await)
            .local_seo(LocalSeoAudit::run(&fetcher).await)
            .schema_validation(SchemaValidationAudit::run(&fetcher).await)
            .performance(PerformanceAudit::run(&fetcher).await)
            .sitemap_robots(SitemapRobotsAudit::run(&fetcher).await)
            .build();

        ReportLogger::print_summary(&report);

        let path = ReportWriter::save(&report)?;
        println!("{}Full report saved to: {}{}", GREEN, path.display(), RESET);

        Ok(())
    }

    fn resolve_base_url(url: Option<String>, local: bool) -> String {
        match url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None if local => constants::LOCAL_BASE_URL.to_string(),
            None => constants::PRODUCTION_BASE_URL.to_string(),
        }
    }
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_base_url_prefers_explicit_url() {
        assert_eq!(
            CommandRunner::resolve_base_url(Some("https://staging.example.com/".to_string()), true),
            "https://staging.example.com"
        );
    }

    #[test]
    fn test_resolve_base_url_local_flag() {
        assert_eq!(
            CommandRunner::resolve_base_url(None, true),
            constants::LOCAL_BASE_URL
        );
    }

    #[test]
    fn test_resolve_base_url_defaults_to_production() {
        assert_eq!(
            CommandRunner::resolve_base_url(None, false),
            constants::PRODUCTION_BASE_URL
        );
    }
}
