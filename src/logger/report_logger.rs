use crate::structs::audit_report::AuditReport;
use crate::structs::category_result::CategoryResult;

pub const GREEN: &str = "\x1b[92m";
pub const RED: &str = "\x1b[91m";
pub const YELLOW: &str = "\x1b[93m";
pub const CYAN: &str = "\x1b[96m";
pub const MAGENTA: &str = "\x1b[95m";
pub const BOLD: &str = "\x1b[1m";
pub const RESET: &str = "\x1b[0m";

pub struct ReportLogger {}

impl ReportLogger {
    pub fn print_banner(base_url: &str) {
        println!("\n{}{}{}", MAGENTA, BOLD, "*".repeat(80));
        println!("{:^80}", "SEO AUDIT SUITE - THEO MULTIMEDIA");
        println!("{:^80}", base_url);
        println!("{}{}\n", "*".repeat(80), RESET);
    }

    pub fn print_header(text: &str) {
        println!("\n{}{}{}{}", CYAN, BOLD, "=".repeat(80), RESET);
        println!("{}{}{:^80}{}", CYAN, BOLD, text, RESET);
        println!("{}{}{}{}\n", CYAN, BOLD, "=".repeat(80), RESET);
    }

    pub fn print_check(name: &str, passed: bool, detail: Option<&str>) {
        let status = if passed {
            format!("{}✓ PASS{}", GREEN, RESET)
        } else {
            format!("{}✗ FAIL{}", RED, RESET)
        };
        println!("{} | {}", status, name);
        if let Some(detail) = detail {
            println!("       {}→ {}{}", YELLOW, detail, RESET);
        }
    }

    pub fn print_category_score(label: &str, result: &CategoryResult) {
        println!(
            "\n{}{} Score: {}/{} ({:.1}%){}",
            BOLD, label, result.passed, result.total, result.score, RESET
        );
    }

    pub fn print_summary(report: &AuditReport) {
        Self::print_header("FINAL REPORT SUMMARY");

        for (name, result) in report.categories() {
            let color = if result.score >= 80.0 {
                GREEN
            } else if result.score >= 60.0 {
                YELLOW
            } else {
                RED
            };
            println!(
                "{}{:.<40} {}/{} ({:.1}%){}",
                color, name, result.passed, result.total, result.score, RESET
            );
        }

        let summary = &report.summary;
        let color = if summary.overall_score >= 90.0 {
            GREEN
        } else if summary.overall_score >= 75.0 {
            YELLOW
        } else {
            RED
        };

        println!("\n{}{}{}{}", BOLD, CYAN, "=".repeat(80), RESET);
        println!(
            "{}{}OVERALL SCORE: {}/{} ({:.1}%){}",
            color, BOLD, summary.total_passed, summary.total_tests, summary.overall_score, RESET
        );
        println!("{}{}{}{}", BOLD, CYAN, "=".repeat(80), RESET);
        println!(
            "\n{}Grade: {} {}{}\n",
            BOLD,
            summary.grade.letter(),
            summary.grade.label(),
            RESET
        );
    }
}
