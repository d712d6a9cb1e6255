//! Output formatting for webgl-preflight.
//!
//! Provides terminal, JSON, and JUnit XML output formatters.
//!
//! All formatters produce valid output for any ValidationReport input,
//! including a report with no checks. No function in this module will panic.

use crate::cli::args::OutputFormat;
use crate::engine::result::ValidationReport;
use crate::Finding;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format a validation report into a string
    fn format(&self, report: &ValidationReport) -> String;
}

const RULE: &str = "--------------------------------------------------------------------------------";

/// Terminal (human-readable) formatter
pub struct TerminalFormatter {
    color: bool,
    verbose: bool,
    quiet: bool,
}

impl TerminalFormatter {
    pub fn new(color: bool, verbose: bool, quiet: bool) -> Self {
        TerminalFormatter {
            color,
            verbose,
            quiet,
        }
    }

    fn colorize(&self, text: &str, color_code: &str) -> String {
        if self.color {
            format!("\x1b[{}m{}\x1b[0m", color_code, text)
        } else {
            text.to_string()
        }
    }

    fn green(&self, text: &str) -> String {
        self.colorize(text, "32")
    }

    fn yellow(&self, text: &str) -> String {
        self.colorize(text, "33")
    }

    fn red(&self, text: &str) -> String {
        self.colorize(text, "31")
    }

    fn finding_line(&self, status: &str, finding: &Finding) -> String {
        if self.verbose {
            format!("  {} {}: {}\n", status, finding.check_id, finding.message)
        } else {
            format!("  {} {}\n", status, finding.message)
        }
    }

    fn verdict(&self, report: &ValidationReport) -> String {
        if !report.is_valid() {
            self.red("INVALID")
        } else if report.warnings().next().is_some() {
            self.yellow("VALID (with warnings)")
        } else {
            self.green("VALID")
        }
    }
}

impl OutputFormatter for TerminalFormatter {
    fn format(&self, report: &ValidationReport) -> String {
        let mut output = String::new();

        if !self.quiet {
            output.push_str(RULE);
            output.push('\n');
            output.push_str("webgl-preflight validation report\n");
            output.push_str(&format!("Build folder: {}\n", report.build_folder.display()));
            output.push_str(RULE);
            output.push_str("\n\n");
        }

        let errors: Vec<_> = report.errors().collect();
        let warnings: Vec<_> = report.warnings().collect();

        if !errors.is_empty() {
            output.push_str("ERRORS\n");
            let status = self.red("[FAIL]");
            for finding in errors {
                output.push_str(&self.finding_line(&status, finding));
            }
            output.push('\n');
        }

        if !warnings.is_empty() {
            output.push_str("WARNINGS\n");
            let status = self.yellow("[WARN]");
            for finding in warnings {
                output.push_str(&self.finding_line(&status, finding));
            }
            output.push('\n');
        }

        if self.quiet {
            output.push_str(&format!("Result: {}", self.verdict(report)));
            return output;
        }

        if report.findings.is_empty() {
            output.push_str(&format!("  {} No problems found\n\n", self.green("[PASS]")));
        }

        let summary = report.summary();
        output.push_str(RULE);
        output.push('\n');
        output.push_str(&format!(
            "SUMMARY: {} errors, {} warnings ({} checks: {} passed, {} warned, {} failed, {} skipped)\n",
            summary.errors,
            summary.warnings,
            summary.total,
            summary.passed,
            summary.warned,
            summary.failed,
            summary.skipped
        ));
        if self.verbose {
            output.push_str(&format!("Total time: {}ms\n", report.total_duration_ms));
        }
        output.push_str(&format!("Result: {}\n", self.verdict(report)));

        let exit_code = super::exit_code(report);
        let exit_desc = match exit_code {
            1 => "errors detected",
            2 => "warnings detected",
            _ => "all checks passed",
        };
        output.push_str(&format!("Exit code: {} ({})\n", exit_code, exit_desc));
        output.push_str(RULE);

        output
    }
}

/// JSON formatter
#[cfg(feature = "json")]
pub struct JsonFormatter {
    pretty: bool,
}

#[cfg(feature = "json")]
impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        JsonFormatter { pretty }
    }
}

#[cfg(feature = "json")]
impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &ValidationReport) -> String {
        let result = report.to_result();
        let value = serde_json::json!({
            "build_folder": report.build_folder.display().to_string(),
            "valid": result.valid,
            "errors": result.errors,
            "warnings": result.warnings,
            "findings": report.findings,
            "checks": report.checks,
            "summary": report.summary(),
            "duration_ms": report.total_duration_ms,
        });

        if self.pretty {
            format!("{:#}", value)
        } else {
            value.to_string()
        }
    }
}

/// JUnit XML formatter
#[cfg(feature = "junit")]
#[derive(Default)]
pub struct JunitFormatter;

#[cfg(feature = "junit")]
impl JunitFormatter {
    pub fn new() -> Self {
        JunitFormatter
    }

    fn escape_xml(s: &str) -> String {
        let mut result = String::with_capacity(s.len());
        for c in s.chars() {
            match c {
                '&' => result.push_str("&amp;"),
                '<' => result.push_str("&lt;"),
                '>' => result.push_str("&gt;"),
                '"' => result.push_str("&quot;"),
                '\'' => result.push_str("&apos;"),
                c => result.push(c),
            }
        }
        result
    }
}

#[cfg(feature = "junit")]
impl OutputFormatter for JunitFormatter {
    fn format(&self, report: &ValidationReport) -> String {
        use crate::engine::result::CheckStatus;

        let summary = report.summary();
        let time = report.total_duration_ms as f64 / 1000.0;

        let mut output = String::new();
        output.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        output.push_str(&format!(
            "<testsuites tests=\"{}\" failures=\"{}\" errors=\"0\" skipped=\"{}\" time=\"{:.3}\">\n",
            summary.total, summary.failed, summary.skipped, time
        ));
        output.push_str(&format!(
            "  <testsuite name=\"{}\" tests=\"{}\" failures=\"{}\" errors=\"0\" skipped=\"{}\" time=\"{:.3}\">\n",
            Self::escape_xml(&report.build_folder.display().to_string()),
            summary.total,
            summary.failed,
            summary.skipped,
            time
        ));

        for check in &report.checks {
            output.push_str(&format!(
                "    <testcase name=\"{}: {}\" classname=\"webgl-preflight.{}\" time=\"{:.3}\"",
                Self::escape_xml(&check.id),
                Self::escape_xml(&check.name),
                check.category.to_string().to_lowercase(),
                check.duration_ms as f64 / 1000.0
            ));

            let findings: Vec<_> = report.findings_for(&check.id).collect();

            match check.status {
                CheckStatus::Pass => output.push_str(" />\n"),
                CheckStatus::Skip => {
                    output.push_str(">\n");
                    output.push_str(&format!(
                        "      <skipped message=\"{}\" />\n",
                        Self::escape_xml(check.skip_reason.as_deref().unwrap_or("skipped"))
                    ));
                    output.push_str("    </testcase>\n");
                }
                CheckStatus::Fail | CheckStatus::Warn => {
                    output.push_str(">\n");
                    let errors: Vec<_> = findings.iter().filter(|f| f.is_error()).collect();
                    if let Some(first) = errors.first() {
                        let body: Vec<String> =
                            errors.iter().map(|f| Self::escape_xml(&f.message)).collect();
                        output.push_str(&format!(
                            "      <failure message=\"{}\">{}</failure>\n",
                            Self::escape_xml(&first.message),
                            body.join("\n")
                        ));
                    }
                    let warnings: Vec<String> = findings
                        .iter()
                        .filter(|f| !f.is_error())
                        .map(|f| format!("WARNING: {}", Self::escape_xml(&f.message)))
                        .collect();
                    if !warnings.is_empty() {
                        output.push_str(&format!(
                            "      <system-out>{}</system-out>\n",
                            warnings.join("\n")
                        ));
                    }
                    output.push_str("    </testcase>\n");
                }
            }
        }

        output.push_str("  </testsuite>\n");
        output.push_str("</testsuites>");
        output
    }
}

/// Get a formatter based on the output format
pub fn get_formatter(
    format: OutputFormat,
    no_color: bool,
    verbose: bool,
    quiet: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TerminalFormatter::new(!no_color, verbose, quiet)),
        #[cfg(feature = "json")]
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
        #[cfg(feature = "junit")]
        OutputFormat::Junit => Box::new(JunitFormatter::new()),
        #[allow(unreachable_patterns)]
        other => {
            tracing::warn!(format = ?other, "output format not compiled in, using text");
            Box::new(TerminalFormatter::new(!no_color, verbose, quiet))
        }
    }
}
