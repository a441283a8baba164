use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::*;
use menugraph_core::audit::{AuditOptions, execute_audit};
use menugraph_core::report::MenuReport;
use menugraph_fetcher::MenuClient;
use std::fs;
use std::path::PathBuf;
use tracing::{Level, info};
use url::Url;

pub const DEFAULT_API_URL: &str =
    "https://backend-challenge-summer-2018.herokuapp.com/challenges.json?id=1";

/// Everything a single audit run needs from the command line
#[derive(Debug, Clone)]
pub struct AuditSettings {
    pub url: String,
    pub timeout_secs: u64,
    pub output: Option<PathBuf>,
    pub pretty: bool,
    pub quiet: bool,
    pub verbosity: u8,
}

impl Default for AuditSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_API_URL.to_string(),
            timeout_secs: 10,
            output: None,
            pretty: false,
            quiet: false,
            verbosity: 0,
        }
    }
}

impl AuditSettings {
    pub fn from_matches(args: &ArgMatches) -> Self {
        let defaults = Self::default();
        Self {
            url: args
                .get_one::<Url>("url")
                .map(|u| u.to_string())
                .unwrap_or(defaults.url),
            timeout_secs: args
                .get_one::<u64>("timeout")
                .copied()
                .unwrap_or(defaults.timeout_secs),
            output: args.get_one::<PathBuf>("output").cloned(),
            pretty: args.get_flag("pretty"),
            quiet: args.get_flag("quiet"),
            verbosity: args.get_count("verbose"),
        }
    }
}

/// Log level for a `-v` count. Warnings are always shown.
pub fn level_for_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the fmt subscriber on stderr so stdout only ever carries the report.
pub fn init_logging(verbosity: u8) {
    tracing_subscriber::fmt()
        .with_max_level(level_for_verbosity(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Run the audit against the configured API.
pub async fn handle_audit(settings: &AuditSettings) -> Result<MenuReport> {
    let client = MenuClient::with_timeout(&settings.url, settings.timeout_secs)
        .context("Could not set up the menu API client")?;

    info!("Auditing menus from {}", client.base_url());

    let options = AuditOptions {
        show_progress_bars: !settings.quiet,
    };
    let menu_report = execute_audit(&client, options)
        .await
        .with_context(|| format!("Failed to fetch menus from {}", settings.url))?;

    Ok(menu_report)
}

/// Serialize the report and write it to the configured sink.
pub fn write_report(menu_report: &MenuReport, settings: &AuditSettings) -> Result<()> {
    let json = menu_report
        .to_json(settings.pretty)
        .context("Failed to serialize report")?;

    match &settings.output {
        Some(path) => {
            fs::write(path, format!("{}\n", json))
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            info!("Report written to {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

pub fn summary_line(menu_report: &MenuReport) -> String {
    format!(
        "{} {} menus audited: {} valid, {} invalid",
        "✓".green().bold(),
        menu_report.total(),
        menu_report.valid_menus.len().to_string().green(),
        menu_report.invalid_menus.len().to_string().red()
    )
}

pub fn print_summary(menu_report: &MenuReport, settings: &AuditSettings) {
    if settings.quiet {
        return;
    }
    eprintln!("{}", summary_line(menu_report));
    if let Some(path) = &settings.output {
        eprintln!("{} {}", "→".blue(), path.display().to_string().bright_white());
    }
}

pub fn print_failure(error: &anyhow::Error) {
    eprintln!("{} Audit failed: {:#}", "✗".red().bold(), error);
}
