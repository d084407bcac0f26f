use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

use fee_core::auth::MockAuthService;
use fee_core::wizard::WizardFlow;
use fee_cli::config::{AppConfig, DEFAULT_CONFIG_FILE};
use fee_cli::host::{EstimatorPage, SessionOutcome, run_session};
use fee_cli::logging;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Fee estimator for design projects.
///
/// Walks through project information, deliverables, and time and
/// complexity, then shows a summary of the estimate inputs.
#[derive(Debug, Parser)]
struct Cli {
    /// Settings file. A missing file means defaults.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Entry point: `mode-select-first` or `project-based-only`.
    #[arg(long, value_parser = parse_flow)]
    flow: Option<WizardFlow>,

    /// Log filter, e.g. `debug` or `fee_core=trace`.
    #[arg(long)]
    log_level: Option<String>,

    /// Also append logs to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Start signed in with this email.
    #[arg(long)]
    email: Option<String>,
}

fn parse_flow(s: &str) -> Result<WizardFlow, String> {
    WizardFlow::parse(s)
        .ok_or_else(|| format!("unknown flow '{s}' (expected mode-select-first or project-based-only)"))
}

// ─── configuration ───────────────────────────────────────────────────────────

/// Command-line flags win over the settings file.
fn merge_cli(
    mut config: AppConfig,
    cli: Cli,
) -> AppConfig {
    if let Some(flow) = cli.flow {
        config.wizard.flow = flow;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    if let Some(file) = cli.log_file {
        config.logging.file = Some(file);
    }
    if let Some(email) = cli.email {
        config.user.email = Some(email);
    }
    config
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_default_logging();

    let cli = Cli::parse();
    let config = AppConfig::load(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    let config = merge_cli(config, cli);

    logging::apply_config(&config.logging).context("applying logging settings")?;
    info!(app = logging::app_name(), flow = %config.wizard.flow, "starting");

    let auth = match &config.user.email {
        Some(email) => MockAuthService::signed_in_as(email, config.user.first_name.as_deref()),
        None => MockAuthService::new(),
    };

    let mut page = EstimatorPage::new(config.wizard.flow, config.wizard.custom_licensing);
    page.load_user(&auth).await;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let outcome = run_session(&mut page, stdin.lock(), &mut stdout)?;

    match outcome {
        SessionOutcome::Completed => println!("Estimate submitted. Thanks, {}!", page.user_name()),
        SessionOutcome::Exited => println!("Left the fee estimator."),
        SessionOutcome::Quit | SessionOutcome::EndOfInput => debug!(?outcome, "no estimate"),
    }

    Ok(())
}
