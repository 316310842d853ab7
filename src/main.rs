use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use story_resize::config::ResizeConfig;
use story_resize::controller::ResizeController;
use story_resize::replay::{self, ReplayError, Scenario};

#[derive(Parser, Debug)]
#[command(name = "story-resize", about = "Replay a scripted resize gesture and print the emitted actions")]
struct Cli {
    /// Scenario JSON file describing one gesture.
    scenario: PathBuf,

    /// Kind table config; overrides the scenario's own `config`, which falls
    /// back to STORY_RESIZE_CONFIG, then the built-in kinds.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            tracing::error!(error = %e, code = e.error_code(), "replay failed");
            ExitCode::FAILURE
        }
    }
}

/// Replay the scenario, printing one JSON line per action and per rejection.
/// Returns whether every event was accepted.
fn run(cli: &Cli) -> Result<bool, ReplayError> {
    let scenario = Scenario::from_path(&cli.scenario)?;
    let config = match &cli.config {
        Some(path) => ResizeConfig::from_path(path)?,
        None => scenario.load_config(&cli.scenario)?,
    };

    let mut controller = ResizeController::from_config(&config);
    let outcome = replay::run(&mut controller, scenario);

    for action in &outcome.actions {
        println!("{}", serde_json::to_string(action)?);
    }
    for rejection in &outcome.rejected {
        println!("{}", serde_json::json!({ "rejected": rejection }));
    }

    tracing::info!(actions = outcome.actions.len(), rejected = outcome.rejected.len(), "replay finished");
    Ok(outcome.is_clean())
}
