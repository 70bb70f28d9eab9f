mod bootstrap;
mod cli;
mod repl;

use std::io;
use std::path::Path;
use std::process::ExitCode;

use nori_common::{ConfigError, NoriError};
use nori_config::NoriConfig;
use nori_rag::TurnOutcome;
use tracing_subscriber::EnvFilter;

use repl::surface::TerminalSurface;
use repl::Repl;

/// Load `KEY=VALUE` lines from `.env` in the working directory.
fn load_dotenv() {
    load_dotenv_from(Path::new(".env"));
}

/// Variables already present in the environment are left alone.
fn load_dotenv_from(path: &Path) {
    let Ok(contents) = std::fs::read_to_string(path) else {
        return;
    };
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line = line.strip_prefix("export ").unwrap_or(line);
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            let value = value.trim().trim_matches('"').trim_matches('\'');
            if std::env::var(key).is_err() {
                std::env::set_var(key, value);
            }
        }
    }
}

/// Config from `--config` or the default path.
///
/// A broken explicit file is fatal; a broken default file falls back to
/// built-in defaults plus environment overrides. The second value is a
/// warning to log once tracing is up.
fn load_config(args: &cli::Args) -> Result<(NoriConfig, Option<ConfigError>), NoriError> {
    match nori_config::load_config(args.config.as_deref()) {
        Ok(config) => Ok((config, None)),
        Err(e) if args.config.is_some() => Err(e.into()),
        Err(e) => {
            let mut config = NoriConfig::default();
            nori_config::apply_env_overrides(&mut config);
            Ok((config, Some(e)))
        }
    }
}

fn init_logging(args: &cli::Args, config: &NoriConfig) {
    let directive = args
        .log_level
        .as_deref()
        .unwrap_or_else(|| config.logging.level.directive());
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directive))
        .unwrap_or_else(|_| EnvFilter::new("nori=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    load_dotenv();

    let args = cli::parse();

    let (config, deferred) = match load_config(&args) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("nori: {e}");
            return ExitCode::from(2);
        }
    };

    init_logging(&args, &config);
    tracing::info!("Nori v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(e) = deferred {
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    if args.print_config {
        println!("{}", nori_config::config_to_json(&config));
        return ExitCode::SUCCESS;
    }

    let identity = bootstrap::identity(&config, &args);
    let mut manager = match bootstrap::build_manager(&config) {
        Ok(manager) => manager,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("nori: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(message) = args.message.as_deref() {
        let mut surface = TerminalSurface::new(io::stdout()).echo_user_turns(true);
        let outcome = manager.submit(message, &identity, &mut surface).await;
        tracing::debug!(?outcome, "one-shot finished");
        return match outcome {
            TurnOutcome::Rejected(_) | TurnOutcome::TransportFailed(_) | TurnOutcome::Ignored => {
                ExitCode::FAILURE
            }
            _ => ExitCode::SUCCESS,
        };
    }

    match Repl::new(manager, identity).run().await {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
