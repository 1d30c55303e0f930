//! rule-game entry point.
//!
//! Configuration comes from `RULE_GAME_*` environment variables (see
//! `rule_game::core::config`). Logs go to stderr; the game owns stdout.

use std::io;
use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use rule_game::{GameConfig, Outcome, Shell};

fn main() -> ExitCode {
    let config = GameConfig::from_env();

    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .compact()
        .init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        range = %config.range,
        challenge = config.challenge,
        "rule-game starting"
    );

    let stdin = io::stdin();
    let result = Shell::new(config, stdin.lock(), io::stdout())
        .and_then(|mut shell| shell.run());

    match result {
        Ok(Outcome::Quit) => ExitCode::SUCCESS,
        Ok(Outcome::GameOver(cause)) => {
            tracing::info!(?cause, "session ended");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "session aborted");
            eprintln!("rule-game: {}", e);
            ExitCode::FAILURE
        }
    }
}
