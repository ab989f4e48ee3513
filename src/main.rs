use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};

use character_browser::api::{CharacterApi, HttpCharacterApi};
use character_browser::cli::{Cli, Mode};
use character_browser::headless;
use character_browser::logging::init_tracing;
use character_browser::ui;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            return Ok(ExitCode::FAILURE);
        }
    };
    info!(endpoint = %config.api.endpoint, "config loaded");

    let api: Arc<dyn CharacterApi> = match HttpCharacterApi::new(config.api.endpoint.clone()) {
        Ok(api) => Arc::new(api),
        Err(err) => {
            eprintln!("Error: {err}");
            return Ok(ExitCode::FAILURE);
        }
    };

    match cli.mode() {
        Mode::Interactive => {
            tokio::task::spawn_blocking(move || ui::run(&config, api)).await??;
            Ok(ExitCode::SUCCESS)
        }
        Mode::HeadlessList => {
            let state = headless::run_list(api, &mut io::stdout().lock()).await?;
            if let Some(err) = state.error {
                error!(%err, "character list fetch failed");
                return Ok(ExitCode::FAILURE);
            }
            Ok(ExitCode::SUCCESS)
        }
        Mode::HeadlessCharacter(id) => {
            let found = headless::run_character(api, &id, &mut io::stdout().lock()).await?;
            Ok(if found {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}
