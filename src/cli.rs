use clap::Parser;
use std::path::PathBuf;

use crate::api::CharacterId;
use crate::config::{Config, ConfigError};

/// Browse characters from a remote API.
#[derive(Debug, Parser)]
#[command(name = "character-browser", version, about)]
pub struct Cli {
    /// Path to the config file (default: platform config dir)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the API base URL from the config file
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Fetch the character list as soon as the UI starts
    #[arg(long)]
    pub fetch_on_start: bool,

    /// Fetch the list once and print each state as a JSON line (no UI)
    #[arg(long)]
    pub headless: bool,

    /// Fetch one character by id and print it as JSON (no UI)
    #[arg(long, value_name = "ID")]
    pub character: Option<String>,
}

/// What the binary should do after parsing arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Interactive,
    HeadlessList,
    HeadlessCharacter(CharacterId),
}

impl Cli {
    pub fn mode(&self) -> Mode {
        match (&self.character, self.headless) {
            (Some(id), _) => Mode::HeadlessCharacter(CharacterId::from(id.as_str())),
            (None, true) => Mode::HeadlessList,
            (None, false) => Mode::Interactive,
        }
    }

    /// Load the config file and apply flag overrides.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        if let Some(endpoint) = &self.endpoint {
            config = config.with_endpoint(endpoint.clone())?;
        }
        if self.fetch_on_start {
            config.ui.fetch_on_start = true;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("character-browser").chain(args.iter().copied()))
    }

    #[test]
    fn no_flags_is_interactive() {
        assert_eq!(parse(&[]).mode(), Mode::Interactive);
    }

    #[test]
    fn headless_flag_selects_list_mode() {
        assert_eq!(parse(&["--headless"]).mode(), Mode::HeadlessList);
    }

    #[test]
    fn character_flag_wins_over_headless() {
        assert_eq!(
            parse(&["--headless", "--character", "4"]).mode(),
            Mode::HeadlessCharacter(CharacterId::from(4))
        );
    }

    #[test]
    fn endpoint_override_is_normalized() {
        let cli = parse(&[
            "--config",
            "/nonexistent/character-browser.toml",
            "--endpoint",
            "http://localhost:3000/api/",
        ]);
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.api.endpoint, "http://localhost:3000/api");
    }

    #[test]
    fn invalid_endpoint_override_is_rejected() {
        let cli = parse(&[
            "--config",
            "/nonexistent/character-browser.toml",
            "--endpoint",
            "not a url",
        ]);
        assert!(matches!(
            cli.resolve_config(),
            Err(ConfigError::ValidationError { .. })
        ));
    }
}
