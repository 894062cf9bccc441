//! Command line surface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{Config, ConfigError};

#[derive(Debug, Parser)]
#[command(name = "quizadmin", version, about = "Admin console for Quizzer categories")]
pub struct Cli {
    /// Config file (default: <config dir>/quizadmin/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Service base URL, overrides `api.base_url`
    #[arg(long, global = true, env = "QUIZADMIN_BASE_URL")]
    pub base_url: Option<String>,

    /// Bearer token, overrides `api.token`
    #[arg(long, global = true, env = "QUIZADMIN_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Open the interactive category screen (default)
    Tui,
    /// Print all categories
    List,
    /// Create a category
    Add { name: String },
    /// Rename a category
    Rename { id: String, name: String },
    /// Delete a category
    Delete { id: String },
    /// Log in and print the issued token
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Register a new account
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
        /// Create the account with admin rights
        #[arg(long)]
        admin: bool,
    },
}

impl Cli {
    /// Load the config file and apply command line overrides on top.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
        if let Some(token) = &self.token {
            config.api.token = Some(token.clone());
        }
    }

    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Tui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_opens_tui() {
        let cli = Cli::try_parse_from(["quizadmin"]).unwrap();
        assert_eq!(cli.command(), Command::Tui);
    }

    #[test]
    fn rename_takes_id_and_name() {
        let cli = Cli::try_parse_from(["quizadmin", "rename", "7", "sports"]).unwrap();
        assert_eq!(
            cli.command(),
            Command::Rename {
                id: "7".to_string(),
                name: "sports".to_string(),
            }
        );
    }

    #[test]
    fn global_flags_override_config() {
        let cli = Cli::try_parse_from([
            "quizadmin",
            "list",
            "--base-url",
            "https://quiz.example",
            "--token",
            "t0k",
        ])
        .unwrap();
        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.api.base_url, "https://quiz.example");
        assert_eq!(config.api.token.as_deref(), Some("t0k"));
    }

    #[test]
    fn register_defaults_to_non_admin() {
        let cli = Cli::try_parse_from([
            "quizadmin",
            "register",
            "--username",
            "ann",
            "--password",
            "pw",
        ])
        .unwrap();
        assert!(matches!(cli.command(), Command::Register { admin: false, .. }));
    }
}
