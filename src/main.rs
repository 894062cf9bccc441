use std::io;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use quizadmin::api::{ApiClient, AuthApi, CategoryApi, HttpCategoryApi};
use quizadmin::cli::{Cli, Command};
use quizadmin::commands;
use quizadmin::logging::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config().context("Failed to load configuration")?;
    init_tracing(&config);

    let client = ApiClient::new(&config.api).context("Failed to create HTTP client")?;
    tracing::info!(base_url = %client.base_url(), "Using Quizzer service");

    let mut stdout = io::stdout();
    match cli.command() {
        Command::Tui => {
            let api: Arc<dyn CategoryApi> = Arc::new(HttpCategoryApi::new(client));
            quizadmin::ui::run(config, api).await?;
        }
        Command::List => {
            let api = HttpCategoryApi::new(client);
            commands::list(&api, &mut stdout).await?;
        }
        Command::Add { name } => {
            let api = HttpCategoryApi::new(client);
            commands::add(&api, &name, &mut stdout).await?;
        }
        Command::Rename { id, name } => {
            let api = HttpCategoryApi::new(client);
            commands::rename(&api, &id, &name, &mut stdout).await?;
        }
        Command::Delete { id } => {
            let api = HttpCategoryApi::new(client);
            commands::delete(&api, &id, &mut stdout).await?;
        }
        Command::Login { username, password } => {
            let auth = AuthApi::new(client);
            commands::login(&auth, &username, &password, &mut stdout).await?;
        }
        Command::Register {
            username,
            password,
            admin,
        } => {
            let auth = AuthApi::new(client);
            commands::register(&auth, &username, &password, admin, &mut stdout).await?;
        }
    }

    Ok(())
}
