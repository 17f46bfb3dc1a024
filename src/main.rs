//! pharmqa - pharmacy student Q&A and quiz tutor for the terminal

mod cli;
mod logger;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use pharmqa_core::{
    ConfigManager, InteractionController,
    config::{
        api_keys::{load_dotenv, resolve_api_key},
        constants::defaults::DEFAULT_LOG_LEVEL,
    },
    llm::factory::create_provider,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    let workspace = match &args.workspace {
        Some(path) => path.clone(),
        None => std::env::current_dir().context("cannot determine current dir")?,
    };

    let command = args.command.clone().unwrap_or(Commands::Chat);
    if let Commands::Init { force } = command {
        logger::init(args.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL))?;
        return cli::handle_init_command(&workspace, force);
    }

    let mut manager = match &args.config {
        Some(path) => ConfigManager::load_from_file(path)?,
        None => ConfigManager::load_from_workspace(&workspace)?,
    };
    args.apply_overrides(manager.config_mut());

    logger::init(&manager.config().logging.level)?;
    load_dotenv();
    info!(
        path = %manager
            .config_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<defaults>".into()),
        model = %manager.config().agent.model,
        language = %manager.config().session.language,
        "configuration loaded"
    );

    let config = manager.config();
    if command == Commands::Subjects {
        cli::handle_subjects_command(config.session.language);
        return Ok(());
    }

    let api_key = resolve_api_key(&config.agent)?;
    let provider = create_provider(&config.agent, api_key)?;
    let controller = InteractionController::new(provider, config.session.language);

    match command {
        Commands::Ask {
            subject,
            json,
            question,
        } => cli::handle_ask_command(&controller, &question.join(" "), subject, json).await,
        _ => cli::handle_chat_command(&controller).await,
    }
}

