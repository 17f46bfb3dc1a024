//! CLI argument parsing and configuration overrides

use clap::{Parser, Subcommand};
use pharmqa_core::{Locale, PharmQaConfig, Subject};
use std::path::PathBuf;

/// Main CLI structure for pharmqa
#[derive(Parser, Debug)]
#[command(
    name = "pharmqa",
    version,
    about = "Pharmacy student Q&A and quiz tutor powered by Gemini"
)]
pub struct Cli {
    /// Configuration file path (skips the pharmqa.toml search)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory searched for pharmqa.toml; defaults to current directory
    #[arg(long, global = true)]
    pub workspace: Option<PathBuf>,

    /// Gemini model ID, e.g. gemini-1.5-flash
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Environment variable holding the API key (GOOGLE_API_KEY and GEMINI_API_KEY are also checked)
    #[arg(long, global = true)]
    pub api_key_env: Option<String>,

    /// Language for prompts and subject labels (en, ko)
    #[arg(long, global = true)]
    pub language: Option<Locale>,

    /// Log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Interactive question and answer session (default)
    Chat,

    /// Submit a single question and print the answer
    Ask {
        /// Subject slug, or `auto` to let the model classify the question
        #[arg(long, short, default_value = "auto")]
        subject: Subject,

        /// Print the resulting turns as JSON
        #[arg(long)]
        json: bool,

        /// The question to ask
        #[arg(required = true)]
        question: Vec<String>,
    },

    /// List the available subjects
    Subjects,

    /// Write a default pharmqa.toml into the workspace
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// Apply command-line overrides on top of the loaded file.
    pub fn apply_overrides(&self, config: &mut PharmQaConfig) {
        if let Some(model) = &self.model {
            config.agent.model = model.clone();
        }
        if let Some(env) = &self.api_key_env {
            config.agent.api_key_env = env.clone();
        }
        if let Some(language) = self.language {
            config.session.language = language;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
    }
}
