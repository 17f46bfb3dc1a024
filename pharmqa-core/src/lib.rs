//! # PharmQA Core
//!
//! Library side of PharmQA, a terminal tutor that answers pharmacy-school
//! questions with a textbook-style explanation, a short multiple-choice quiz
//! and an exam summary, all generated by Google Gemini.
//!
//! ## Architecture Overview
//!
//! - [`subject`]: the closed set of curriculum subjects and their labels.
//! - [`prompts`]: pure builders for the classification and answer prompts.
//! - [`llm`] / [`gemini`]: the model service boundary (`LLMProvider`) and its
//!   Gemini `generateContent` implementation.
//! - [`core`]: classifier and answer invokers plus the interaction
//!   controller that drives a [`session::Session`] through user intents.
//! - [`config`]: `pharmqa.toml` loading and API key resolution.
//! - [`ui`] / [`utils`]: terminal rendering helpers used by the CLI.
//!
//! ## Library Usage Example
//!
//! ```rust,ignore
//! use pharmqa_core::{
//!     InteractionController, Intent, Session, Subject,
//!     config::{ConfigManager, api_keys},
//!     llm::factory::create_provider,
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let manager = ConfigManager::load()?;
//!     let config = manager.config();
//!     let api_key = api_keys::resolve_api_key(&config.agent)?;
//!     let provider = create_provider(&config.agent, api_key)?;
//!
//!     let controller = InteractionController::new(provider, config.session.language);
//!     let mut session = Session::new();
//!     let outcome = controller
//!         .handle(
//!             &mut session,
//!             Intent::Submit {
//!                 question: "what is the mechanism of penicillin".into(),
//!                 subject: Subject::Unclassified,
//!             },
//!         )
//!         .await;
//!     println!("{:?}", outcome.answer);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod gemini;
pub mod llm;
pub mod prompts;
pub mod session;
pub mod subject;
pub mod ui;
pub mod utils;

// Re-exports for convenience
pub use config::types::Locale;
pub use config::{AgentConfig, ConfigManager, PharmQaConfig};
pub use core::controller::{Intent, InteractionController, Notice, Outcome, Stage};
pub use error::QaError;
pub use llm::provider::{LLMError, LLMProvider, LLMResponse};
pub use prompts::{build_answer_prompt, build_classification_prompt};
pub use session::{Session, Speaker, Turn};
pub use subject::Subject;
