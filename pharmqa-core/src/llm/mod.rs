//! # LLM Integration Layer
//!
//! The interaction layer only ever asks a model one thing: turn this prompt
//! into text. [`provider::LLMProvider`] is that boundary; [`factory`] builds
//! the configured implementation.
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use pharmqa_core::config::AgentConfig;
//! use pharmqa_core::llm::factory::create_provider;
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let provider = create_provider(&AgentConfig::default(), std::env::var("GOOGLE_API_KEY")?)?;
//! let response = provider.generate("What does ACE stand for?").await?;
//! println!("{}", response.content);
//! # Ok(())
//! # }
//! ```

pub mod factory;
pub mod provider;
pub mod providers;

pub use factory::create_provider;
pub use provider::{LLMError, LLMProvider, LLMResponse, Usage};
pub use providers::GeminiProvider;
