//! # Interaction Core
//!
//! - [`classifier`]: asks the model which subject a question belongs to and
//!   checks the reply against the closed subject set.
//! - [`answer`]: sends the full answer prompt.
//! - [`controller`]: the state machine applying user [`Intent`]s to a
//!   [`Session`](crate::session::Session).
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use pharmqa_core::{InteractionController, Intent, Locale, Session, Stage, Subject};
//! use pharmqa_core::llm::GeminiProvider;
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let provider = GeminiProvider::new(
//!     std::env::var("GOOGLE_API_KEY")?,
//!     "gemini-1.5-flash".into(),
//!     "https://generativelanguage.googleapis.com/v1beta".into(),
//! )?;
//! let controller = InteractionController::new(Arc::new(provider), Locale::English);
//! let mut session = Session::new();
//! let outcome = controller
//!     .handle_with(
//!         &mut session,
//!         Intent::Submit {
//!             question: "what is the mechanism of penicillin".into(),
//!             subject: Subject::Unclassified,
//!         },
//!         |stage: Stage| eprintln!("{stage:?}"),
//!     )
//!     .await;
//! assert_eq!(session.history().len(), if outcome.has_errors() { 0 } else { 2 });
//! # Ok(())
//! # }
//! ```

pub mod answer;
pub mod classifier;
pub mod controller;

pub use classifier::Classification;
pub use controller::{Intent, InteractionController, Notice, Outcome, Stage};
