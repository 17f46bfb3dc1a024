//! Gemini API client
//!
//! HTTP client configuration and the `generateContent` wire models. The
//! provider in [`crate::llm::providers::gemini`] adapts this to the crate's
//! [`LLMProvider`](crate::llm::provider::LLMProvider) boundary.

pub mod client;
pub mod models;

pub use client::{Client, ClientConfig};
pub use models::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
    UsageMetadata,
};
