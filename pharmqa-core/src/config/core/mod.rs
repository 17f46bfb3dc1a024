pub mod agent;
pub mod logging;
pub mod session;

pub use agent::AgentConfig;
pub use logging::LoggingConfig;
pub use session::SessionConfig;
