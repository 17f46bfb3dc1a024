/// Model ID constants
pub mod models {
    pub mod google {
        pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
        pub const SUPPORTED_MODELS: &[&str] = &[
            "gemini-1.5-flash",
            "gemini-1.5-pro",
            "gemini-2.5-flash",
            "gemini-2.5-flash-lite",
            "gemini-2.5-pro",
        ];
    }
}

/// Default configuration values
pub mod defaults {
    use super::models;

    pub const DEFAULT_MODEL: &str = models::google::DEFAULT_MODEL;
    pub const DEFAULT_PROVIDER: &str = "gemini";
    pub const DEFAULT_API_KEY_ENV: &str = "GOOGLE_API_KEY";
    pub const DEFAULT_LOG_LEVEL: &str = "warn";
}

/// Environment variables consulted for credentials, in priority order after
/// the configured one.
pub mod env {
    pub const GOOGLE_API_KEY: &str = "GOOGLE_API_KEY";
    pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
    pub const FALLBACK_API_KEY_ENVS: &[&str] = &[GOOGLE_API_KEY, GEMINI_API_KEY];
}

pub mod urls {
    pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
}

/// Configuration file locations
pub mod paths {
    pub const CONFIG_FILE_NAME: &str = "pharmqa.toml";
    pub const CONFIG_DIR_NAME: &str = ".pharmqa";
}

/// Interaction rules shared by the controller and the CLI
pub mod session {
    /// Minimum number of non-whitespace-trimmed characters in a question.
    pub const MIN_QUESTION_CHARS: usize = 5;
}

/// Message role constants as understood by the Gemini API
pub mod message_roles {
    pub const USER: &str = "user";
}
