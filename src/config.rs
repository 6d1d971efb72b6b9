use tracing::warn;

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_PORT: u16 = 8080;

// Resolved once at startup and injected everywhere; nothing reads the
// environment after this point.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub api_base: String,
    pub model: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let api_key = non_empty_env("GEMINI_API_KEY");
        if api_key.is_none() {
            warn!(
                "GEMINI_API_KEY environment variable not set. Using a mock response. \
                 Please provide a valid API key for actual Gemini functionality."
            );
        }
        Self {
            api_key,
            api_base: non_empty_env("GEMINI_API_BASE")
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            model: non_empty_env("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        }
    }

    // The mock/live selector: pure configuration, fixed for the process
    // lifetime.
    pub fn mock_mode(&self) -> bool {
        self.api_key.is_none()
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
