use std::env;
use std::time::Duration;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

// Runtime settings, read once at startup
#[derive(Debug, Clone)]
pub struct Config {
    // None means offline mode
    pub google_api_key: Option<String>,
    pub gemini_base_url: String,
    pub provider_timeout: Duration,
    pub bind_host: String,
    pub port: u16,
    pub template_glob: String,
    pub static_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let google_api_key = lookup("GOOGLE_API_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        let provider_timeout_secs = lookup("PROVIDER_TIMEOUT_SECS")
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(20);

        Self {
            google_api_key,
            gemini_base_url: lookup("GEMINI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
            provider_timeout: Duration::from_secs(provider_timeout_secs),
            bind_host: lookup("BIND_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT")
                .and_then(|v| v.parse::<u16>().ok())
                .unwrap_or(8080),
            template_glob: lookup("TEMPLATE_GLOB").unwrap_or_else(|| "templates/**/*".to_string()),
            static_dir: lookup("STATIC_DIR").unwrap_or_else(|| "./static".to_string()),
        }
    }
}
