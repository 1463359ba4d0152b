use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Connection settings for an OpenAI-compatible chat completion endpoint.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Empty when the environment does not provide one
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl LlmConfig {
    /// Read `OPENAI_API_KEY`, `OPENAI_BASE_URL`, `OPENAI_MODEL` and
    /// `OPENAI_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map(|key| key.trim().to_string())
            .unwrap_or_default();

        let base_url = std::env::var("OPENAI_BASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let model = std::env::var("OPENAI_MODEL")
            .ok()
            .filter(|model| !model.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let timeout_secs = std::env::var("OPENAI_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            api_key,
            base_url,
            model,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LlmConfig::default();
        assert!(!config.has_api_key());
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(
            config.completions_url(),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn test_completions_url_trims_slash() {
        let config = LlmConfig {
            base_url: "http://127.0.0.1:8045/v1/".to_string(),
            ..Default::default()
        };
        assert_eq!(config.completions_url(), "http://127.0.0.1:8045/v1/chat/completions");
    }

    // All environment mutation lives in one test so parallel tests do not race.
    #[test]
    fn test_from_env() {
        std::env::set_var("OPENAI_API_KEY", " sk-test ");
        std::env::set_var("OPENAI_BASE_URL", "http://localhost:11434/v1");
        std::env::set_var("OPENAI_MODEL", "llama3");
        std::env::set_var("OPENAI_TIMEOUT_SECS", "not-a-number");

        let config = LlmConfig::from_env();
        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.base_url, "http://localhost:11434/v1");
        assert_eq!(config.model, "llama3");
        assert_eq!(config.timeout, Duration::from_secs(60));

        std::env::set_var("OPENAI_TIMEOUT_SECS", "5");
        assert_eq!(LlmConfig::from_env().timeout, Duration::from_secs(5));

        std::env::remove_var("OPENAI_API_KEY");
        std::env::remove_var("OPENAI_BASE_URL");
        std::env::remove_var("OPENAI_MODEL");
        std::env::remove_var("OPENAI_TIMEOUT_SECS");

        let config = LlmConfig::from_env();
        assert!(!config.has_api_key());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
    }
}
