/// Server configuration, loaded from the environment at startup
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub rubric_path: String,
    pub language_tool_url: String,
    pub language_tool_language: String,
}

impl ServerConfig {
    /// Default configuration for local development
    pub fn default() -> ServerConfig {
        ServerConfig {
            port: 3000,
            rubric_path: "rubric.json".to_string(),
            language_tool_url: "http://127.0.0.1:8010".to_string(),
            language_tool_language: "en-US".to_string(),
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> ServerConfig {
        let mut config = ServerConfig::default();

        if let Ok(port) = std::env::var("PORT") {
            match port.parse::<u16>() {
                Ok(value) => config.port = value,
                Err(e) => {
                    tracing::warn!(
                        "Failed to parse PORT '{}': {}, using default: {}",
                        port,
                        e,
                        config.port
                    );
                }
            }
        }

        if let Ok(path) = std::env::var("RUBRIC_PATH") {
            if !path.is_empty() {
                config.rubric_path = path;
            }
        }

        if let Ok(url) = std::env::var("LANGUAGE_TOOL_URL") {
            if url.starts_with("http://") || url.starts_with("https://") {
                config.language_tool_url = url;
            } else {
                tracing::warn!(
                    "Invalid LANGUAGE_TOOL_URL '{}' (must start with http:// or https://), using default: {}",
                    url,
                    config.language_tool_url
                );
            }
        }

        if let Ok(language) = std::env::var("LANGUAGE_TOOL_LANGUAGE") {
            if !language.is_empty() {
                config.language_tool_language = language;
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.rubric_path, "rubric.json");
        assert_eq!(config.language_tool_url, "http://127.0.0.1:8010");
        assert_eq!(config.language_tool_language, "en-US");
    }
}
