use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,

    pub anthropic_api_key: String,
    pub insight_model: String,
    pub insight_timeout_secs: u64,

    /// Comma-separated origin list, or "*" for a permissive policy.
    pub cors_origins: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".into())
                .parse()
                .expect("PORT must be a number"),

            anthropic_api_key: env::var("ANTHROPIC_API_KEY").unwrap_or_else(|_| String::new()),
            insight_model: env::var("INSIGHT_MODEL")
                .unwrap_or_else(|_| "claude-sonnet-4-20250514".into()),
            insight_timeout_secs: env::var("INSIGHT_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".into())
                .parse()
                .unwrap_or(30),

            cors_origins: env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".into()),
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Parsed origin list; `None` means wildcard.
    pub fn allowed_origins(&self) -> Option<Vec<String>> {
        if self.cors_origins.trim() == "*" {
            return None;
        }
        Some(
            self.cors_origins
                .split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_origins(origins: &str) -> Config {
        Config {
            database_url: "postgres://localhost/moodspace".into(),
            host: "0.0.0.0".into(),
            port: 8080,
            anthropic_api_key: String::new(),
            insight_model: "test-model".into(),
            insight_timeout_secs: 30,
            cors_origins: origins.into(),
        }
    }

    #[test]
    fn test_wildcard_origins() {
        assert!(config_with_origins("*").allowed_origins().is_none());
        assert!(config_with_origins(" * ").allowed_origins().is_none());
    }

    #[test]
    fn test_origin_list_parsed_and_trimmed() {
        let origins = config_with_origins("https://a.example, https://b.example ,")
            .allowed_origins()
            .unwrap();
        assert_eq!(origins, vec!["https://a.example", "https://b.example"]);
    }
}
