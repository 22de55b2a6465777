use std::env;

/// Client configuration, read from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the backend API, e.g. `https://api.storefront.example`.
    pub api_base_url: String,
}

impl Config {
    /// Build a config with an explicit base URL.
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
        }
    }

    /// Load the config from the environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok();

        let api_base_url =
            env::var("API_BASE_URL").map_err(|_| "API_BASE_URL must be set in environment")?;

        Ok(Self { api_base_url })
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://") {
            return Err("API_BASE_URL must be an http(s) URL".to_string());
        }

        Ok(())
    }
}
