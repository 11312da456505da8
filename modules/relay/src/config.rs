use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    /// Destination topic endpoint. Optional at startup: its absence is
    /// reported per-request by the publish route, not at boot.
    pub topic_endpoint: Option<String>,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        Ok(Self {
            topic_endpoint: env::var("EVENT_GRID_TOPIC_ENDPOINT")
                .ok()
                .filter(|v| !v.is_empty()),

            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
        })
    }
}
