use super::RequestsLoggingLevel;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub requests_logging_level: RequestsLoggingLevel,
    pub host: String,
    pub port: u16,
    /// Requests with a larger body are answered with a 422.
    pub max_body_bytes: usize,
    /// Body limit for `/addArtist` alone.
    pub max_artist_body_bytes: usize,
    pub request_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            requests_logging_level: RequestsLoggingLevel::Path,
            host: "0.0.0.0".to_string(),
            port: 3001,
            max_body_bytes: 1024,
            max_artist_body_bytes: 1 << 20,
            request_timeout: Duration::from_secs(30),
        }
    }
}
