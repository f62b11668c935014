use std::env;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
    pub quotes: QuotesConfig,
    pub mood: MoodConfig,
    pub rate_limit: RateLimitConfig,
    pub wiki: WikiConfig,
}

/// Database connection pool configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

/// External quote provider configuration
#[derive(Debug, Clone)]
pub struct QuotesConfig {
    /// Base URL of the quote provider API
    pub api_url: String,
    pub timeout: Duration,
    /// How long a fetched batch stays fresh
    pub cache_ttl: Duration,
    /// Most quotes kept from a single fetched batch
    pub batch_limit: usize,
}

/// AI mood analysis configuration
#[derive(Debug, Clone)]
pub struct MoodConfig {
    /// Base URL of an OpenAI-compatible chat completions API
    pub api_url: String,
    /// Absent key is not a startup error; analysis requests report it
    /// as a configuration failure at first use
    pub api_key: Option<String>,
    pub primary_model: String,
    pub fallback_model: String,
    pub timeout: Duration,
}

/// Fixed-window rate limiting configuration for the analysis endpoint
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    pub window: Duration,
    pub max_requests: u32,
}

/// Encyclopedia (biography) API configuration
#[derive(Debug, Clone)]
pub struct WikiConfig {
    pub api_url: String,
    pub timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidPort)?,
            database: DatabaseConfig::from_env()?,
            quotes: QuotesConfig::from_env(),
            mood: MoodConfig::from_env(),
            rate_limit: RateLimitConfig::from_env(),
            wiki: WikiConfig::from_env(),
        })
    }
}

fn env_secs(name: &str, default: u64) -> Duration {
    Duration::from_secs(
        env::var(name)
            .unwrap_or_else(|_| default.to_string())
            .parse()
            .unwrap_or(default),
    )
}

impl DatabaseConfig {
    /// Load database configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = env::var("DATABASE_URL").map_err(|_| ConfigError::MissingDatabaseUrl)?;

        Ok(Self {
            url,
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10),
            acquire_timeout: env_secs("DATABASE_ACQUIRE_TIMEOUT_SECS", 5),
        })
    }
}

impl QuotesConfig {
    pub fn from_env() -> Self {
        Self {
            api_url: env::var("QUOTES_API_URL")
                .unwrap_or_else(|_| "https://zenquotes.io/api".to_string()),
            timeout: env_secs("QUOTES_TIMEOUT_SECS", 15),
            cache_ttl: env_secs("QUOTES_CACHE_TTL_SECS", 7200),
            batch_limit: env::var("QUOTES_BATCH_LIMIT")
                .unwrap_or_else(|_| "50".to_string())
                .parse()
                .unwrap_or(50),
        }
    }
}

impl MoodConfig {
    pub fn from_env() -> Self {
        Self {
            api_url: env::var("MOOD_API_URL")
                .unwrap_or_else(|_| "https://api.groq.com/openai/v1".to_string()),
            api_key: env::var("MOOD_API_KEY").ok(),
            primary_model: env::var("MOOD_PRIMARY_MODEL")
                .unwrap_or_else(|_| "llama-3.3-70b-versatile".to_string()),
            fallback_model: env::var("MOOD_FALLBACK_MODEL")
                .unwrap_or_else(|_| "llama-3.1-8b-instant".to_string()),
            timeout: env_secs("MOOD_TIMEOUT_SECS", 15),
        }
    }
}

impl RateLimitConfig {
    pub fn from_env() -> Self {
        Self {
            window: env_secs("RATE_LIMIT_WINDOW_SECS", 60),
            max_requests: env::var("RATE_LIMIT_MAX_REQUESTS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10),
        }
    }
}

impl WikiConfig {
    pub fn from_env() -> Self {
        Self {
            api_url: env::var("WIKI_API_URL")
                .unwrap_or_else(|_| "https://en.wikipedia.org".to_string()),
            timeout: env_secs("WIKI_TIMEOUT_SECS", 10),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    MissingDatabaseUrl,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "PORT must be a valid number"),
            ConfigError::MissingDatabaseUrl => {
                write!(f, "DATABASE_URL environment variable is required")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
