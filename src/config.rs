use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::{env, time::Duration};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub payment: PaymentConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    #[serde(default)]
    pub secret: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PaymentConfig {
    pub url: String,
    pub timeout_secs: u64,
}

impl PaymentConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy variables (DATABASE_URL, JWT_SECRET, PAYMENT_URL)
    /// 2. Environment variables (MEALKIT__DATABASE__URL, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 9090)?
            .set_default("server.request_timeout_secs", 30)?
            .set_default("database.url", "sqlite:mealkit.db")?
            .set_default("database.max_connections", 5)?
            .set_default("payment.url", "http://localhost:9091/payment")?
            .set_default("payment.timeout_secs", 15)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // The file is optional
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("MEALKIT")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(database_url) = env::var("DATABASE_URL") {
            builder = builder.set_override("database.url", database_url)?;
        }
        if let Ok(jwt_secret) = env::var("JWT_SECRET") {
            builder = builder.set_override("jwt.secret", jwt_secret)?;
        }
        if let Ok(payment_url) = env::var("PAYMENT_URL") {
            builder = builder.set_override("payment.url", payment_url)?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.jwt.secret.len() < 32 {
            return Err("JWT secret must be at least 32 characters long".to_string());
        }
        if self.database.max_connections < 1 {
            return Err("Database max_connections must be at least 1".to_string());
        }
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.server.request_timeout_secs == 0 {
            return Err("Server request_timeout_secs must be greater than 0".to_string());
        }
        if self.payment.url.trim().is_empty() {
            return Err("Payment url must not be empty".to_string());
        }
        if self.payment.timeout_secs == 0 {
            return Err("Payment timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 9090,
                request_timeout_secs: 30,
            },
            database: DatabaseConfig {
                url: "sqlite:test.db".to_string(),
                max_connections: 5,
            },
            jwt: JwtConfig {
                secret: "test_secret_key_minimum_32_characters_long".to_string(),
            },
            payment: PaymentConfig {
                url: "http://localhost:9091/payment".to_string(),
                timeout_secs: 15,
            },
            observability: ObservabilityConfig::default(),
        }
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_validation_short_secret() {
        let mut config = valid();
        config.jwt.secret = "short".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_port() {
        let mut config = valid();
        config.server.port = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_connections() {
        let mut config = valid();
        config.database.max_connections = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_timeouts() {
        let mut config = valid();
        config.server.request_timeout_secs = 0;
        assert!(config.validate().is_err());

        let mut config = valid();
        config.payment.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_empty_payment_url() {
        let mut config = valid();
        config.payment.url = " ".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = temp_dir::TempDir::new().unwrap();
        let path = dir.child("mealkit.toml");
        std::fs::write(
            &path,
            r#"
[server]
port = 8181

[jwt]
secret = "file_secret_key_minimum_32_characters_long"

[payment]
url = "http://payments.internal/payment"
"#,
        )
        .unwrap();

        let config = Config::load(Some(path.display().to_string())).unwrap();

        assert_eq!(config.server.port, 8181);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.request_timeout_secs, 30);
        assert_eq!(config.payment.timeout_secs, 15);
        assert_eq!(config.observability.log_level, "info");
    }
}
