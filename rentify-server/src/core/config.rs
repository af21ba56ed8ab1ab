use thiserror::Error;

use crate::auth::{AgentGatePolicy, JwtConfig, jwt::DEFAULT_TOKEN_TTL_DAYS};

/// Minimum signing secret length accepted outside development
const MIN_JWT_SECRET_LEN: usize = 32;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set in {1} environment")]
    Missing(&'static str, String),

    #[error("{0} must not be empty in {1} environment")]
    Empty(&'static str, String),

    #[error("Invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | PORT | 4000 | HTTP listen port |
/// | ENVIRONMENT | development | development, staging or production |
/// | DATABASE_PATH | data/rentify.db | Embedded database directory |
/// | DB_NAMESPACE | rentify | Database namespace |
/// | DB_NAME | rentifytechDB | Database name |
/// | JWT_SECRET | dev fallback | Token signing secret (required outside development) |
/// | TOKEN_TTL_DAYS | 365 | Token lifetime |
/// | AGENT_GATE_POLICY | strict | `strict` or `legacy` |
/// | ADMIN_EMAIL | unset | Account granted Admin at registration and at startup |
/// | STRIPE_SECRET_KEY | dev fallback | Payment provider key (required outside development) |
/// | PAYMENT_CURRENCY | usd | Currency for payment intents |
/// | LOG_LEVEL | unset | Overrides the default log filter |
/// | LOG_DIR | unset | Enables daily rolling log files |
#[derive(Debug, Clone)]
pub struct Config {
    pub environment: String,
    pub http_port: u16,
    pub database_path: String,
    pub db_namespace: String,
    pub db_name: String,
    pub jwt: JwtConfig,
    pub agent_gate_policy: AgentGatePolicy,
    /// Bootstrap administrator; without one no Admin can ever be created
    pub admin_email: Option<String>,
    pub stripe_secret_key: String,
    pub payment_currency: String,
    pub log_level: Option<String>,
    pub log_dir: Option<String>,
}

impl Config {
    /// Read a secret, falling back to a placeholder only in development
    fn require_secret(name: &'static str, environment: &str) -> Result<String, ConfigError> {
        let val = match std::env::var(name) {
            Ok(v) => v,
            Err(_) => {
                if environment != "development" {
                    return Err(ConfigError::Missing(name, environment.to_string()));
                }
                format!("dev-{name}-not-for-production")
            }
        };
        if val.is_empty() && environment != "development" {
            return Err(ConfigError::Empty(name, environment.to_string()));
        }
        Ok(val)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let jwt_secret = Self::require_secret("JWT_SECRET", &environment)?;
        if environment != "development" && jwt_secret.len() < MIN_JWT_SECRET_LEN {
            return Err(ConfigError::Invalid {
                name: "JWT_SECRET",
                reason: format!("must be at least {MIN_JWT_SECRET_LEN} characters"),
            });
        }

        let agent_gate_policy = match std::env::var("AGENT_GATE_POLICY") {
            Ok(v) => v.parse().map_err(|reason| ConfigError::Invalid {
                name: "AGENT_GATE_POLICY",
                reason,
            })?,
            Err(_) => AgentGatePolicy::default(),
        };

        Ok(Self {
            http_port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(4000),
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "data/rentify.db".into()),
            db_namespace: std::env::var("DB_NAMESPACE").unwrap_or_else(|_| "rentify".into()),
            db_name: std::env::var("DB_NAME").unwrap_or_else(|_| "rentifytechDB".into()),
            jwt: JwtConfig {
                secret: jwt_secret,
                ttl_days: std::env::var("TOKEN_TTL_DAYS")
                    .ok()
                    .and_then(|d| d.parse().ok())
                    .unwrap_or(DEFAULT_TOKEN_TTL_DAYS),
            },
            agent_gate_policy,
            admin_email: std::env::var("ADMIN_EMAIL")
                .ok()
                .map(|e| e.trim().to_string())
                .filter(|e| !e.is_empty()),
            stripe_secret_key: Self::require_secret("STRIPE_SECRET_KEY", &environment)?,
            payment_currency: std::env::var("PAYMENT_CURRENCY").unwrap_or_else(|_| "usd".into()),
            log_level: std::env::var("LOG_LEVEL").ok(),
            log_dir: std::env::var("LOG_DIR").ok(),
            environment,
        })
    }

    /// Development configuration rooted at `database_path`
    ///
    /// Used by tests; reads nothing from the environment.
    pub fn development(database_path: impl Into<String>, jwt_secret: impl Into<String>) -> Self {
        Self {
            environment: "development".into(),
            http_port: 0,
            database_path: database_path.into(),
            db_namespace: "rentify".into(),
            db_name: "rentifytechDB".into(),
            jwt: JwtConfig::new(jwt_secret),
            agent_gate_policy: AgentGatePolicy::default(),
            admin_email: None,
            stripe_secret_key: "dev-STRIPE_SECRET_KEY-not-for-production".into(),
            payment_currency: "usd".into(),
            log_level: None,
            log_dir: None,
        }
    }

    pub fn with_agent_gate_policy(mut self, policy: AgentGatePolicy) -> Self {
        self.agent_gate_policy = policy;
        self
    }

    pub fn with_admin_email(mut self, email: impl Into<String>) -> Self {
        self.admin_email = Some(email.into());
        self
    }

    /// Whether `email` is the configured bootstrap administrator
    pub fn is_bootstrap_admin(&self, email: &str) -> bool {
        self.admin_email.as_deref() == Some(email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_secret_falls_back_in_development() {
        let val = Config::require_secret("RENTIFY_TEST_UNSET_SECRET", "development").unwrap();
        assert_eq!(val, "dev-RENTIFY_TEST_UNSET_SECRET-not-for-production");
    }

    #[test]
    fn test_require_secret_fails_in_production() {
        let err = Config::require_secret("RENTIFY_TEST_UNSET_SECRET", "production").unwrap_err();
        assert!(matches!(err, ConfigError::Missing("RENTIFY_TEST_UNSET_SECRET", _)));
    }

    #[test]
    fn test_development_config() {
        let config = Config::development("/tmp/db", "secret")
            .with_agent_gate_policy(AgentGatePolicy::LegacyAdminFlag);
        assert_eq!(config.environment, "development");
        assert_eq!(config.admin_email, None);
        assert_eq!(config.jwt.ttl_days, 365);
        assert_eq!(config.agent_gate_policy, AgentGatePolicy::LegacyAdminFlag);
    }

    #[test]
    fn test_bootstrap_admin_is_exact_match() {
        let config = Config::development("/tmp/db", "secret").with_admin_email("root@x.com");
        assert!(config.is_bootstrap_admin("root@x.com"));
        assert!(!config.is_bootstrap_admin("Root@x.com"));
        assert!(!Config::development("/tmp/db", "secret").is_bootstrap_admin("root@x.com"));
    }
}
