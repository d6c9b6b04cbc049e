use std::collections::HashMap;
use std::time::Duration;

use config::{Config, Environment};
use serde::Deserialize;

use crate::errors::CoreError;

/// Variables that must come from the environment. There are no fallbacks:
/// a missing or empty value stops startup.
pub const REQUIRED_SECRETS: [&str; 8] = [
    "MONGO_URI",
    "JWT_SECRET",
    "JWT_REFRESH_SECRET",
    "GEMINI_API_KEY",
    "CLOUDINARY_CLOUD_NAME",
    "CLOUDINARY_API_KEY",
    "CLOUDINARY_API_SECRET",
    "RESEND_API_KEY",
];

/// Variables with a non-secret default.
pub const OPTIONAL_VARS: [&str; 7] = [
    "NODE_ENV",
    "PORT",
    "BASE_PATH",
    "JWT_EXPIRES_IN",
    "JWT_REFRESH_EXPIRES_IN",
    "RESEND_MAILER_SENDER",
    "FRONTEND_ORIGIN",
];

/// A credential. Its `Debug` output never shows the value.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Secret([REDACTED])")
    }
}

/// Deployment environment, from `NODE_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEnvironment {
    Development,
    Production,
    Test,
}

impl std::str::FromStr for RuntimeEnvironment {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(RuntimeEnvironment::Development),
            "production" | "prod" => Ok(RuntimeEnvironment::Production),
            "test" => Ok(RuntimeEnvironment::Test),
            other => Err(CoreError::InvalidConfig {
                key: "NODE_ENV".into(),
                message: format!("unknown environment '{other}'"),
            }),
        }
    }
}

/// Backend runtime settings, validated at startup.
#[derive(Debug, Clone)]
pub struct EnvConfig {
    pub environment: RuntimeEnvironment,
    pub port: u16,
    pub base_path: String,
    pub mongo_uri: Secret,
    pub jwt_secret: Secret,
    pub jwt_expires_in: Duration,
    pub jwt_refresh_secret: Secret,
    pub jwt_refresh_expires_in: Duration,
    pub gemini_api_key: Secret,
    pub cloudinary_cloud_name: Secret,
    pub cloudinary_api_key: Secret,
    pub cloudinary_api_secret: Secret,
    pub resend_api_key: Secret,
    pub resend_mailer_sender: String,
    pub frontend_origin: String,
}

/// Shape the environment is deserialized into before validation.
/// Keys are the lower-cased variable names.
#[derive(Debug, Deserialize)]
struct RawEnv {
    node_env: String,
    port: String,
    base_path: String,
    jwt_expires_in: String,
    jwt_refresh_expires_in: String,
    resend_mailer_sender: String,
    frontend_origin: String,
    #[serde(flatten)]
    rest: HashMap<String, String>,
}

impl EnvConfig {
    /// Load from the process environment. Only the variables this
    /// configuration knows about are read.
    pub fn from_env() -> Result<Self, CoreError> {
        let vars = std::env::vars()
            .filter(|(name, _)| {
                REQUIRED_SECRETS.contains(&name.as_str()) || OPTIONAL_VARS.contains(&name.as_str())
            })
            .collect();
        Self::from_map(vars)
    }

    /// Load from an explicit variable map instead of the process environment.
    pub fn from_map(vars: HashMap<String, String>) -> Result<Self, CoreError> {
        Self::load(Environment::default().source(Some(vars)))
    }

    fn load(source: Environment) -> Result<Self, CoreError> {
        let raw: RawEnv = Config::builder()
            .set_default("node_env", "development")?
            .set_default("port", "8000")?
            .set_default("base_path", "/api")?
            .set_default("jwt_expires_in", "15m")?
            .set_default("jwt_refresh_expires_in", "7d")?
            .set_default("resend_mailer_sender", "Financy")?
            .set_default("frontend_origin", "http://localhost:5173")?
            .add_source(source)
            .build()?
            .try_deserialize()?;

        let missing: Vec<String> = REQUIRED_SECRETS
            .iter()
            .filter(|name| {
                raw.rest
                    .get(&name.to_lowercase())
                    .map_or(true, |v| v.trim().is_empty())
            })
            .map(|name| name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(CoreError::MissingConfig(missing));
        }

        let secret = |name: &str| Secret(raw.rest[&name.to_lowercase()].clone());

        let port = raw.port.trim().parse::<u16>().map_err(|e| CoreError::InvalidConfig {
            key: "PORT".into(),
            message: format!("'{}' is not a valid port: {e}", raw.port),
        })?;

        let config = Self {
            environment: raw.node_env.parse()?,
            port,
            base_path: raw.base_path.clone(),
            mongo_uri: secret("MONGO_URI"),
            jwt_secret: secret("JWT_SECRET"),
            jwt_expires_in: parse_lifetime("JWT_EXPIRES_IN", &raw.jwt_expires_in)?,
            jwt_refresh_secret: secret("JWT_REFRESH_SECRET"),
            jwt_refresh_expires_in: parse_lifetime(
                "JWT_REFRESH_EXPIRES_IN",
                &raw.jwt_refresh_expires_in,
            )?,
            gemini_api_key: secret("GEMINI_API_KEY"),
            cloudinary_cloud_name: secret("CLOUDINARY_CLOUD_NAME"),
            cloudinary_api_key: secret("CLOUDINARY_API_KEY"),
            cloudinary_api_secret: secret("CLOUDINARY_API_SECRET"),
            resend_api_key: secret("RESEND_API_KEY"),
            resend_mailer_sender: raw.resend_mailer_sender.clone(),
            frontend_origin: raw.frontend_origin.clone(),
        };

        tracing::info!(
            environment = ?config.environment,
            port = config.port,
            base_path = %config.base_path,
            "configuration loaded"
        );
        Ok(config)
    }
}

/// Parse a token lifetime like `15m`, `7d`, `3600s` or `12h`.
pub fn parse_lifetime(key: &str, raw: &str) -> Result<Duration, CoreError> {
    let invalid = |message: String| CoreError::InvalidConfig {
        key: key.to_string(),
        message,
    };

    let raw = raw.trim();
    let unit_at = raw
        .find(|c: char| !c.is_ascii_digit())
        .ok_or_else(|| invalid(format!("'{raw}' has no unit (expected s, m, h or d)")))?;
    let (amount, unit) = raw.split_at(unit_at);

    let amount: u64 = amount
        .parse()
        .map_err(|_| invalid(format!("'{raw}' does not start with a number")))?;
    let seconds_per_unit = match unit {
        "s" => 1,
        "m" => 60,
        "h" => 60 * 60,
        "d" => 24 * 60 * 60,
        other => return Err(invalid(format!("unknown unit '{other}' in '{raw}'"))),
    };

    amount
        .checked_mul(seconds_per_unit)
        .map(Duration::from_secs)
        .ok_or_else(|| invalid(format!("'{raw}' is too large")))
}
