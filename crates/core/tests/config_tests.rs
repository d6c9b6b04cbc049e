// ═══════════════════════════════════════════════════════════════════
// Config Tests: EnvConfig loading, defaults, secret handling,
// token lifetimes
// ═══════════════════════════════════════════════════════════════════

use std::collections::HashMap;
use std::time::Duration;

use finance_dashboard_core::config::{
    parse_lifetime, EnvConfig, RuntimeEnvironment, REQUIRED_SECRETS,
};
use finance_dashboard_core::errors::CoreError;

/// Every required secret set to a recognisable placeholder.
fn complete_env() -> HashMap<String, String> {
    REQUIRED_SECRETS
        .iter()
        .map(|name| (name.to_string(), format!("{}-value", name.to_lowercase())))
        .collect()
}

fn with(mut vars: HashMap<String, String>, key: &str, value: &str) -> HashMap<String, String> {
    vars.insert(key.to_string(), value.to_string());
    vars
}

// ═══════════════════════════════════════════════════════════════════
// Loading
// ═══════════════════════════════════════════════════════════════════

mod loading {
    use super::*;

    #[test]
    fn defaults_apply_when_optional_vars_absent() {
        let config = EnvConfig::from_map(complete_env()).unwrap();
        assert_eq!(config.environment, RuntimeEnvironment::Development);
        assert_eq!(config.port, 8000);
        assert_eq!(config.base_path, "/api");
        assert_eq!(config.jwt_expires_in, Duration::from_secs(15 * 60));
        assert_eq!(config.jwt_refresh_expires_in, Duration::from_secs(7 * 24 * 60 * 60));
        assert_eq!(config.resend_mailer_sender, "Financy");
        assert_eq!(config.frontend_origin, "http://localhost:5173");
    }

    #[test]
    fn secrets_are_read() {
        let config = EnvConfig::from_map(complete_env()).unwrap();
        assert_eq!(config.mongo_uri.expose(), "mongo_uri-value");
        assert_eq!(config.jwt_secret.expose(), "jwt_secret-value");
        assert_eq!(config.resend_api_key.expose(), "resend_api_key-value");
    }

    #[test]
    fn optional_vars_override_defaults() {
        let vars = with(complete_env(), "PORT", "3000");
        let vars = with(vars, "NODE_ENV", "production");
        let vars = with(vars, "JWT_EXPIRES_IN", "1h");
        let vars = with(vars, "FRONTEND_ORIGIN", "https://app.example.com");

        let config = EnvConfig::from_map(vars).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.environment, RuntimeEnvironment::Production);
        assert_eq!(config.jwt_expires_in, Duration::from_secs(3600));
        assert_eq!(config.frontend_origin, "https://app.example.com");
    }

    #[test]
    fn missing_secrets_are_all_reported_in_order() {
        let mut vars = complete_env();
        vars.remove("JWT_SECRET");
        vars.remove("RESEND_API_KEY");
        vars.remove("MONGO_URI");

        match EnvConfig::from_map(vars).unwrap_err() {
            CoreError::MissingConfig(names) => {
                assert_eq!(names, vec!["MONGO_URI", "JWT_SECRET", "RESEND_API_KEY"]);
            }
            other => panic!("Expected MissingConfig, got: {other:?}"),
        }
    }

    #[test]
    fn empty_secret_counts_as_missing() {
        let vars = with(complete_env(), "GEMINI_API_KEY", "   ");
        match EnvConfig::from_map(vars).unwrap_err() {
            CoreError::MissingConfig(names) => assert_eq!(names, vec!["GEMINI_API_KEY"]),
            other => panic!("Expected MissingConfig, got: {other:?}"),
        }
    }

    #[test]
    fn nothing_set_reports_every_secret() {
        match EnvConfig::from_map(HashMap::new()).unwrap_err() {
            CoreError::MissingConfig(names) => assert_eq!(names.len(), REQUIRED_SECRETS.len()),
            other => panic!("Expected MissingConfig, got: {other:?}"),
        }
    }

    #[test]
    fn invalid_port_is_rejected() {
        let vars = with(complete_env(), "PORT", "eighty");
        match EnvConfig::from_map(vars).unwrap_err() {
            CoreError::InvalidConfig { key, .. } => assert_eq!(key, "PORT"),
            other => panic!("Expected InvalidConfig, got: {other:?}"),
        }
    }

    #[test]
    fn out_of_range_port_is_rejected() {
        let vars = with(complete_env(), "PORT", "70000");
        assert!(matches!(
            EnvConfig::from_map(vars),
            Err(CoreError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn unknown_environment_is_rejected() {
        let vars = with(complete_env(), "NODE_ENV", "staging");
        match EnvConfig::from_map(vars).unwrap_err() {
            CoreError::InvalidConfig { key, message } => {
                assert_eq!(key, "NODE_ENV");
                assert!(message.contains("staging"));
            }
            other => panic!("Expected InvalidConfig, got: {other:?}"),
        }
    }

    #[test]
    fn bad_lifetime_names_its_variable() {
        let vars = with(complete_env(), "JWT_REFRESH_EXPIRES_IN", "soon");
        match EnvConfig::from_map(vars).unwrap_err() {
            CoreError::InvalidConfig { key, .. } => assert_eq!(key, "JWT_REFRESH_EXPIRES_IN"),
            other => panic!("Expected InvalidConfig, got: {other:?}"),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// Secrets
// ═══════════════════════════════════════════════════════════════════

mod secrets {
    use super::*;

    #[test]
    fn debug_output_never_shows_secret_values() {
        let config = EnvConfig::from_map(complete_env()).unwrap();
        let debug = format!("{config:?}");
        for name in REQUIRED_SECRETS {
            assert!(
                !debug.contains(&format!("{}-value", name.to_lowercase())),
                "{name} leaked into Debug output"
            );
        }
        assert!(debug.contains("[REDACTED]"));
    }
}

// ═══════════════════════════════════════════════════════════════════
// Environment names
// ═══════════════════════════════════════════════════════════════════

mod environment {
    use super::*;

    #[test]
    fn aliases() {
        assert_eq!("dev".parse::<RuntimeEnvironment>().unwrap(), RuntimeEnvironment::Development);
        assert_eq!("PROD".parse::<RuntimeEnvironment>().unwrap(), RuntimeEnvironment::Production);
        assert_eq!("test".parse::<RuntimeEnvironment>().unwrap(), RuntimeEnvironment::Test);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Token lifetimes
// ═══════════════════════════════════════════════════════════════════

mod lifetimes {
    use super::*;

    #[test]
    fn units() {
        assert_eq!(parse_lifetime("K", "30s").unwrap(), Duration::from_secs(30));
        assert_eq!(parse_lifetime("K", "15m").unwrap(), Duration::from_secs(900));
        assert_eq!(parse_lifetime("K", "12h").unwrap(), Duration::from_secs(43_200));
        assert_eq!(parse_lifetime("K", "7d").unwrap(), Duration::from_secs(604_800));
    }

    #[test]
    fn whitespace_is_trimmed() {
        assert_eq!(parse_lifetime("K", " 2h ").unwrap(), Duration::from_secs(7200));
    }

    #[test]
    fn missing_unit() {
        let err = parse_lifetime("JWT_EXPIRES_IN", "900").unwrap_err();
        assert!(err.to_string().contains("JWT_EXPIRES_IN"));
        assert!(err.to_string().contains("no unit"));
    }

    #[test]
    fn missing_number() {
        assert!(parse_lifetime("K", "m").is_err());
    }

    #[test]
    fn unknown_unit() {
        let err = parse_lifetime("K", "3w").unwrap_err();
        assert!(err.to_string().contains("unknown unit 'w'"));
    }

    #[test]
    fn overflow() {
        let err = parse_lifetime("K", "18446744073709551615d").unwrap_err();
        assert!(err.to_string().contains("too large"));
    }
}
