// ═══════════════════════════════════════════════════════════════════
// Error Tests: CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use finance_dashboard_core::errors::CoreError;

// ═══════════════════════════════════════════════════════════════════
// Display formatting
// ═══════════════════════════════════════════════════════════════════

mod display {
    use super::*;

    #[test]
    fn api_error() {
        let err = CoreError::Api {
            endpoint: "analytics/chart".into(),
            message: "HTTP 502 Bad Gateway".into(),
        };
        assert_eq!(
            err.to_string(),
            "API error (analytics/chart): HTTP 502 Bad Gateway"
        );
    }

    #[test]
    fn network_error() {
        let err = CoreError::Network("connection refused".into());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }

    #[test]
    fn serialization_errors() {
        assert_eq!(
            CoreError::Serialization("bad".into()).to_string(),
            "Serialization error: bad"
        );
        assert_eq!(
            CoreError::Deserialization("eof".into()).to_string(),
            "Deserialization error: eof"
        );
    }

    #[test]
    fn invalid_record() {
        let err = CoreError::InvalidRecord {
            index: 4,
            reason: "missing income".into(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid period record at index 4: missing income"
        );
    }

    #[test]
    fn missing_config_lists_every_name() {
        let err = CoreError::MissingConfig(vec!["MONGO_URI".into(), "JWT_SECRET".into()]);
        assert_eq!(
            err.to_string(),
            "Missing required configuration: MONGO_URI, JWT_SECRET"
        );
    }

    #[test]
    fn invalid_config() {
        let err = CoreError::InvalidConfig {
            key: "PORT".into(),
            message: "'x' is not a valid port".into(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid configuration value for PORT: 'x' is not a valid port"
        );
    }

    #[test]
    fn validation_error() {
        let err = CoreError::ValidationError("palette is empty".into());
        assert_eq!(err.to_string(), "Validation failed: palette is empty");
    }
}

// ═══════════════════════════════════════════════════════════════════
// From impls
// ═══════════════════════════════════════════════════════════════════

mod conversions {
    use super::*;

    #[test]
    fn from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: CoreError = json_err.into();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn from_config_not_found() {
        let err: CoreError = config::ConfigError::NotFound("port".into()).into();
        match err {
            CoreError::MissingConfig(names) => assert_eq!(names, vec!["port"]),
            other => panic!("Expected MissingConfig, got: {other:?}"),
        }
    }

    #[test]
    fn from_config_other() {
        let err: CoreError = config::ConfigError::Message("bad source".into()).into();
        match err {
            CoreError::InvalidConfig { key, message } => {
                assert_eq!(key, "environment");
                assert!(message.contains("bad source"));
            }
            other => panic!("Expected InvalidConfig, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn from_reqwest_redacts_query() {
        // Bind then drop to get a port nothing listens on.
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let reqwest_err = reqwest::Client::new()
            .get(format!(
                "http://127.0.0.1:{port}/api/analytics/chart?preset=last30Days&token=abc"
            ))
            .send()
            .await
            .unwrap_err();
        let err: CoreError = reqwest_err.into();
        match err {
            CoreError::Network(msg) => {
                assert!(!msg.contains("token=abc"));
                assert!(!msg.contains("preset=last30Days"));
            }
            other => panic!("Expected Network, got: {other:?}"),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// Trait bounds
// ═══════════════════════════════════════════════════════════════════

#[test]
fn core_error_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CoreError>();
}

#[test]
fn core_error_implements_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(CoreError::Network("x".into()));
    assert_eq!(err.to_string(), "Network error: x");
}
