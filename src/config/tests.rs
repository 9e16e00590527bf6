use super::*;
use serial_test::serial;
use std::env;
use std::time::Duration;

fn with_env_vars<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, value) in vars {
        unsafe { env::set_var(key, value) };
    }

    let result = f();

    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, _) in vars {
        unsafe { env::remove_var(key) };
    }

    result
}

fn clear_weave_env() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe {
        env::remove_var("WEAVE_HOST");
        env::remove_var("WEAVE_HTTP_PORT");
        env::remove_var("WEAVE_GRPC_PORT");
        env::remove_var("WEAVE_API_KEY");
        env::remove_var("WEAVE_TIMEOUT_SECS");
    }
}

#[test]
fn test_default_config() {
    let config = ClientConfig::default();

    assert_eq!(config.host, "localhost");
    assert_eq!(config.http_port, 8080);
    assert_eq!(config.grpc_port, 50051);
    assert!(config.api_key.is_none());
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.validate().is_ok());
}

#[test]
fn test_endpoints() {
    let config = ClientConfig::with_host("weaviate.internal");
    assert_eq!(config.grpc_endpoint(), "http://weaviate.internal:50051");
    assert_eq!(config.http_endpoint(), "http://weaviate.internal:8080");
}

#[test]
fn test_validate_rejects_empty_host() {
    let config = ClientConfig::with_host("  ");
    assert!(matches!(config.validate(), Err(ConfigError::EmptyHost)));
}

#[test]
fn test_validate_rejects_zero_timeout() {
    let config = ClientConfig {
        timeout: Duration::ZERO,
        ..Default::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidTimeout { .. })
    ));
}

#[test]
#[serial]
fn test_from_env_with_defaults() {
    clear_weave_env();

    let config = ClientConfig::from_env().expect("should parse with defaults");
    assert_eq!(config, ClientConfig::default());
}

#[test]
#[serial]
fn test_from_env_overrides() {
    clear_weave_env();

    with_env_vars(
        &[
            ("WEAVE_HOST", "10.0.0.5"),
            ("WEAVE_HTTP_PORT", "9090"),
            ("WEAVE_GRPC_PORT", "50052"),
            ("WEAVE_API_KEY", "secret"),
            ("WEAVE_TIMEOUT_SECS", "5"),
        ],
        || {
            let config = ClientConfig::from_env().expect("should parse");

            assert_eq!(config.host, "10.0.0.5");
            assert_eq!(config.http_port, 9090);
            assert_eq!(config.grpc_port, 50052);
            assert_eq!(config.api_key.as_deref(), Some("secret"));
            assert_eq!(config.timeout, Duration::from_secs(5));
        },
    );
}

#[test]
#[serial]
fn test_blank_api_key_is_none() {
    clear_weave_env();

    with_env_vars(&[("WEAVE_API_KEY", "   ")], || {
        let config = ClientConfig::from_env().expect("should parse");
        assert!(config.api_key.is_none());
    });
}

#[test]
#[serial]
fn test_invalid_port_zero() {
    clear_weave_env();

    with_env_vars(&[("WEAVE_GRPC_PORT", "0")], || {
        let err = ClientConfig::from_env().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidPort {
                name: "WEAVE_GRPC_PORT",
                ..
            }
        ));
        assert!(err.to_string().contains("invalid WEAVE_GRPC_PORT"));
    });
}

#[test]
#[serial]
fn test_invalid_port_not_number() {
    clear_weave_env();

    with_env_vars(&[("WEAVE_HTTP_PORT", "not_a_port")], || {
        let err = ClientConfig::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::PortParseError { .. }));
        assert!(err.to_string().contains("failed to parse WEAVE_HTTP_PORT"));
    });
}

#[test]
#[serial]
fn test_invalid_port_too_large() {
    clear_weave_env();

    with_env_vars(&[("WEAVE_GRPC_PORT", "99999")], || {
        let err = ClientConfig::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::PortParseError { .. }));
    });
}

#[test]
#[serial]
fn test_invalid_timeout() {
    clear_weave_env();

    with_env_vars(&[("WEAVE_TIMEOUT_SECS", "soon")], || {
        let err = ClientConfig::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::TimeoutParseError { .. }));
    });

    with_env_vars(&[("WEAVE_TIMEOUT_SECS", "0")], || {
        let err = ClientConfig::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTimeout { .. }));
    });
}
