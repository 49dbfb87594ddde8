//! Facade re-exports and tracing setup.

use std::sync::Arc;
use wacloud::{
    ConnectionSettings, MediaClient, MediaKind, MediaReference, ReqwestTransport, TracingConfig,
    WacloudConfig, init_tracing,
};

#[test]
fn test_tracing_config_directives() {
    assert_eq!(TracingConfig::default().default_directive(), "info");
    assert_eq!(TracingConfig::new(true, false).default_directive(), "debug");
    assert!(TracingConfig::new(false, true).json);
}

#[test]
fn test_init_tracing_only_once() {
    let config = TracingConfig::new(false, true);

    assert!(init_tracing(&config).is_ok());

    let err = init_tracing(&config).unwrap_err();
    assert!(err.to_string().contains("Failed to initialize tracing"));
}

#[test]
fn test_reexports_compose() {
    let settings = WacloudConfig::default()
        .with_env_from(|key| (key == "WHATSAPP_TOKEN").then(|| "t".to_string()))
        .settings()
        .unwrap();
    assert_eq!(settings, ConnectionSettings::new("t"));

    let transport = Arc::new(ReqwestTransport::new(settings).unwrap());
    let client = MediaClient::new(transport);
    assert_eq!(client.transport().settings().token(), "t");

    let reference = MediaReference::identifier(MediaKind::Image, "m1");
    assert_eq!(reference.to_inline().file(), "m1");
}
