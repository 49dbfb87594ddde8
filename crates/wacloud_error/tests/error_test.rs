use wacloud_core::{ConnectionSettings, ErrorDetail, ErrorEnvelope, MediaMetadata};
use wacloud_error::{
    ApiError, BuilderError, BuilderErrorKind, ConfigError, RetryableError, StatusError,
    StatusOperation, TransportError, TransportErrorKind, WacloudError, WacloudErrorKind,
    WacloudResult,
};

#[test]
fn api_error_renders_envelope_message() {
    let envelope = ErrorEnvelope::new(ErrorDetail::new("Not found", 100));
    let err: WacloudError = ApiError::new(404, envelope).into();

    assert_eq!(err.to_string(), "Not found");
    assert_eq!(err.status(), Some(404));
    let api = err.api_error().unwrap();
    assert_eq!(api.code(), 100);
    assert_eq!(api.subcode(), 0);
    assert_eq!(api.trace_id(), "");
}

#[test]
fn undecodable_body_keeps_status() {
    let err: WacloudError = ApiError::new(502, ErrorEnvelope::default()).into();
    assert_eq!(err.to_string(), "");
    assert_eq!(err.status(), Some(502));
    assert!(err.is_retryable());
}

#[test]
fn status_error_mentions_code() {
    let err: WacloudError = StatusError::new(StatusOperation::Delete, 400).into();
    let rendered = err.to_string();
    assert!(rendered.contains("failed to delete media: HTTP 400"));
    assert_eq!(err.status(), Some(400));
    assert!(!err.is_retryable());

    let err = StatusError::new(StatusOperation::Download, 404);
    assert!(err.to_string().contains("failed to download media: HTTP 404"));
}

#[test]
fn transport_errors_have_no_status() {
    let err: WacloudError =
        TransportError::new(TransportErrorKind::Connect("dns error".into())).into();
    assert_eq!(err.status(), None);
    assert!(err.is_retryable());
    assert!(matches!(err.kind(), WacloudErrorKind::Transport(_)));

    let err: WacloudError = TransportError::new(TransportErrorKind::InvalidUrl {
        url: "not a url".into(),
        reason: "relative URL without a base".into(),
    })
    .into();
    assert!(!err.is_retryable());
    assert!(err.to_string().contains("not a url"));
}

#[test]
fn errors_track_caller_location() {
    let err = ConfigError::new("bad");
    assert!(err.file.ends_with("error_test.rs"));
    assert!(err.line > 0);
}

#[test]
fn builder_error_from_missing_field() {
    let err: BuilderError = ConnectionSettings::builder().build().unwrap_err().into();

    assert_eq!(err.target(), "ConnectionSettings");
    assert_eq!(err.kind(), &BuilderErrorKind::MissingField("token".to_string()));
    assert!(err.to_string().contains("Failed to build ConnectionSettings"));
}

fn build_settings() -> WacloudResult<ConnectionSettings> {
    let settings = ConnectionSettings::builder()
        .base_uri("http://localhost")
        .build()
        .map_err(BuilderError::from)?;
    Ok(settings)
}

fn build_metadata() -> WacloudResult<MediaMetadata> {
    let metadata = MediaMetadata::builder()
        .url("https://x/y")
        .mime_type("image/png")
        .build()
        .map_err(BuilderError::from)?;
    Ok(metadata)
}

#[test]
fn builder_error_propagates_as_builder_kind() {
    let err = build_settings().unwrap_err();
    match err.kind() {
        WacloudErrorKind::Builder(e) => assert_eq!(e.target(), "ConnectionSettings"),
        other => panic!("expected builder error, got {:?}", other),
    }
    assert_eq!(err.status(), None);

    let err = build_metadata().unwrap_err();
    match err.kind() {
        WacloudErrorKind::Builder(e) => {
            assert_eq!(e.target(), "MediaMetadata");
            assert_eq!(e.kind(), &BuilderErrorKind::MissingField("id".to_string()));
        }
        other => panic!("expected builder error, got {:?}", other),
    }
}
