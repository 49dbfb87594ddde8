//! Errors from `derive_builder` builders of core types.

use wacloud_core::{ConnectionSettingsBuilderError, MediaMetadataBuilderError};

/// What went wrong while building a value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum BuilderErrorKind {
    /// A required field was never set
    #[display("missing required field '{}'", _0)]
    MissingField(String),

    /// A field was set to an unacceptable value
    #[display("invalid value: {}", _0)]
    Invalid(String),
}

/// Builder failure naming the type being built.
///
/// # Examples
///
/// ```
/// use wacloud_core::ConnectionSettings;
/// use wacloud_error::{BuilderError, BuilderErrorKind};
///
/// let err = BuilderError::from(ConnectionSettings::builder().build().unwrap_err());
/// assert_eq!(err.target(), "ConnectionSettings");
/// assert_eq!(err.kind(), &BuilderErrorKind::MissingField("token".into()));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Failed to build {}: {} at line {} in {}", target, kind, line, file)]
pub struct BuilderError {
    target: &'static str,
    kind: BuilderErrorKind,
    line: u32,
    file: &'static str,
}

impl BuilderError {
    /// Create a builder error for `target` with caller location tracking.
    #[track_caller]
    pub fn new(target: &'static str, kind: BuilderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            target,
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Name of the type that failed to build.
    pub fn target(&self) -> &'static str {
        self.target
    }

    /// Get the error kind.
    pub fn kind(&self) -> &BuilderErrorKind {
        &self.kind
    }
}

// derive_builder emits a distinct, non-exhaustive error enum per builder.
macro_rules! from_builder_error {
    ($source:ident, $target:literal) => {
        impl From<$source> for BuilderError {
            #[track_caller]
            fn from(err: $source) -> Self {
                let kind = match err {
                    $source::UninitializedField(field) => {
                        BuilderErrorKind::MissingField(field.to_string())
                    }
                    $source::ValidationError(reason) => BuilderErrorKind::Invalid(reason),
                    other => BuilderErrorKind::Invalid(other.to_string()),
                };
                Self::new($target, kind)
            }
        }
    };
}

from_builder_error!(ConnectionSettingsBuilderError, "ConnectionSettings");
from_builder_error!(MediaMetadataBuilderError, "MediaMetadata");
