//! Error types for the tonal-ramp core.

use thiserror::Error;

/// Errors produced by color parsing and palette derivation.
#[derive(Debug, Error)]
pub enum RampError {
    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A derived color could not be represented as a displayable string.
    ///
    /// Unreachable for finite inputs; seeing it means a conversion produced
    /// non-finite channels.
    #[error("internal invariant violated: {0}")]
    InvariantViolation(String),

    /// An interpolation path was built from zero keyframes.
    #[error("interpolation path requires at least 1 keyframe")]
    EmptyPath,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_color_includes_message() {
        let err = RampError::InvalidColor("bad hex".into());
        let msg = format!("{err}");
        assert!(msg.contains("bad hex"), "missing message in: {msg}");
    }

    #[test]
    fn invariant_violation_includes_message() {
        let err = RampError::InvariantViolation("label 500 is not displayable".into());
        let msg = format!("{err}");
        assert!(msg.contains("label 500"), "missing message in: {msg}");
        assert!(msg.contains("invariant"), "missing category in: {msg}");
    }

    #[test]
    fn empty_path_displays_readable_message() {
        let msg = format!("{}", RampError::EmptyPath);
        assert!(
            msg.contains("keyframe"),
            "expected message mentioning keyframes, got: {msg}"
        );
    }

    #[test]
    fn ramp_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RampError>();
    }

    #[test]
    fn ramp_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<RampError>();
    }
}
