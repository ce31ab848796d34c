use thiserror::Error;

use crate::RecordKind;

/// Errors returned by frame decoding and channel dispatch.
///
/// # Examples
/// ```
/// use q2r_wire_core::{DecodeError, decode_haptic_command};
///
/// let err = decode_haptic_command(&[0u8; 15]).unwrap_err();
/// assert!(matches!(err, DecodeError::TruncatedFrame { needed: 16, actual: 15, .. }));
/// assert!(!err.is_unknown_channel());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("truncated {kind} frame: need {needed} bytes, got {actual}")]
    TruncatedFrame {
        kind: RecordKind,
        needed: usize,
        actual: usize,
    },
    #[error("unknown channel '{channel}'")]
    UnknownChannel { channel: String },
}

impl DecodeError {
    /// True when the channel had no route, as opposed to a malformed frame.
    ///
    /// Callers typically drop or log such frames and carry on.
    pub fn is_unknown_channel(&self) -> bool {
        matches!(self, DecodeError::UnknownChannel { .. })
    }
}
