use super::layout;
use crate::layouts::common::FrameReader;
use crate::{DecodeError, Motion, RecordKind, Vector3};

/// Decode a motion frame.
///
/// Requires at least 48 bytes; trailing bytes are ignored.
///
/// # Examples
/// ```
/// use q2r_wire_core::decode_motion;
///
/// let frame = [0u8; 48];
/// let motion = decode_motion(&frame)?;
/// assert_eq!(motion.linear.x, 0.0);
/// # Ok::<(), q2r_wire_core::DecodeError>(())
/// ```
pub fn decode_motion(frame: &[u8]) -> Result<Motion, DecodeError> {
    let reader = FrameReader::new(frame, RecordKind::Motion);
    reader.require_len(layout::MIN_LEN)?;

    let linear = Vector3 {
        x: reader.read_f64_le(layout::LINEAR_X_RANGE)?,
        y: reader.read_f64_le(layout::LINEAR_Y_RANGE)?,
        z: reader.read_f64_le(layout::LINEAR_Z_RANGE)?,
    };
    let angular = Vector3 {
        x: reader.read_f64_le(layout::ANGULAR_X_RANGE)?,
        y: reader.read_f64_le(layout::ANGULAR_Y_RANGE)?,
        z: reader.read_f64_le(layout::ANGULAR_Z_RANGE)?,
    };

    Ok(Motion { linear, angular })
}

/// Encode a motion record into its 48-byte wire form.
pub fn encode_motion(motion: &Motion) -> [u8; layout::MIN_LEN] {
    let mut frame = [0u8; layout::MIN_LEN];
    frame[layout::LINEAR_X_RANGE].copy_from_slice(&motion.linear.x.to_le_bytes());
    frame[layout::LINEAR_Y_RANGE].copy_from_slice(&motion.linear.y.to_le_bytes());
    frame[layout::LINEAR_Z_RANGE].copy_from_slice(&motion.linear.z.to_le_bytes());
    frame[layout::ANGULAR_X_RANGE].copy_from_slice(&motion.angular.x.to_le_bytes());
    frame[layout::ANGULAR_Y_RANGE].copy_from_slice(&motion.angular.y.to_le_bytes());
    frame[layout::ANGULAR_Z_RANGE].copy_from_slice(&motion.angular.z.to_le_bytes());
    frame
}
