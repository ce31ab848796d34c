use super::layout;
use crate::layouts::common::FrameReader;
use crate::{DecodeError, HapticCommand, RecordKind};

/// Decode a haptic feedback frame (at least 16 bytes).
///
/// # Examples
/// ```
/// use q2r_wire_core::decode_haptic_command;
///
/// let mut frame = 440.0f64.to_le_bytes().to_vec();
/// frame.extend_from_slice(&0.8f64.to_le_bytes());
///
/// let haptic = decode_haptic_command(&frame)?;
/// assert_eq!(haptic.frequency, 440.0);
/// # Ok::<(), q2r_wire_core::DecodeError>(())
/// ```
pub fn decode_haptic_command(frame: &[u8]) -> Result<HapticCommand, DecodeError> {
    let reader = FrameReader::new(frame, RecordKind::HapticCommand);
    reader.require_len(layout::MIN_LEN)?;

    Ok(HapticCommand {
        frequency: reader.read_f64_le(layout::FREQUENCY_RANGE)?,
        amplitude: reader.read_f64_le(layout::AMPLITUDE_RANGE)?,
    })
}

pub fn encode_haptic_command(haptic: &HapticCommand) -> [u8; layout::MIN_LEN] {
    let mut frame = [0u8; layout::MIN_LEN];
    frame[layout::FREQUENCY_RANGE].copy_from_slice(&haptic.frequency.to_le_bytes());
    frame[layout::AMPLITUDE_RANGE].copy_from_slice(&haptic.amplitude.to_le_bytes());
    frame
}

#[cfg(test)]
mod tests {
    use super::{decode_haptic_command, encode_haptic_command};
    use crate::layouts::haptic::layout;
    use crate::{DecodeError, HapticCommand, RecordKind};

    #[test]
    fn parse_valid_haptic() {
        let command = HapticCommand {
            frequency: 440.0,
            amplitude: 0.8,
        };
        let frame = encode_haptic_command(&command);

        let parsed = decode_haptic_command(&frame).unwrap();
        assert_eq!(parsed.frequency, 440.0);
        assert_eq!(parsed.amplitude, 0.8);
    }

    #[test]
    fn parse_short_payload() {
        let frame = [0u8; 15];
        let err = decode_haptic_command(&frame).unwrap_err();
        assert_eq!(
            err,
            DecodeError::TruncatedFrame {
                kind: RecordKind::HapticCommand,
                needed: layout::MIN_LEN,
                actual: 15,
            }
        );
    }

    #[test]
    fn parse_empty_payload() {
        let err = decode_haptic_command(&[]).unwrap_err();
        assert!(matches!(err, DecodeError::TruncatedFrame { actual: 0, .. }));
    }
}
