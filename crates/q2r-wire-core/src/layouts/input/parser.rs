use super::layout;
use crate::layouts::common::FrameReader;
use crate::{DecodeError, InputState, RecordKind};

/// Decode a controller input frame (at least 18 bytes).
pub fn decode_input_state(frame: &[u8]) -> Result<InputState, DecodeError> {
    let reader = FrameReader::new(frame, RecordKind::InputState);
    reader.require_len(layout::MIN_LEN)?;

    Ok(InputState {
        button_upper: reader.read_bool(layout::BUTTON_UPPER_OFFSET)?,
        button_lower: reader.read_bool(layout::BUTTON_LOWER_OFFSET)?,
        axis_horizontal: reader.read_f32_le(layout::AXIS_HORIZONTAL_RANGE)?,
        axis_vertical: reader.read_f32_le(layout::AXIS_VERTICAL_RANGE)?,
        press_primary: reader.read_f32_le(layout::PRESS_PRIMARY_RANGE)?,
        press_secondary: reader.read_f32_le(layout::PRESS_SECONDARY_RANGE)?,
    })
}

/// Encode an input record into its 18-byte wire form; flags are written as
/// `0` or `1`.
pub fn encode_input_state(input: &InputState) -> [u8; layout::MIN_LEN] {
    let mut frame = [0u8; layout::MIN_LEN];
    frame[layout::BUTTON_UPPER_OFFSET] = u8::from(input.button_upper);
    frame[layout::BUTTON_LOWER_OFFSET] = u8::from(input.button_lower);
    frame[layout::AXIS_HORIZONTAL_RANGE].copy_from_slice(&input.axis_horizontal.to_le_bytes());
    frame[layout::AXIS_VERTICAL_RANGE].copy_from_slice(&input.axis_vertical.to_le_bytes());
    frame[layout::PRESS_PRIMARY_RANGE].copy_from_slice(&input.press_primary.to_le_bytes());
    frame[layout::PRESS_SECONDARY_RANGE].copy_from_slice(&input.press_secondary.to_le_bytes());
    frame
}
