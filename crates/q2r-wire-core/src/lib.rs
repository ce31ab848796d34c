//! q2r-wire core library: decoding of headset bridge frames.
//!
//! A frame is an untyped byte buffer delivered together with the name of the
//! channel it was published on. The dispatcher maps the channel name onto a
//! [`RecordKind`], and the matching layout decoder turns the bytes into a
//! [`DecodedRecord`]. Each record kind follows a layered structure
//! (layout/reader/parser, see `layouts`); decoding is byte-oriented and free
//! of I/O. The only side effect is reading the wall clock to stamp pose
//! samples, and that goes through the injectable [`Clock`].
//!
//! Invariants:
//! - Frame length is validated before any field is read; a short frame never
//!   yields a partial record.
//! - Every field sits at a fixed offset; all multi-byte fields are
//!   little-endian.
//! - The channel routing table is static; unknown channels are reported as
//!   [`DecodeError::UnknownChannel`], distinct from malformed frames.
//!
//! # Examples
//! ```
//! use q2r_wire_core::{DecodedRecord, dispatch};
//!
//! let mut frame = Vec::new();
//! for value in [1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0] {
//!     frame.extend_from_slice(&value.to_le_bytes());
//! }
//!
//! let record = dispatch("q2r_twist", &frame)?;
//! let DecodedRecord::Motion(motion) = record else {
//!     panic!("expected a motion record");
//! };
//! assert_eq!(motion.angular.z, 6.0);
//! # Ok::<(), q2r_wire_core::DecodeError>(())
//! ```

use serde::{Deserialize, Serialize};

mod clock;
mod dispatch;
mod error;
mod layouts;

pub use clock::{Clock, FixedClock, SystemClock};
pub use dispatch::{DecodeOptions, RecordKind, dispatch, dispatch_with, routing_table};
pub use error::DecodeError;
pub use layouts::haptic::{decode_haptic_command, encode_haptic_command};
pub use layouts::input::{decode_input_state, encode_input_state};
pub use layouts::motion::{decode_motion, encode_motion};
pub use layouts::pose::{
    DEFAULT_POSE_BASE_OFFSET, POSE_FRAME_ID, decode_pose_sample, encode_pose_sample,
};

/// Three-component vector (`x`, `y`, `z`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Orientation quaternion in `x, y, z, w` order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

/// Wall-clock time split into whole seconds since the Unix epoch and the
/// nanosecond remainder.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Timestamp {
    pub sec: i64,
    /// Always below 1_000_000_000.
    pub nanosec: u32,
}

/// Linear and angular velocity command.
///
/// # Examples
/// ```
/// use q2r_wire_core::{Motion, Vector3};
///
/// let motion = Motion {
///     linear: Vector3 { x: 0.5, y: 0.0, z: 0.0 },
///     angular: Vector3::default(),
/// };
/// assert_eq!(motion.linear.x, 0.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Motion {
    pub linear: Vector3,
    pub angular: Vector3,
}

/// Stamped pose of a tracked device.
///
/// `stamp` and `frame_id` are produced by the decoder, not read from the
/// frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoseSample {
    pub stamp: Timestamp,
    /// Frame of reference label, always [`POSE_FRAME_ID`] when decoded.
    pub frame_id: String,
    pub position: Vector3,
    pub orientation: Quaternion,
}

/// Controller buttons, thumbstick and trigger state.
///
/// # Examples
/// ```
/// use q2r_wire_core::InputState;
///
/// let input = InputState {
///     button_upper: true,
///     button_lower: false,
///     axis_horizontal: 0.25,
///     axis_vertical: -1.0,
///     press_primary: 0.0,
///     press_secondary: 0.0,
/// };
/// assert!(input.button_upper);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputState {
    pub button_upper: bool,
    pub button_lower: bool,
    /// Thumbstick horizontal axis.
    pub axis_horizontal: f32,
    /// Thumbstick vertical axis.
    pub axis_vertical: f32,
    /// Index trigger press.
    pub press_primary: f32,
    /// Middle (grip) trigger press.
    pub press_secondary: f32,
}

/// Vibration request for a controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HapticCommand {
    pub frequency: f64,
    pub amplitude: f64,
}

/// Record decoded from a single frame.
///
/// Serializes internally tagged, e.g. `{"kind":"haptic_command",...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DecodedRecord {
    Motion(Motion),
    PoseSample(PoseSample),
    InputState(InputState),
    HapticCommand(HapticCommand),
}

impl DecodedRecord {
    /// Record kind of this variant.
    ///
    /// # Examples
    /// ```
    /// use q2r_wire_core::{DecodedRecord, HapticCommand, RecordKind};
    ///
    /// let record = DecodedRecord::HapticCommand(HapticCommand::default());
    /// assert_eq!(record.kind(), RecordKind::HapticCommand);
    /// ```
    pub fn kind(&self) -> RecordKind {
        match self {
            DecodedRecord::Motion(_) => RecordKind::Motion,
            DecodedRecord::PoseSample(_) => RecordKind::PoseSample,
            DecodedRecord::InputState(_) => RecordKind::InputState,
            DecodedRecord::HapticCommand(_) => RecordKind::HapticCommand,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes_with_kind_tag() {
        let record = DecodedRecord::HapticCommand(HapticCommand {
            frequency: 440.0,
            amplitude: 0.8,
        });

        let value = serde_json::to_value(&record).expect("record json");
        assert_eq!(value["kind"], "haptic_command");
        assert_eq!(value["frequency"], 440.0);
        assert_eq!(value["amplitude"], 0.8);
    }

    #[test]
    fn pose_sample_json_shape() {
        let record = DecodedRecord::PoseSample(PoseSample {
            stamp: Timestamp {
                sec: 12,
                nanosec: 34,
            },
            frame_id: POSE_FRAME_ID.to_string(),
            position: Vector3::default(),
            orientation: Quaternion {
                w: 1.0,
                ..Quaternion::default()
            },
        });

        let value = serde_json::to_value(&record).expect("record json");
        assert_eq!(value["kind"], "pose_sample");
        assert_eq!(value["stamp"]["sec"], 12);
        assert_eq!(value["stamp"]["nanosec"], 34);
        assert_eq!(value["frame_id"], "base_link");
        assert_eq!(value["orientation"]["w"], 1.0);

        let back: DecodedRecord = serde_json::from_value(value).expect("record back");
        assert_eq!(back, record);
    }

    #[test]
    fn kind_matches_variant() {
        assert_eq!(
            DecodedRecord::Motion(Motion::default()).kind(),
            RecordKind::Motion
        );
        assert_eq!(
            DecodedRecord::InputState(InputState::default()).kind(),
            RecordKind::InputState
        );
    }
}
