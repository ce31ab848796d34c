//! Channel routing.
//!
//! Channel names are matched exactly (case-sensitive) against a static
//! table. A known name resolves to a [`RecordKind`], which selects the layout
//! decoder; anything else is reported as [`DecodeError::UnknownChannel`].

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::layouts::{haptic, input, motion, pose};
use crate::{Clock, DecodeError, DecodedRecord, SystemClock};

const MOTION_CHANNELS: &[&str] = &[
    "q2r_right_hand_twist",
    "q2r_left_hand_twist",
    "dice_twist",
    "q2r_twist",
];
const POSE_CHANNELS: &[&str] = &["q2r_right_hand_pose", "q2r_left_hand_pose"];
const INPUT_CHANNELS: &[&str] = &["q2r_right_hand_inputs", "q2r_left_hand_inputs"];
const HAPTIC_CHANNELS: &[&str] = &[
    "q2r_right_hand_haptic_feedback",
    "q2r_left_hand_haptic_feedback",
];

/// Kind of record carried by a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Motion,
    PoseSample,
    InputState,
    HapticCommand,
}

impl RecordKind {
    pub const ALL: [RecordKind; 4] = [
        RecordKind::Motion,
        RecordKind::PoseSample,
        RecordKind::InputState,
        RecordKind::HapticCommand,
    ];

    /// Resolve a channel name; `None` for channels without a route.
    ///
    /// # Examples
    /// ```
    /// use q2r_wire_core::RecordKind;
    ///
    /// assert_eq!(RecordKind::from_channel("dice_twist"), Some(RecordKind::Motion));
    /// assert_eq!(RecordKind::from_channel("Dice_Twist"), None);
    /// ```
    pub fn from_channel(channel: &str) -> Option<RecordKind> {
        match channel {
            "q2r_right_hand_twist" | "q2r_left_hand_twist" | "dice_twist" | "q2r_twist" => {
                Some(RecordKind::Motion)
            }
            "q2r_right_hand_pose" | "q2r_left_hand_pose" => Some(RecordKind::PoseSample),
            "q2r_right_hand_inputs" | "q2r_left_hand_inputs" => Some(RecordKind::InputState),
            "q2r_right_hand_haptic_feedback" | "q2r_left_hand_haptic_feedback" => {
                Some(RecordKind::HapticCommand)
            }
            _ => None,
        }
    }

    /// Channel names routed to this kind.
    pub fn channels(self) -> &'static [&'static str] {
        match self {
            RecordKind::Motion => MOTION_CHANNELS,
            RecordKind::PoseSample => POSE_CHANNELS,
            RecordKind::InputState => INPUT_CHANNELS,
            RecordKind::HapticCommand => HAPTIC_CHANNELS,
        }
    }

    /// Smallest frame this kind decodes from under `options`.
    pub fn min_frame_len(self, options: &DecodeOptions) -> usize {
        match self {
            RecordKind::Motion => motion::layout::MIN_LEN,
            RecordKind::PoseSample => pose::layout::min_len(options.pose_base_offset),
            RecordKind::InputState => input::layout::MIN_LEN,
            RecordKind::HapticCommand => haptic::layout::MIN_LEN,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RecordKind::Motion => "motion",
            RecordKind::PoseSample => "pose_sample",
            RecordKind::InputState => "input_state",
            RecordKind::HapticCommand => "haptic_command",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Every `(channel, kind)` route, grouped by kind.
///
/// # Examples
/// ```
/// use q2r_wire_core::{RecordKind, routing_table};
///
/// let pose_routes = routing_table()
///     .filter(|(_, kind)| *kind == RecordKind::PoseSample)
///     .count();
/// assert_eq!(pose_routes, 2);
/// ```
pub fn routing_table() -> impl Iterator<Item = (&'static str, RecordKind)> {
    RecordKind::ALL
        .into_iter()
        .flat_map(|kind| kind.channels().iter().map(move |channel| (*channel, kind)))
}

/// Decoder settings that may differ between deployments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    /// Offset of the pose body within pose frames.
    pub pose_base_offset: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            pose_base_offset: pose::layout::DEFAULT_BASE_OFFSET,
        }
    }
}

/// Decode `frame` according to the record kind routed from `channel`, with
/// default options and the system clock.
pub fn dispatch(channel: &str, frame: &[u8]) -> Result<DecodedRecord, DecodeError> {
    dispatch_with(channel, frame, &DecodeOptions::default(), &SystemClock)
}

/// Decode `frame` for `channel` with explicit options and time source.
///
/// Unknown channels are logged at `warn` and returned as
/// [`DecodeError::UnknownChannel`] without inspecting the frame.
///
/// # Examples
/// ```
/// use q2r_wire_core::{DecodeOptions, DecodedRecord, FixedClock, Timestamp, dispatch_with};
///
/// let options = DecodeOptions { pose_base_offset: 0 };
/// let clock = FixedClock(Timestamp { sec: 5, nanosec: 0 });
/// let frame = [0u8; 56];
///
/// let record = dispatch_with("q2r_left_hand_pose", &frame, &options, &clock)?;
/// let DecodedRecord::PoseSample(pose) = record else {
///     panic!("expected a pose sample");
/// };
/// assert_eq!(pose.stamp.sec, 5);
/// # Ok::<(), q2r_wire_core::DecodeError>(())
/// ```
pub fn dispatch_with<C: Clock + ?Sized>(
    channel: &str,
    frame: &[u8],
    options: &DecodeOptions,
    clock: &C,
) -> Result<DecodedRecord, DecodeError> {
    let Some(kind) = RecordKind::from_channel(channel) else {
        warn!(channel, frame_len = frame.len(), "unknown channel, frame not decoded");
        return Err(DecodeError::UnknownChannel {
            channel: channel.to_string(),
        });
    };

    let record = match kind {
        RecordKind::Motion => DecodedRecord::Motion(motion::decode_motion(frame)?),
        RecordKind::PoseSample => DecodedRecord::PoseSample(pose::decode_pose_sample(
            frame,
            options.pose_base_offset,
            clock,
        )?),
        RecordKind::InputState => DecodedRecord::InputState(input::decode_input_state(frame)?),
        RecordKind::HapticCommand => {
            DecodedRecord::HapticCommand(haptic::decode_haptic_command(frame)?)
        }
    };
    trace!(channel, %kind, frame_len = frame.len(), "frame decoded");
    Ok(record)
}
