use super::layout;
use crate::layouts::common::FrameReader;
use crate::{Clock, DecodeError, PoseSample, Quaternion, RecordKind, Vector3};

/// Decode a pose frame whose body starts at `base_offset`.
///
/// Requires at least `base_offset + 56` bytes. The sample is stamped with
/// `clock.now()` and labelled [`POSE_FRAME_ID`](crate::POSE_FRAME_ID); the
/// clock is only read once the frame has passed the length check.
///
/// # Examples
/// ```
/// use q2r_wire_core::{DEFAULT_POSE_BASE_OFFSET, FixedClock, Timestamp, decode_pose_sample};
///
/// let mut frame = vec![0u8; DEFAULT_POSE_BASE_OFFSET + 56];
/// frame[DEFAULT_POSE_BASE_OFFSET + 48..].copy_from_slice(&1.0f64.to_le_bytes());
///
/// let clock = FixedClock(Timestamp { sec: 1, nanosec: 0 });
/// let pose = decode_pose_sample(&frame, DEFAULT_POSE_BASE_OFFSET, &clock)?;
/// assert_eq!(pose.orientation.w, 1.0);
/// assert_eq!(pose.frame_id, "base_link");
/// # Ok::<(), q2r_wire_core::DecodeError>(())
/// ```
pub fn decode_pose_sample<C: Clock + ?Sized>(
    frame: &[u8],
    base_offset: usize,
    clock: &C,
) -> Result<PoseSample, DecodeError> {
    let reader = FrameReader::new(frame, RecordKind::PoseSample);
    reader.require_len(layout::min_len(base_offset))?;
    let body = reader.sub_reader(base_offset)?;

    let position = Vector3 {
        x: body.read_f64_le(layout::POSITION_X_RANGE)?,
        y: body.read_f64_le(layout::POSITION_Y_RANGE)?,
        z: body.read_f64_le(layout::POSITION_Z_RANGE)?,
    };
    let orientation = Quaternion {
        x: body.read_f64_le(layout::ORIENTATION_X_RANGE)?,
        y: body.read_f64_le(layout::ORIENTATION_Y_RANGE)?,
        z: body.read_f64_le(layout::ORIENTATION_Z_RANGE)?,
        w: body.read_f64_le(layout::ORIENTATION_W_RANGE)?,
    };

    Ok(PoseSample {
        stamp: clock.now(),
        frame_id: layout::FRAME_ID.to_string(),
        position,
        orientation,
    })
}

/// Encode the position and orientation of `pose` behind a zero-filled
/// prefix of `base_offset` bytes. The stamp and frame label are not part of
/// the wire form.
pub fn encode_pose_sample(pose: &PoseSample, base_offset: usize) -> Vec<u8> {
    let mut frame = vec![0u8; base_offset + layout::BODY_LEN];
    let body = &mut frame[base_offset..];
    body[layout::POSITION_X_RANGE].copy_from_slice(&pose.position.x.to_le_bytes());
    body[layout::POSITION_Y_RANGE].copy_from_slice(&pose.position.y.to_le_bytes());
    body[layout::POSITION_Z_RANGE].copy_from_slice(&pose.position.z.to_le_bytes());
    body[layout::ORIENTATION_X_RANGE].copy_from_slice(&pose.orientation.x.to_le_bytes());
    body[layout::ORIENTATION_Y_RANGE].copy_from_slice(&pose.orientation.y.to_le_bytes());
    body[layout::ORIENTATION_Z_RANGE].copy_from_slice(&pose.orientation.z.to_le_bytes());
    body[layout::ORIENTATION_W_RANGE].copy_from_slice(&pose.orientation.w.to_le_bytes());
    frame
}
