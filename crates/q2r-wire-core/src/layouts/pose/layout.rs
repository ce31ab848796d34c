use std::ops::Range;

/// Prefix skipped before the pose body by default.
///
/// The sender has always emitted 16 bytes ahead of the pose; their meaning is
/// not part of this protocol revision, hence the offset stays configurable.
pub const DEFAULT_BASE_OFFSET: usize = 16;

/// Frame of reference stamped onto every decoded sample.
pub const FRAME_ID: &str = "base_link";

// Offsets relative to the base offset.
pub const POSITION_X_RANGE: Range<usize> = 0..8;
pub const POSITION_Y_RANGE: Range<usize> = 8..16;
pub const POSITION_Z_RANGE: Range<usize> = 16..24;

pub const ORIENTATION_X_RANGE: Range<usize> = 24..32;
pub const ORIENTATION_Y_RANGE: Range<usize> = 32..40;
pub const ORIENTATION_Z_RANGE: Range<usize> = 40..48;
pub const ORIENTATION_W_RANGE: Range<usize> = 48..56;

pub const BODY_LEN: usize = ORIENTATION_W_RANGE.end;

/// Minimum frame length for a pose body at `base_offset`.
pub const fn min_len(base_offset: usize) -> usize {
    base_offset.saturating_add(BODY_LEN)
}
