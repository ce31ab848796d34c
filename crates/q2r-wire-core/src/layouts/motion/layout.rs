use std::ops::Range;

pub const LINEAR_X_RANGE: Range<usize> = 0..8;
pub const LINEAR_Y_RANGE: Range<usize> = 8..16;
pub const LINEAR_Z_RANGE: Range<usize> = 16..24;

pub const ANGULAR_X_RANGE: Range<usize> = 24..32;
pub const ANGULAR_Y_RANGE: Range<usize> = 32..40;
pub const ANGULAR_Z_RANGE: Range<usize> = 40..48;

pub const MIN_LEN: usize = ANGULAR_Z_RANGE.end;
