use std::ops::Range;

pub const FREQUENCY_RANGE: Range<usize> = 0..8;
pub const AMPLITUDE_RANGE: Range<usize> = 8..16;

pub const MIN_LEN: usize = AMPLITUDE_RANGE.end;
