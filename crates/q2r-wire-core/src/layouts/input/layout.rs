use std::ops::Range;

pub const BUTTON_UPPER_OFFSET: usize = 0;
pub const BUTTON_LOWER_OFFSET: usize = 1;

pub const AXIS_HORIZONTAL_RANGE: Range<usize> = 2..6;
pub const AXIS_VERTICAL_RANGE: Range<usize> = 6..10;
pub const PRESS_PRIMARY_RANGE: Range<usize> = 10..14;
pub const PRESS_SECONDARY_RANGE: Range<usize> = 14..18;

pub const MIN_LEN: usize = PRESS_SECONDARY_RANGE.end;
