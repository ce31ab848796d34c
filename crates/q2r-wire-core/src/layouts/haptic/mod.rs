//! Haptic feedback frames: frequency then amplitude, both little-endian `f64`.

pub mod layout;
pub mod parser;

pub use parser::{decode_haptic_command, encode_haptic_command};
