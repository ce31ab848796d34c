//! Controller input state frames.
//!
//! Two one-byte button flags followed by four little-endian `f32` values
//! (thumbstick axes, then trigger presses). Flags decode as `true` for any
//! non-zero byte.

pub mod layout;
pub mod parser;

pub use parser::{decode_input_state, encode_input_state};
