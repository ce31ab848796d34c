//! Motion (linear + angular velocity) frames.
//!
//! Six little-endian `f64` values: linear x, y, z followed by angular x, y, z.

pub mod layout;
pub mod parser;

pub use parser::{decode_motion, encode_motion};
