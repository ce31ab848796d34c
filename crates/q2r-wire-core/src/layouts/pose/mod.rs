//! Stamped pose frames.
//!
//! The pose body (seven little-endian `f64`: position x, y, z then
//! orientation x, y, z, w) starts at a configurable base offset; the bytes
//! before it are skipped unread. The decoder stamps each sample from a
//! [`Clock`](crate::Clock) and labels it with [`POSE_FRAME_ID`].

pub mod layout;
pub mod parser;

pub use layout::{DEFAULT_BASE_OFFSET as DEFAULT_POSE_BASE_OFFSET, FRAME_ID as POSE_FRAME_ID};
pub use parser::{decode_pose_sample, encode_pose_sample};
