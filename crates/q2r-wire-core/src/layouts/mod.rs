//! Record layout decoders.
//!
//! Each record kind follows a layered structure:
//! - `layout`: byte offsets, widths and minimum lengths (source of truth)
//! - `common::reader`: bounds-checked little-endian reads
//! - `parser`: domain-level decoding and encoding (no direct byte indexing)
//!
//! Parsers are pure: the minimum length is checked before any field is read,
//! and decoded values are passed through without range checks.

pub(crate) mod common;
pub mod haptic;
pub mod input;
pub mod motion;
pub mod pose;
