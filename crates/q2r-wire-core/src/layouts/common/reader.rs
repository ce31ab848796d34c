use std::ops::Range;

use crate::{DecodeError, RecordKind};

/// Bounds-checked view over one frame.
///
/// Every failed read reports `TruncatedFrame` for the record kind being
/// decoded, so parsers never index bytes directly.
pub(crate) struct FrameReader<'a> {
    frame: &'a [u8],
    kind: RecordKind,
}

impl<'a> FrameReader<'a> {
    pub fn new(frame: &'a [u8], kind: RecordKind) -> Self {
        Self { frame, kind }
    }

    pub fn require_len(&self, needed: usize) -> Result<(), DecodeError> {
        if self.frame.len() < needed {
            return Err(self.truncated(needed));
        }
        Ok(())
    }

    pub fn read_slice(&self, range: Range<usize>) -> Result<&'a [u8], DecodeError> {
        let end = range.end;
        self.frame.get(range).ok_or_else(|| self.truncated(end))
    }

    /// Reader over the bytes from `offset` to the end of the frame.
    pub fn sub_reader(&self, offset: usize) -> Result<FrameReader<'a>, DecodeError> {
        let rest = self.frame.get(offset..).ok_or_else(|| self.truncated(offset))?;
        Ok(FrameReader::new(rest, self.kind))
    }

    pub fn read_bool(&self, offset: usize) -> Result<bool, DecodeError> {
        self.frame
            .get(offset)
            .map(|byte| *byte != 0)
            .ok_or_else(|| self.truncated(offset.saturating_add(1)))
    }

    pub fn read_f32_le(&self, range: Range<usize>) -> Result<f32, DecodeError> {
        Ok(f32::from_le_bytes(self.read_array(range)?))
    }

    pub fn read_f64_le(&self, range: Range<usize>) -> Result<f64, DecodeError> {
        Ok(f64::from_le_bytes(self.read_array(range)?))
    }

    fn read_array<const N: usize>(&self, range: Range<usize>) -> Result<[u8; N], DecodeError> {
        let bytes = self.read_slice(range)?;
        bytes.try_into().map_err(|_| DecodeError::TruncatedFrame {
            kind: self.kind,
            needed: N,
            actual: bytes.len(),
        })
    }

    fn truncated(&self, needed: usize) -> DecodeError {
        DecodeError::TruncatedFrame {
            kind: self.kind,
            needed,
            actual: self.frame.len(),
        }
    }
}
