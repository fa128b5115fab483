use crate::error::{EnvelopeError, Result};

/// Length prefixes are single signed bytes on the wire
pub(super) const MAX_FIELD_LEN: usize = i8::MAX as usize;

/// Serializes an envelope field by field, starting with the version byte.
pub(super) struct EnvelopeWriter {
    buffer: Vec<u8>,
}

impl EnvelopeWriter {
    pub fn new(version: u8, capacity: usize) -> Self {
        let mut buffer = Vec::with_capacity(capacity + 1);
        buffer.push(version);

        Self { buffer }
    }

    /// Appends `field` prefixed with its length.
    /// Returns `None` and leaves the envelope untouched if the length exceeds [`MAX_FIELD_LEN`].
    pub fn put_length_prefixed(&mut self, field: &[u8]) -> Option<&mut Self> {
        if field.len() > MAX_FIELD_LEN {
            return None;
        }
        // checked above, the length fits
        self.buffer.push(field.len() as u8);
        self.buffer.extend_from_slice(field);

        Some(self)
    }

    /// Appends the rest of the envelope without any prefix.
    pub fn put(&mut self, tail: &[u8]) -> &mut Self {
        self.buffer.extend_from_slice(tail);
        self
    }

    pub fn finish(self) -> Vec<u8> {
        self.buffer
    }
}

/// Reads envelope fields in order. Every read past the end fails with
/// [`EnvelopeError::TruncatedEnvelope`].
pub(super) struct EnvelopeReader<'buf> {
    data: &'buf [u8],
    position: usize,
}

impl<'buf> EnvelopeReader<'buf> {
    pub fn new(data: &'buf [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Reads the version byte and compares it with `expected`.
    pub fn read_version(&mut self, expected: u8) -> Result<u8> {
        let found = self.read_byte()?;
        if found != expected {
            log::debug!("Envelope has version {found}, expected {expected}");
            return Err(EnvelopeError::VersionMismatch { expected, found });
        }

        Ok(found)
    }

    pub fn read_byte(&mut self) -> Result<u8> {
        Ok(self.read_bytes(1)?[0])
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&'buf [u8]> {
        let end = self.position + len;
        let bytes = self.data.get(self.position..end).ok_or_else(|| {
            log::debug!(
                "Envelope of {} bytes ends before reading {len} bytes at offset {}",
                self.data.len(),
                self.position
            );
            EnvelopeError::TruncatedEnvelope(self.data.len())
        })?;
        self.position = end;

        Ok(bytes)
    }

    /// Consumes everything not read so far.
    pub fn remaining(&mut self) -> &'buf [u8] {
        let rest = &self.data[self.position..];
        self.position = self.data.len();
        rest
    }
}
