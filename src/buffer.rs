//! # Command Buffer
//!
//! Append-only byte storage that the encoder writes every command into.
//! It knows nothing about the protocol: bytes go in, in call order, and a
//! snapshot comes out.

/// Growable, append-only byte buffer.
///
/// Backed by a `Vec<u8>`, so appends are amortized O(1) per byte.
///
/// ## Example
///
/// ```
/// use uriage::buffer::CommandBuffer;
///
/// let mut buf = CommandBuffer::new();
/// buf.append(&[0x1B, 0x40]);
/// buf.push(0x0A);
///
/// let first = buf.snapshot();
/// buf.push(0x0A);
///
/// assert_eq!(first, vec![0x1B, 0x40, 0x0A]);
/// assert_eq!(buf.len(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CommandBuffer {
    bytes: Vec<u8>,
}

impl CommandBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty buffer with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
        }
    }

    /// Append `bytes` verbatim. Empty slices are allowed.
    #[inline]
    pub fn append(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }

    /// Append a single byte.
    #[inline]
    pub fn push(&mut self, byte: u8) {
        self.bytes.push(byte);
    }

    /// Copy out everything appended so far.
    ///
    /// The returned vector is independent of the buffer; later appends do
    /// not show up in it.
    pub fn snapshot(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    /// Consume the buffer and return its bytes without copying.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Borrow the accumulated bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_is_empty() {
        let buf = CommandBuffer::new();
        assert!(buf.is_empty());
        assert_eq!(buf.snapshot(), Vec::<u8>::new());
    }

    #[test]
    fn test_append_preserves_order() {
        let mut buf = CommandBuffer::new();
        buf.append(&[1, 2]);
        buf.append(&[]);
        buf.push(3);
        buf.append(&[4, 5, 6]);
        assert_eq!(buf.as_bytes(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_snapshot_is_idempotent() {
        let mut buf = CommandBuffer::new();
        buf.append(b"abc");
        assert_eq!(buf.snapshot(), buf.snapshot());
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut buf = CommandBuffer::new();
        buf.append(b"abc");
        let snap = buf.snapshot();
        buf.append(b"def");
        assert_eq!(snap, b"abc".to_vec());
        assert_eq!(buf.into_bytes(), b"abcdef".to_vec());
    }

    #[test]
    fn test_many_single_byte_appends() {
        let mut buf = CommandBuffer::with_capacity(4);
        for i in 0..10_000u32 {
            buf.push((i % 256) as u8);
        }
        assert_eq!(buf.len(), 10_000);
        assert_eq!(buf.as_bytes()[257], 1);
    }
}
