//! Binary buffer writer over an auto-growing byte vector.

/// A binary buffer writer that appends data to a growable buffer.
///
/// All multi-byte writes are big-endian, matching [`crate::Reader`].
///
/// # Example
///
/// ```
/// use recast_buffers::Writer;
///
/// let mut writer = Writer::new();
/// writer.u8(0x01);
/// writer.u32(7);
/// assert_eq!(writer.flush(), vec![0x01, 0, 0, 0, 7]);
/// ```
#[derive(Default)]
pub struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    /// Creates a new empty writer.
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Creates a writer with the given initial capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Clears the buffer, keeping its allocation.
    pub fn reset(&mut self) {
        self.buf.clear();
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Writes an unsigned 8-bit integer.
    #[inline]
    pub fn u8(&mut self, val: u8) {
        self.buf.push(val);
    }

    /// Writes an unsigned 32-bit integer (big-endian).
    #[inline]
    pub fn u32(&mut self, val: u32) {
        self.buf.extend_from_slice(&val.to_be_bytes());
    }

    /// Writes a signed 64-bit integer (big-endian).
    #[inline]
    pub fn i64(&mut self, val: i64) {
        self.buf.extend_from_slice(&val.to_be_bytes());
    }

    /// Writes an unsigned 64-bit integer (big-endian).
    #[inline]
    pub fn u64(&mut self, val: u64) {
        self.buf.extend_from_slice(&val.to_be_bytes());
    }

    /// Writes a 64-bit floating point number (big-endian).
    #[inline]
    pub fn f64(&mut self, val: f64) {
        self.buf.extend_from_slice(&val.to_be_bytes());
    }

    /// Writes a string as raw UTF-8 bytes (no length prefix).
    pub fn utf8(&mut self, val: &str) {
        self.buf.extend_from_slice(val.as_bytes());
    }

    /// Writes raw bytes as-is.
    pub fn buf(&mut self, val: &[u8]) {
        self.buf.extend_from_slice(val);
    }

    /// Consumes the written bytes, leaving the writer empty.
    pub fn flush(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u8_u32() {
        let mut writer = Writer::new();
        writer.u8(0xab);
        writer.u32(0x01020304);
        assert_eq!(writer.flush(), vec![0xab, 0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn test_i64_negative() {
        let mut writer = Writer::new();
        writer.i64(-2);
        assert_eq!(
            writer.flush(),
            vec![0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe]
        );
    }

    #[test]
    fn test_utf8_and_buf() {
        let mut writer = Writer::new();
        writer.utf8("ab");
        writer.buf(&[1, 2]);
        assert_eq!(writer.flush(), vec![b'a', b'b', 1, 2]);
    }

    #[test]
    fn test_flush_resets() {
        let mut writer = Writer::new();
        writer.u8(1);
        assert_eq!(writer.flush(), vec![1]);
        assert!(writer.is_empty());
        writer.u8(2);
        assert_eq!(writer.flush(), vec![2]);
    }
}
