use crate::OutBuffer;
use std::io;

impl io::Write for OutBuffer {
    /// Copies as many bytes as fit. Returns `Ok(0)` once the buffer is full,
    /// which `write_all` reports as [`io::ErrorKind::WriteZero`].
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = buf.len().min(self.remaining());
        unsafe {
            self.add_unchecked(buf.get_unchecked(..n));
        }
        Ok(n)
    }

    #[inline]
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
