#![no_std]

extern crate alloc;
#[cfg(any(test, feature = "std"))]
extern crate std;

mod buffer;
mod error;
#[cfg(feature = "std")]
mod io;
mod write;
mod writer;

pub use self::buffer::OutBuffer;
pub use self::error::{Error, Result};
pub use self::writer::UnsafeWriter;

/// A value with a fixed wire encoding.
///
/// Integers wider than one byte are encoded big-endian. Floats keep the
/// host's native byte order. Byte spans and text are copied verbatim.
pub trait Write {
    /// # Safety
    ///
    /// Must write [`len_s`] bytes exactly.
    ///
    /// [`len_s`]: Write::len_s
    unsafe fn write(&self, w: &mut UnsafeWriter);

    fn len_s(&self) -> usize;
}

/// # Safety
///
/// `ptr` must be valid for writes of [`len_s`] bytes.
///
/// [`len_s`]: Write::len_s
#[inline]
pub unsafe fn write_unchecked(ptr: *mut u8, x: &(impl Write + ?Sized)) {
    unsafe {
        let mut w = UnsafeWriter::new(ptr);
        Write::write(x, &mut w);
        debug_assert_eq!(w.ptr(), ptr.add(x.len_s()));
    }
}

#[cold]
pub(crate) const fn cold_path() {}
