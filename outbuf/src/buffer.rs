use crate::{cold_path, write_unchecked, Error, Result, Write};
use alloc::boxed::Box;
use alloc::vec::Vec;
use core::alloc::Layout;
use core::fmt;

/// Fixed-capacity, append-only output buffer.
///
/// Storage is allocated once by [`new`] or [`try_new`] and never grows.
/// Every [`add`] appends the value's wire encoding at the cursor; nothing
/// already written is ever removed or rewritten.
///
/// Moving an `OutBuffer` is an ordinary Rust move. [`take`] moves the
/// storage out through a `&mut` and leaves an empty buffer of capacity 0
/// behind, which refuses every non-empty append.
///
/// [`new`]: OutBuffer::new
/// [`try_new`]: OutBuffer::try_new
/// [`add`]: OutBuffer::add
/// [`take`]: OutBuffer::take
pub struct OutBuffer {
    buf: Box<[u8]>,
    len: usize,
}

impl OutBuffer {
    /// Allocates `capacity` bytes. Aborts on allocation failure, as `Vec` does.
    pub fn new(capacity: u32) -> Self {
        Self {
            buf: alloc::vec![0; capacity as usize].into_boxed_slice(),
            len: 0,
        }
    }

    /// Allocates `capacity` zeroed bytes, returning [`Error::Alloc`] when the
    /// allocator refuses. Pages are not touched until written.
    pub fn try_new(capacity: u32) -> Result<Self> {
        match zeroed(capacity as usize) {
            Some(buf) => Ok(Self { buf, len: 0 }),
            None => {
                cold_path();
                log::error!("failed to allocate output buffer of {capacity} bytes");
                Err(Error::Alloc { capacity })
            }
        }
    }

    /// The bytes written so far.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    #[inline]
    pub const fn size(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends the encoding of `x`.
    ///
    /// Fails with [`Error::Overflow`] when `x` does not fit in the remaining
    /// capacity. A refused append writes nothing.
    #[inline]
    pub fn add<T: Write + ?Sized>(&mut self, x: &T) -> Result<()> {
        let needed = x.len_s();
        let remaining = self.remaining();
        if needed > remaining {
            cold_path();
            log::debug!("refused append of {needed} bytes, {remaining} remaining");
            return Err(Error::Overflow { needed, remaining });
        }
        unsafe {
            self.add_unchecked(x);
        }
        Ok(())
    }

    /// Appends the encoding of `x` without a capacity check.
    ///
    /// # Safety
    ///
    /// `x.len_s()` must not exceed [`remaining`].
    ///
    /// [`remaining`]: OutBuffer::remaining
    #[inline]
    pub unsafe fn add_unchecked<T: Write + ?Sized>(&mut self, x: &T) {
        let n = x.len_s();
        debug_assert!(n <= self.remaining());
        unsafe {
            write_unchecked(self.buf.as_mut_ptr().add(self.len), x);
        }
        self.len += n;
    }

    /// Moves the storage into a new buffer, leaving `self` with capacity 0.
    pub fn take(&mut self) -> Self {
        log::trace!(
            "transferring output buffer, size {} capacity {}",
            self.len,
            self.buf.len()
        );
        core::mem::take(self)
    }

    /// The written bytes, without the unused tail.
    pub fn into_vec(self) -> Vec<u8> {
        let Self { buf, len } = self;
        let mut v = buf.into_vec();
        v.truncate(len);
        v
    }
}

fn zeroed(len: usize) -> Option<Box<[u8]>> {
    if len == 0 {
        return Some(Box::default());
    }
    let layout = Layout::array::<u8>(len).ok()?;
    unsafe {
        let ptr = alloc::alloc::alloc_zeroed(layout);
        if ptr.is_null() {
            return None;
        }
        Some(Box::from_raw(core::ptr::slice_from_raw_parts_mut(ptr, len)))
    }
}

impl Default for OutBuffer {
    #[inline]
    fn default() -> Self {
        Self {
            buf: Box::default(),
            len: 0,
        }
    }
}

impl Clone for OutBuffer {
    fn clone(&self) -> Self {
        let mut buf = alloc::vec![0; self.buf.len()].into_boxed_slice();
        buf[..self.len].copy_from_slice(self.data());
        Self { buf, len: self.len }
    }
}

impl AsRef<[u8]> for OutBuffer {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.data()
    }
}

impl fmt::Debug for OutBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutBuffer")
            .field("size", &self.len)
            .field("capacity", &self.buf.len())
            .finish()
    }
}
