/// Raw cursor into a destination region.
///
/// Every call copies at the cursor and moves it past the copied bytes.
/// Nothing is bounds checked; the owner of the region sizes it up front.
pub struct UnsafeWriter(*mut u8);

impl UnsafeWriter {
    #[inline(always)]
    pub const fn new(ptr: *mut u8) -> Self {
        Self(ptr)
    }

    /// # Safety
    ///
    /// cursor must be valid for a 1 byte write
    #[inline(always)]
    pub unsafe fn write_byte(&mut self, byte: u8) {
        unsafe {
            self.0.write(byte);
            self.0 = self.0.add(1);
        }
    }

    /// # Safety
    ///
    /// cursor must be valid for a `slice.len()` byte write and must not
    /// overlap `slice`
    #[inline(always)]
    pub unsafe fn write(&mut self, slice: &[u8]) {
        unsafe {
            core::ptr::copy_nonoverlapping(slice.as_ptr(), self.0, slice.len());
            self.0 = self.0.add(slice.len());
        }
    }

    /// # Safety
    ///
    /// cursor must be valid for an `N` byte write
    #[inline(always)]
    pub unsafe fn write_array<const N: usize>(&mut self, array: [u8; N]) {
        unsafe {
            self.0.cast::<[u8; N]>().write_unaligned(array);
            self.0 = self.0.add(N);
        }
    }

    #[inline(always)]
    pub const fn ptr(&self) -> *mut u8 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::UnsafeWriter;

    #[test]
    fn cursor_advances_by_written_width() {
        let mut region = [0u8; 8];
        let start = region.as_mut_ptr();
        let mut w = UnsafeWriter::new(start);
        unsafe {
            w.write_byte(0xAB);
            w.write(b"cd");
            w.write_array([1, 2, 3]);
            assert_eq!(w.ptr(), start.add(6));
        }
        assert_eq!(region, [0xAB, b'c', b'd', 1, 2, 3, 0, 0]);
    }
}
