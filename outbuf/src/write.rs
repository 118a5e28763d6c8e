use crate::{UnsafeWriter, Write};
use alloc::boxed::Box;
use core::num::{
    NonZeroI128, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI8, NonZeroU128, NonZeroU16,
    NonZeroU32, NonZeroU64, NonZeroU8,
};

macro_rules! network {
    ($type:ty) => {
        impl Write for $type {
            #[inline(always)]
            unsafe fn write(&self, w: &mut UnsafeWriter) {
                unsafe {
                    w.write_array(self.to_be_bytes());
                }
            }

            #[inline(always)]
            fn len_s(&self) -> usize {
                ::core::mem::size_of::<Self>()
            }
        }
    };
}

macro_rules! non_zero {
    ($type:ty) => {
        impl Write for $type {
            #[inline(always)]
            unsafe fn write(&self, w: &mut UnsafeWriter) {
                unsafe {
                    w.write_array(self.get().to_be_bytes());
                }
            }

            #[inline(always)]
            fn len_s(&self) -> usize {
                ::core::mem::size_of::<Self>()
            }
        }
    };
}

// floats go out in host order, unlike every integer
macro_rules! native {
    ($type:ty) => {
        impl Write for $type {
            #[inline(always)]
            unsafe fn write(&self, w: &mut UnsafeWriter) {
                unsafe {
                    w.write_array(self.to_ne_bytes());
                }
            }

            #[inline(always)]
            fn len_s(&self) -> usize {
                ::core::mem::size_of::<Self>()
            }
        }
    };
}

macro_rules! tuple {
    ($($name:ident),+) => {
        impl<$($name: Write),+> Write for ($($name,)+) {
            #[inline]
            #[allow(non_snake_case)]
            unsafe fn write(&self, w: &mut UnsafeWriter) {
                let ($($name,)+) = self;
                unsafe {
                    $($name.write(w);)+
                }
            }

            #[inline]
            #[allow(non_snake_case)]
            fn len_s(&self) -> usize {
                let ($($name,)+) = self;
                0 $(+ $name.len_s())+
            }
        }
    };
}

impl Write for bool {
    #[inline(always)]
    unsafe fn write(&self, w: &mut UnsafeWriter) {
        unsafe {
            w.write_byte(*self as u8);
        }
    }

    #[inline(always)]
    fn len_s(&self) -> usize {
        1
    }
}

impl Write for u8 {
    #[inline(always)]
    unsafe fn write(&self, w: &mut UnsafeWriter) {
        unsafe {
            w.write_byte(*self);
        }
    }

    #[inline(always)]
    fn len_s(&self) -> usize {
        1
    }
}

impl Write for i8 {
    #[inline(always)]
    unsafe fn write(&self, w: &mut UnsafeWriter) {
        unsafe {
            w.write_byte(*self as u8);
        }
    }

    #[inline(always)]
    fn len_s(&self) -> usize {
        1
    }
}

impl Write for NonZeroU8 {
    #[inline(always)]
    unsafe fn write(&self, w: &mut UnsafeWriter) {
        unsafe {
            w.write_byte(self.get());
        }
    }

    #[inline(always)]
    fn len_s(&self) -> usize {
        1
    }
}

impl Write for NonZeroI8 {
    #[inline(always)]
    unsafe fn write(&self, w: &mut UnsafeWriter) {
        unsafe {
            w.write_byte(self.get() as u8);
        }
    }

    #[inline(always)]
    fn len_s(&self) -> usize {
        1
    }
}

network!(u16);
network!(u32);
network!(u64);
network!(u128);
network!(i16);
network!(i32);
network!(i64);
network!(i128);
non_zero!(NonZeroU16);
non_zero!(NonZeroU32);
non_zero!(NonZeroU64);
non_zero!(NonZeroU128);
non_zero!(NonZeroI16);
non_zero!(NonZeroI32);
non_zero!(NonZeroI64);
non_zero!(NonZeroI128);
native!(f32);
native!(f64);
tuple!(A, B);
tuple!(A, B, C);
tuple!(A, B, C, D);

impl Write for [u8] {
    #[inline(always)]
    unsafe fn write(&self, w: &mut UnsafeWriter) {
        unsafe {
            w.write(self);
        }
    }

    #[inline(always)]
    fn len_s(&self) -> usize {
        <[u8]>::len(self)
    }
}

impl<const N: usize> Write for [u8; N] {
    #[inline(always)]
    unsafe fn write(&self, w: &mut UnsafeWriter) {
        unsafe {
            w.write_array(*self);
        }
    }

    #[inline(always)]
    fn len_s(&self) -> usize {
        N
    }
}

impl Write for str {
    #[inline(always)]
    unsafe fn write(&self, w: &mut UnsafeWriter) {
        unsafe {
            w.write(self.as_bytes());
        }
    }

    #[inline(always)]
    fn len_s(&self) -> usize {
        str::len(self)
    }
}

impl Write for smol_str::SmolStr {
    #[inline]
    unsafe fn write(&self, w: &mut UnsafeWriter) {
        unsafe {
            w.write(self.as_bytes());
        }
    }

    #[inline]
    fn len_s(&self) -> usize {
        smol_str::SmolStr::len(self)
    }
}

impl Write for uuid::Uuid {
    #[inline(always)]
    unsafe fn write(&self, w: &mut UnsafeWriter) {
        unsafe { w.write(self.as_bytes()) }
    }

    #[inline(always)]
    fn len_s(&self) -> usize {
        16
    }
}

impl<T: Write + ?Sized> Write for &T {
    #[inline(always)]
    unsafe fn write(&self, w: &mut UnsafeWriter) {
        unsafe {
            T::write(*self, w);
        }
    }

    #[inline(always)]
    fn len_s(&self) -> usize {
        T::len_s(*self)
    }
}

impl<T: Write + ?Sized> Write for Box<T> {
    #[inline]
    unsafe fn write(&self, w: &mut UnsafeWriter) {
        unsafe {
            T::write(self, w);
        }
    }

    #[inline]
    fn len_s(&self) -> usize {
        T::len_s(self)
    }
}

impl<T: Write> Write for core::slice::Iter<'_, T> {
    #[inline]
    unsafe fn write(&self, w: &mut UnsafeWriter) {
        for x in self.clone() {
            unsafe {
                x.write(w);
            }
        }
    }

    #[inline]
    fn len_s(&self) -> usize {
        self.clone().map(Write::len_s).sum()
    }
}
