// Copyright 2024 Simo Sorce
// See LICENSE.txt file for terms

/* misc utilities that do not really belong in any module */

use crate::pkcs11::CK_ULONG;

pub const CK_ULONG_SIZE: usize = std::mem::size_of::<CK_ULONG>();

/// Copies `len` bytes from a native pointer into a newly allocated vector
///
/// Must be used in a function returning a `Result`, as the length is
/// converted with `?`. Null pointers or zero length yield an empty vector.
macro_rules! bytes_to_vec {
    ($ptr:expr, $len:expr) => {{
        let ptr = $ptr as *const u8;
        let size = usize::try_from($len)?;
        if ptr.is_null() || size == 0 {
            Vec::new()
        } else {
            let mut v = Vec::<u8>::with_capacity(size);
            unsafe {
                std::ptr::copy_nonoverlapping(ptr, v.as_mut_ptr(), size);
                v.set_len(size);
            }
            v
        }
    }};
}
pub(crate) use bytes_to_vec;

macro_rules! void_ptr {
    ($ptr:expr) => {
        $ptr as *const _ as CK_VOID_PTR
    };
}
pub(crate) use void_ptr;

/// Size of a native type as a CK_ULONG, must be used in a function
/// returning a `Result`
macro_rules! sizeof {
    ($type:ty) => {
        CK_ULONG::try_from(std::mem::size_of::<$type>())?
    };
}
pub(crate) use sizeof;

/// Overwrites a buffer with zeros in a way the compiler will not elide
pub fn zeromem(mem: &mut [u8]) {
    for b in mem.iter_mut() {
        unsafe { std::ptr::write_volatile(b, 0) };
    }
    std::sync::atomic::compiler_fence(std::sync::atomic::Ordering::SeqCst);
}
