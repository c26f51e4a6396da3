use std::{
    alloc::{self, Layout},
    marker::PhantomData,
    mem::{align_of, size_of},
    ptr::NonNull,
};

use crate::error::{Error, Result};

/// Low level utility owning a fixed block of memory with room for `capacity` values of `T`.
/// In particular:
///
/// - Uses a dangling pointer for zero-sized types and zero-length blocks, which are never freed.
/// - Catches all overflows in capacity computations (promotes them to `Error::CapacityOverflow`).
/// - Never reallocates in place: a new capacity means a new `RawArray`.
///
/// This type does not in any way inspect the memory it manages. When dropped it *will* free its memory, but it *won't* try to drop its contents.
/// It is up to the user of `RawArray` to handle the actual things *stored* inside of it.
pub(crate) struct RawArray<T> {
    ptr:      NonNull<T>,
    cap:      usize,
    _phantom: PhantomData<T>,
}

impl<T> RawArray<T> {
    const IS_ZST: bool = size_of::<T>() == 0;

    /// Try to allocate a block with room for exactly `capacity` values.
    ///
    /// # Errors
    ///
    /// Returns `Error::CapacityOverflow` if the block would exceed `isize::MAX` bytes,
    /// or `Error::AllocError` if the allocator could not provide the memory.
    pub fn try_with_capacity(capacity: usize) -> Result<Self> {
        if Self::IS_ZST || capacity == 0 {
            return Ok(Self { ptr: NonNull::dangling(), cap: capacity, _phantom: PhantomData });
        }

        let layout = Layout::array::<T>(capacity).map_err(|_| Error::CapacityOverflow)?;
        // SAFETY: `layout` has a non-zero size, as both `capacity` and the size of `T` are non-zero
        let ptr = unsafe { alloc::alloc(layout) };
        match NonNull::new(ptr.cast::<T>()) {
            Some(ptr) => Ok(Self { ptr, cap: capacity, _phantom: PhantomData }),
            None => Err(Error::AllocError(layout)),
        }
    }

    /// Gets a raw pointer to the start of the allocation.
    /// Note that this is a dangling pointer if `capacity == 0` or `T` is zero-sized.
    #[inline]
    pub const fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        self.cap
    }

    fn current_memory(&self) -> Option<(NonNull<u8>, Layout)> {
        if Self::IS_ZST || self.cap == 0 {
            None
        } else {
            // SAFETY: The same layout was already validated when allocating
            let layout = unsafe { Layout::from_size_align_unchecked(size_of::<T>() * self.cap, align_of::<T>()) };
            Some((self.ptr.cast(), layout))
        }
    }
}

impl<T> Drop for RawArray<T> {
    /// Frees the memory owned by the `RawArray` *without* trying to drop its contents.
    fn drop(&mut self) {
        if let Some((ptr, layout)) = self.current_memory() {
            // SAFETY: `ptr` was allocated by the global allocator with `layout`
            unsafe { alloc::dealloc(ptr.as_ptr(), layout) }
        }
    }
}

// SAFETY: `RawArray` uniquely owns its block, like `Box<[T]>`
unsafe impl<T: Send> Send for RawArray<T> {}
unsafe impl<T: Sync> Sync for RawArray<T> {}

/// Central function for failures that can't be reported to the caller.
#[cold]
#[track_caller]
pub(crate) fn handle_error(err: Error) -> ! {
    match err {
        Error::AllocError(layout) => alloc::handle_alloc_error(layout),
        err => panic!("{err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_array_allocates_exact_capacity() {
        let arr = RawArray::<u64>::try_with_capacity(16).unwrap();
        assert_eq!(arr.capacity(), 16);
        assert_eq!(arr.ptr() as usize % align_of::<u64>(), 0);
    }

    #[test]
    fn raw_array_zero_sized() {
        let arr = RawArray::<()>::try_with_capacity(1 << 40).unwrap();
        assert_eq!(arr.capacity(), 1 << 40);
        assert!(arr.current_memory().is_none());

        let arr = RawArray::<u32>::try_with_capacity(0).unwrap();
        assert!(arr.current_memory().is_none());
    }

    #[test]
    fn raw_array_capacity_overflow() {
        assert!(matches!(RawArray::<u64>::try_with_capacity(usize::MAX), Err(Error::CapacityOverflow)));
        assert!(matches!(RawArray::<u16>::try_with_capacity(isize::MAX as usize), Err(Error::CapacityOverflow)));
    }
}
