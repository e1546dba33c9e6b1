//! Securely-erasable owning buffer for secret material
//!
//! [`SecBlock`] owns a contiguous block of elements exclusively and offers
//! the resize family a key-handling caller needs: discard (`reset`),
//! preserve-prefix (`resize`), grow-only (`grow`), and the zeroing variants
//! of each. Under the default-on `scrub` feature every block is zeroized
//! before its storage is released, both on drop and on every reallocation,
//! so stale copies of key bytes never outlive the buffer that held them.
//!
//! Indexed access is plain slice indexing via `Deref`; an out-of-range
//! index panics. That is a contract violation by the caller, intentionally
//! kept apart from the recoverable [`CodecError`](crate::error::CodecError)
//! taxonomy.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::mem;
use core::ops::{Deref, DerefMut};
use zeroize::Zeroize;

/// Owning, resizable buffer with zero-before-release semantics
pub struct SecBlock<T: Copy + Default + Zeroize> {
    data: Vec<T>,
}

/// Byte buffer, the common case for key and wire material
pub type SecByteBlock = SecBlock<u8>;

/// Word buffer for algorithms working in 32-bit limbs
pub type SecWordBlock = SecBlock<u32>;

impl<T: Copy + Default + Zeroize> SecBlock<T> {
    /// Allocate a block of `size` elements; contents are unspecified
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![T::default(); size],
        }
    }

    /// Allocate a block holding a copy of `source`
    pub fn from_slice(source: &[T]) -> Self {
        Self {
            data: source.to_vec(),
        }
    }

    /// Number of elements owned
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the block holds no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// View the block as a slice
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// View the block as a mutable slice
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Discard current contents and allocate a fresh block of `size`
    /// elements; the new contents are unspecified
    pub fn reset(&mut self, size: usize) {
        if size != self.data.len() {
            self.replace(vec![T::default(); size]);
        }
    }

    /// Discard current contents and allocate a fresh block of `size`
    /// elements, guaranteed zeroed
    pub fn clean_reset(&mut self, size: usize) {
        self.reset(size);
        self.data.iter_mut().for_each(Zeroize::zeroize);
    }

    /// Grow to `size` elements, preserving existing contents as a prefix;
    /// a no-op if `size` does not exceed the current length. The new tail
    /// is unspecified.
    pub fn grow(&mut self, size: usize) {
        if size > self.data.len() {
            let mut fresh = vec![T::default(); size];
            fresh[..self.data.len()].copy_from_slice(&self.data);
            self.replace(fresh);
        }
    }

    /// Like [`grow`](Self::grow), but the new tail is guaranteed zeroed
    pub fn clean_grow(&mut self, size: usize) {
        let old_len = self.data.len();
        if size > old_len {
            let mut fresh = vec![T::default(); size];
            fresh[..old_len].copy_from_slice(&self.data);
            fresh[old_len..].iter_mut().for_each(Zeroize::zeroize);
            self.replace(fresh);
        }
    }

    /// Resize to `size` elements, preserving the first `min(len, size)`;
    /// when growing, the tail beyond the preserved prefix is unspecified
    pub fn resize(&mut self, size: usize) {
        if size != self.data.len() {
            let keep = self.data.len().min(size);
            let mut fresh = vec![T::default(); size];
            fresh[..keep].copy_from_slice(&self.data[..keep]);
            self.replace(fresh);
        }
    }

    /// Exchange storage and size with `other` in constant time
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.data, &mut other.data);
    }

    /// Install `fresh` as the backing storage, scrubbing the old block
    /// before it is released
    fn replace(&mut self, fresh: Vec<T>) {
        #[cfg(feature = "scrub")]
        self.data.zeroize();
        self.data = fresh;
    }
}

impl<T: Copy + Default + Zeroize> Drop for SecBlock<T> {
    fn drop(&mut self) {
        #[cfg(feature = "scrub")]
        self.data.zeroize();
    }
}

impl<T: Copy + Default + Zeroize> Clone for SecBlock<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
        }
    }
}

impl<T: Copy + Default + Zeroize + PartialEq> PartialEq for SecBlock<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: Copy + Default + Zeroize + Eq> Eq for SecBlock<T> {}

impl<T: Copy + Default + Zeroize> Deref for SecBlock<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.data
    }
}

impl<T: Copy + Default + Zeroize> DerefMut for SecBlock<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

// Length only; contents stay out of logs.
impl<T: Copy + Default + Zeroize> fmt::Debug for SecBlock<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecBlock")
            .field("len", &self.data.len())
            .finish_non_exhaustive()
    }
}
