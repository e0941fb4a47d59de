//! Backing storage for one adapter table fetch.

use std::mem;

type Word = u64;

/// Byte buffer the host writes its adapter records into.
///
/// Storage is allocated in 8-byte words so records containing pointers and
/// 64-bit fields are suitably aligned at offset zero. The allocation never
/// moves after construction.
#[derive(Debug)]
pub struct AdapterBuffer {
    words: Vec<Word>,
    len: usize,
}

impl AdapterBuffer {
    /// Allocates a zeroed buffer of `len` bytes.
    #[must_use]
    pub fn with_len(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(mem::size_of::<Word>())],
            len,
        }
    }

    /// Length in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the buffer holds no bytes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Pointer to the first byte.
    #[must_use]
    pub fn as_ptr(&self) -> *const u8 {
        self.words.as_ptr().cast()
    }

    /// Mutable pointer to the first byte, for handing to the host.
    pub fn as_mut_ptr(&mut self) -> *mut u8 {
        self.words.as_mut_ptr().cast()
    }

    /// The buffer contents.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: `words` owns at least `len` initialized bytes and u8 has no
        // alignment requirement.
        unsafe { std::slice::from_raw_parts(self.as_ptr(), self.len) }
    }

    /// The buffer contents, mutably.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        let len = self.len;
        // SAFETY: as for `as_bytes`, and the borrow is exclusive.
        unsafe { std::slice::from_raw_parts_mut(self.as_mut_ptr(), len) }
    }
}
