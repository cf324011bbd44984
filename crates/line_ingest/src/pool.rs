//! Reusable scratch buffers.
//!
//! A run rents one byte buffer and one character buffer up front and keeps
//! them for every line it decodes. Buffers only grow (by doubling) when a line
//! is longer than anything seen so far, so a run performs
//! `O(log(max_line_len))` allocations instead of one per line.

use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use tracing::debug;

use crate::defaults::MAX_DECODE_EXPANSION;

/// Free buffers kept per list; anything beyond this is dropped on release.
const MAX_IDLE_PER_LIST: usize = 8;

static GLOBAL_POOL: OnceLock<Arc<BufferPool>> = OnceLock::new();

fn size_class(min_size: usize) -> usize {
    min_size.max(1).next_power_of_two()
}

/// Thread-safe backing store for scratch buffers.
///
/// Concurrent runs may share one pool; each rented buffer is owned exclusively
/// by its renter until released.
#[derive(Debug, Default)]
pub struct BufferPool {
    bytes: Mutex<Vec<Vec<u8>>>,
    chars: Mutex<Vec<String>>,
}

impl BufferPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide pool used when a run is not given one explicitly.
    pub fn global() -> Arc<Self> {
        GLOBAL_POOL.get_or_init(|| Arc::new(Self::new())).clone()
    }

    /// Returns an empty buffer whose capacity is at least `min_size`.
    pub fn rent_bytes(&self, min_size: usize) -> Vec<u8> {
        let wanted = size_class(min_size);
        let mut idle = self.bytes.lock().unwrap_or_else(PoisonError::into_inner);
        match idle.iter().position(|buf| buf.capacity() >= wanted) {
            Some(idx) => idle.swap_remove(idx),
            None => Vec::with_capacity(wanted),
        }
    }

    /// Returns an empty string whose capacity is at least `min_size` bytes.
    pub fn rent_chars(&self, min_size: usize) -> String {
        let wanted = size_class(min_size);
        let mut idle = self.chars.lock().unwrap_or_else(PoisonError::into_inner);
        match idle.iter().position(|buf| buf.capacity() >= wanted) {
            Some(idx) => idle.swap_remove(idx),
            None => String::with_capacity(wanted),
        }
    }

    pub fn release_bytes(&self, mut buf: Vec<u8>) {
        buf.clear();
        let mut idle = self.bytes.lock().unwrap_or_else(PoisonError::into_inner);
        if idle.len() < MAX_IDLE_PER_LIST {
            idle.push(buf);
        }
    }

    pub fn release_chars(&self, mut buf: String) {
        buf.clear();
        let mut idle = self.chars.lock().unwrap_or_else(PoisonError::into_inner);
        if idle.len() < MAX_IDLE_PER_LIST {
            idle.push(buf);
        }
    }

    /// Number of buffers currently sitting in the pool (both lists).
    pub fn idle_buffers(&self) -> usize {
        let bytes = self.bytes.lock().unwrap_or_else(PoisonError::into_inner).len();
        let chars = self.chars.lock().unwrap_or_else(PoisonError::into_inner).len();
        bytes + chars
    }
}

/// The pair of buffers owned by one run.
///
/// Both buffers go back to the pool when this value is dropped, which covers
/// normal completion, early `?` returns and a cancelled future alike.
#[derive(Debug)]
pub struct ScratchBuffers {
    pool: Arc<BufferPool>,
    bytes: Vec<u8>,
    chars: String,
    growth_events: usize,
}

impl ScratchBuffers {
    pub fn rent(pool: Arc<BufferPool>, initial_bytes: usize) -> Self {
        let bytes = pool.rent_bytes(initial_bytes);
        let chars = pool.rent_chars(bytes.capacity().saturating_mul(MAX_DECODE_EXPANSION));
        Self {
            pool,
            bytes,
            chars,
            growth_events: 0,
        }
    }

    pub fn byte_capacity(&self) -> usize {
        self.bytes.capacity()
    }

    pub fn char_capacity(&self) -> usize {
        self.chars.capacity()
    }

    pub fn growth_events(&self) -> usize {
        self.growth_events
    }

    /// Grows both buffers when `len` exceeds the byte capacity.
    ///
    /// Bytes already in the byte buffer are carried over.
    pub fn ensure_capacity(&mut self, len: usize) {
        if len <= self.bytes.capacity() {
            return;
        }
        let mut capacity = size_class(self.bytes.capacity());
        while capacity < len {
            capacity = capacity.saturating_mul(2);
        }
        self.grow(capacity);
    }

    /// Swaps both buffers for larger ones rented from the pool.
    pub fn grow(&mut self, new_min_size: usize) {
        let mut bytes = self.pool.rent_bytes(new_min_size);
        bytes.extend_from_slice(&self.bytes);
        let old_bytes = std::mem::replace(&mut self.bytes, bytes);
        self.pool.release_bytes(old_bytes);

        let chars = self
            .pool
            .rent_chars(self.bytes.capacity().saturating_mul(MAX_DECODE_EXPANSION));
        let old_chars = std::mem::replace(&mut self.chars, chars);
        self.pool.release_chars(old_chars);

        self.growth_events += 1;
        debug!(
            byte_capacity = self.bytes.capacity(),
            growth_events = self.growth_events,
            "grew scratch buffers"
        );
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub(crate) fn bytes_mut(&mut self) -> &mut Vec<u8> {
        &mut self.bytes
    }

    pub(crate) fn chars_mut(&mut self) -> &mut String {
        &mut self.chars
    }

    /// The first `len` spliced bytes together with the character buffer.
    pub fn spliced_line(&mut self, len: usize) -> (&[u8], &mut String) {
        (&self.bytes[..len], &mut self.chars)
    }
}

impl Drop for ScratchBuffers {
    fn drop(&mut self) {
        self.pool.release_bytes(std::mem::take(&mut self.bytes));
        self.pool.release_chars(std::mem::take(&mut self.chars));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rented_buffers_are_power_of_two_sized() {
        let pool = BufferPool::new();
        let buf = pool.rent_bytes(3000);
        assert!(buf.capacity() >= 4096);
        assert!(buf.is_empty());
    }

    #[test]
    fn released_buffers_are_reused() {
        let pool = BufferPool::new();
        let buf = pool.rent_bytes(1024);
        let ptr = buf.as_ptr();
        pool.release_bytes(buf);
        let again = pool.rent_bytes(512);
        assert_eq!(again.as_ptr(), ptr);
    }

    #[test]
    fn scratch_grows_only_past_capacity_and_keeps_contents() {
        let pool = Arc::new(BufferPool::new());
        let mut scratch = ScratchBuffers::rent(pool, 16);
        scratch.bytes_mut().extend_from_slice(b"abc");

        scratch.ensure_capacity(8);
        assert_eq!(scratch.growth_events(), 0);

        scratch.ensure_capacity(100);
        assert_eq!(scratch.growth_events(), 1);
        assert!(scratch.byte_capacity() >= 128);
        assert!(scratch.char_capacity() >= scratch.byte_capacity() * MAX_DECODE_EXPANSION);
        assert_eq!(scratch.bytes(), b"abc");
    }

    #[test]
    fn dropping_scratch_returns_both_buffers() {
        let pool = Arc::new(BufferPool::new());
        {
            let mut scratch = ScratchBuffers::rent(pool.clone(), 64);
            scratch.ensure_capacity(1000);
        }
        // the two buffers from the growth plus the final pair
        assert_eq!(pool.idle_buffers(), 4);
    }
}
