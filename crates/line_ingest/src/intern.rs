//! Optional deduplication of short, highly repetitive column values.
//!
//! Interning is a heuristic for cutting allocations on columns such as
//! country codes or time-zone ids. Nothing may rely on two equal inputs
//! coming back as the same allocation.

use std::sync::{Arc, Mutex};

/// Source of shared string instances.
pub trait Interner: Send + Sync {
    fn intern(&self, value: &str) -> Arc<str>;
}

/// Allocates a fresh string on every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoInterning;

impl Interner for NoInterning {
    fn intern(&self, value: &str) -> Arc<str> {
        Arc::from(value)
    }
}

pub const DEFAULT_STRING_POOL_SLOTS: usize = 8192;

/// Fixed-size, open-addressed string cache.
///
/// Each value hashes to exactly one slot. A colliding value overwrites the
/// slot; a slot that another thread is touching is skipped. Either way the
/// caller still gets a string equal to its input, just not a shared one.
#[derive(Debug)]
pub struct StringPool {
    slots: Box<[Mutex<Option<Arc<str>>>]>,
    mask: usize,
}

impl StringPool {
    /// Returns `None` unless `capacity` is a non-zero power of two.
    pub fn new(capacity: usize) -> Option<Self> {
        if !capacity.is_power_of_two() {
            return None;
        }
        let slots = (0..capacity).map(|_| Mutex::new(None)).collect();
        Some(Self {
            slots,
            mask: capacity - 1,
        })
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}

impl Default for StringPool {
    fn default() -> Self {
        let slots = (0..DEFAULT_STRING_POOL_SLOTS)
            .map(|_| Mutex::new(None))
            .collect();
        Self {
            slots,
            mask: DEFAULT_STRING_POOL_SLOTS - 1,
        }
    }
}

impl Interner for StringPool {
    fn intern(&self, value: &str) -> Arc<str> {
        if value.is_empty() {
            return Arc::from("");
        }

        let slot = &self.slots[slot_hash(value) & self.mask];
        let Ok(mut guard) = slot.try_lock() else {
            return Arc::from(value);
        };
        if let Some(existing) = guard.as_ref() {
            if existing.as_ref() == value {
                return existing.clone();
            }
        }
        let fresh: Arc<str> = Arc::from(value);
        *guard = Some(fresh.clone());
        fresh
    }
}

// djb2 with xor, tuned for short ASCII keys.
fn slot_hash(value: &str) -> usize {
    value.bytes().fold(5381usize, |hash, byte| {
        (hash << 5).wrapping_add(hash) ^ usize::from(byte)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_values_share_an_allocation() {
        let pool = StringPool::default();
        let a = pool.intern("Europe/Rome");
        let b = pool.intern("Europe/Rome");
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn collisions_never_return_the_wrong_value() {
        let pool = StringPool::new(1).unwrap();
        let a = pool.intern("IT");
        let b = pool.intern("FR");
        let c = pool.intern("IT");
        assert_eq!(&*a, "IT");
        assert_eq!(&*b, "FR");
        assert_eq!(&*c, "IT");
    }

    #[test]
    fn capacity_must_be_a_power_of_two() {
        assert!(StringPool::new(0).is_none());
        assert!(StringPool::new(1000).is_none());
        assert_eq!(StringPool::new(1024).unwrap().capacity(), 1024);
    }
}
