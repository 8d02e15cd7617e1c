//! Counting global allocator used by the allocation tests and benches.

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicU64, Ordering};

/// Wraps [`System`] and records every allocation made through it.
pub struct Trallocator {
    inner: System,
    live_bytes: AtomicU64,
    total_bytes: AtomicU64,
    allocations: AtomicU64,
}

unsafe impl GlobalAlloc for Trallocator {
    unsafe fn alloc(&self, l: Layout) -> *mut u8 {
        self.live_bytes.fetch_add(l.size() as u64, Ordering::SeqCst);
        self.total_bytes.fetch_add(l.size() as u64, Ordering::SeqCst);
        self.allocations.fetch_add(1, Ordering::SeqCst);
        self.inner.alloc(l)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, l: Layout) {
        self.inner.dealloc(ptr, l);
        self.live_bytes.fetch_sub(l.size() as u64, Ordering::SeqCst);
    }
}

impl Trallocator {
    pub const fn new(inner: System) -> Self {
        Trallocator {
            inner,
            live_bytes: AtomicU64::new(0),
            total_bytes: AtomicU64::new(0),
            allocations: AtomicU64::new(0),
        }
    }

    /// Zeroes the cumulative counters; live bytes are left untouched.
    pub fn reset(&self) {
        self.total_bytes.store(0, Ordering::SeqCst);
        self.allocations.store(0, Ordering::SeqCst);
    }

    /// Bytes currently allocated.
    pub fn get(&self) -> u64 {
        self.live_bytes.load(Ordering::SeqCst)
    }

    /// Bytes allocated since the last [`reset`](Self::reset).
    pub fn get_sum(&self) -> u64 {
        self.total_bytes.load(Ordering::SeqCst)
    }

    /// Number of allocations since the last [`reset`](Self::reset).
    pub fn get_count(&self) -> u64 {
        self.allocations.load(Ordering::SeqCst)
    }
}
