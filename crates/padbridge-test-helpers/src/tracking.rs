//! Heap allocation tracking.
//!
//! The set-report path must not allocate. Install [`TrackingAllocator`] as
//! the global allocator of a test binary, open a guard with [`track`], run
//! the code under test, and check the guard:
//!
//! ```rust,ignore
//! #[global_allocator]
//! static ALLOC: TrackingAllocator = TrackingAllocator;
//!
//! let guard = track();
//! facade.set_report(&report, ReportType::Output, 0)?;
//! assert_no_alloc!(guard, "set_report");
//! ```
//!
//! Counting is per thread, so other test threads do not disturb a guard.

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

thread_local! {
    static ALLOCATIONS: Cell<usize> = const { Cell::new(0) };
    static BYTES: Cell<usize> = const { Cell::new(0) };
    static DEPTH: Cell<usize> = const { Cell::new(0) };
}

fn tracking_enabled() -> bool {
    DEPTH.with(|d| d.get() > 0)
}

fn record(bytes: usize) {
    ALLOCATIONS.with(|c| c.set(c.get().saturating_add(1)));
    BYTES.with(|b| b.set(b.get().saturating_add(bytes)));
}

/// Global allocator that forwards to [`System`] and counts allocations made
/// while a [`AllocationGuard`] is open on the current thread.
pub struct TrackingAllocator;

unsafe impl GlobalAlloc for TrackingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() && tracking_enabled() {
            record(layout.size());
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc_zeroed(layout) };
        if !ptr.is_null() && tracking_enabled() {
            record(layout.size());
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) };
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = unsafe { System.realloc(ptr, layout, new_size) };
        if !new_ptr.is_null() && tracking_enabled() && new_size > layout.size() {
            record(new_size.saturating_sub(layout.size()));
        }
        new_ptr
    }
}

/// Open tracking window on the current thread.
///
/// Guards nest; tracking stops when the last one is dropped.
pub struct AllocationGuard {
    start_count: usize,
    start_bytes: usize,
}

impl AllocationGuard {
    pub fn new() -> Self {
        DEPTH.with(|d| d.set(d.get().saturating_add(1)));
        Self {
            start_count: ALLOCATIONS.with(Cell::get),
            start_bytes: BYTES.with(Cell::get),
        }
    }

    /// Allocations made on this thread since the guard was opened.
    pub fn allocations(&self) -> usize {
        ALLOCATIONS.with(Cell::get).saturating_sub(self.start_count)
    }

    pub fn bytes(&self) -> usize {
        BYTES.with(Cell::get).saturating_sub(self.start_bytes)
    }

    pub fn has_allocations(&self) -> bool {
        self.allocations() > 0
    }
}

impl Default for AllocationGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for AllocationGuard {
    fn drop(&mut self) {
        DEPTH.with(|d| d.set(d.get().saturating_sub(1)));
    }
}

pub fn track() -> AllocationGuard {
    AllocationGuard::new()
}

/// Panic if `guard` saw any allocation.
#[macro_export]
macro_rules! assert_no_alloc {
    ($guard:expr) => {
        $crate::assert_no_alloc!($guard, "tracked block")
    };
    ($guard:expr, $context:expr) => {{
        let guard = &$guard;
        let allocs = guard.allocations();
        if allocs > 0 {
            panic!(
                "allocation in '{}': {} allocations ({} bytes) at {}:{}",
                $context,
                allocs,
                guard.bytes(),
                file!(),
                line!()
            );
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_no_allocations() {
        let guard = track();
        let x = std::hint::black_box(41);
        let _y = x + 1;
        assert_no_alloc!(guard);
    }

    #[test]
    #[should_panic(expected = "allocation in 'vec'")]
    fn test_guard_catches_allocation() {
        let guard = track();
        let v: Vec<u8> = std::hint::black_box(vec![1, 2, 3]);
        assert_no_alloc!(guard, "vec");
        drop(v);
    }

    #[test]
    fn test_guard_counts() {
        let guard = track();
        assert!(!guard.has_allocations());
        let v: Vec<u32> = std::hint::black_box(vec![1, 2, 3, 4, 5]);
        assert!(guard.allocations() >= 1);
        assert!(guard.bytes() >= 20);
        drop(v);
    }

    #[test]
    fn test_nested_guards() {
        let outer = track();
        {
            let inner = track();
            assert_no_alloc!(inner);
        }
        let s = std::hint::black_box(String::from("still tracked"));
        assert!(outer.has_allocations());
        drop(s);
    }
}
