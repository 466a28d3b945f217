//! Convenience re-exports for common test utilities.

pub use crate::must::{must, must_err, must_some, must_with};

#[cfg(feature = "tracking")]
pub use crate::tracking::{AllocationGuard, TrackingAllocator, track};

#[cfg(feature = "mock")]
pub use crate::mock::{ForeignService, MockIdentity, OwnerCall, RecordingPeripheral};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;
