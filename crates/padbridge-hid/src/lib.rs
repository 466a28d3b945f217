//! Host-side HID facade for the Xbox 360 wired controller.
//!
//! The controller is not a HID device on the wire. This crate presents it to
//! the host as one: [`HidFacade`] answers descriptor and transport queries
//! itself and forwards everything device-specific to the [`Peripheral`] that
//! owns it in the device tree.
//!
//! # Ownership
//!
//! The facade holds only a non-owning [`ProviderLink`] to its parent. Each
//! call resolves the owner again with [`resolve_owner`], so a detached or
//! dropped peripheral is observed immediately and never kept alive by the
//! facade:
//!
//! ```
//! use std::sync::Arc;
//! use padbridge_hid::{HidFacade, ReportType, Service, VirtualPeripheral};
//!
//! let pad = Arc::new(VirtualPeripheral::default());
//! let node: Arc<dyn Service> = pad.clone();
//! let facade = HidFacade::<VirtualPeripheral>::new();
//! assert!(facade.start(&node).is_ok());
//!
//! assert!(facade.set_report(&[0x00, 0x04, 0x20, 0x40], ReportType::Output, 0).is_ok());
//! assert_eq!(pad.state().rumble, (0x20, 0x40));
//!
//! drop(node);
//! drop(pad);
//! assert_eq!(facade.new_product_string(), "Unknown");
//! ```
//!
//! # Concurrency
//!
//! Every facade method takes `&self` and may be called from any thread. No
//! method blocks: the provider link is read with a try-lock and a contended
//! read is treated as "no owner".

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]
#![deny(static_mut_refs)]

pub mod facade;
pub mod peripheral;
pub mod resolver;
pub mod status;
pub mod tree;
pub mod virtual_device;

pub use facade::{FacadeState, HidFacade, ReportType, TRANSPORT, UNKNOWN_ID_NUMBER, UNKNOWN_STRING};
pub use peripheral::Peripheral;
pub use resolver::{provider_is, resolve_owner};
pub use status::{IoError, IoResult};
pub use tree::{AsAny, ProviderLink, Service};
pub use virtual_device::{PeripheralState, VirtualPeripheral, VirtualPeripheralConfig};
