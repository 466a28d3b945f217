//! HID facade for one logical controller.
//!
//! The host sees a standard HID game pad. Descriptor, transport and usage
//! queries are answered locally; identity, rumble, LED and property requests
//! are forwarded to the owning [`Peripheral`], resolved afresh on every
//! call. When no owner can be resolved, identity queries fall back to
//! defaults and commands fail with [`IoError::Unsupported`].

use std::marker::PhantomData;
use std::sync::Arc;

use hid_xbox360_protocol::{ProtocolError, REPORT_DESCRIPTOR, SetReportCommand, descriptor};
use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::peripheral::Peripheral;
use crate::resolver::{provider_is, resolve_owner};
use crate::status::{IoError, IoResult};
use crate::tree::{ProviderLink, Service};

/// Returned by string accessors when no owner is attached.
pub const UNKNOWN_STRING: &str = "Unknown";

/// Returned by 16-bit identifier accessors when no owner is attached.
///
/// All bits set, the 16-bit truncation of `-1`.
pub const UNKNOWN_ID_NUMBER: u16 = 0xFFFF;

/// Transport the controller is reached over.
pub const TRANSPORT: &str = "USB";

/// HID report type selector passed alongside report requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportType {
    Input,
    Output,
    Feature,
}

/// Attachment state as seen through the provider link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacadeState {
    Unattached,
    Attached,
}

/// HID facade in front of a peripheral of type `P`.
///
/// Holds nothing but the provider link; share it as `Arc<HidFacade<P>>`.
pub struct HidFacade<P: Peripheral> {
    link: ProviderLink,
    _owner: PhantomData<fn() -> P>,
}

impl<P: Peripheral> HidFacade<P> {
    pub fn new() -> Self {
        Self {
            link: ProviderLink::new(),
            _owner: PhantomData,
        }
    }

    /// Provider link, for the lifecycle code that detaches the facade.
    pub fn link(&self) -> &ProviderLink {
        &self.link
    }

    /// Attach to `provider` if it is a `P`.
    ///
    /// Fails with [`IoError::NoDevice`] and leaves the facade unattached
    /// otherwise.
    pub fn start(&self, provider: &Arc<dyn Service>) -> IoResult {
        if !provider_is::<P>(provider) {
            debug!(provider = provider.name(), "provider is not the expected peripheral");
            return Err(IoError::NoDevice);
        }
        self.link.attach(provider);
        debug!(provider = provider.name(), "HID facade attached");
        Ok(())
    }

    pub fn state(&self) -> FacadeState {
        match self.owner() {
            Some(_) => FacadeState::Attached,
            None => FacadeState::Unattached,
        }
    }

    fn owner(&self) -> Option<Arc<P>> {
        resolve_owner::<P>(&self.link)
    }

    /// Forward a property object to the owner.
    pub fn set_properties(&self, properties: &Value) -> IoResult {
        let owner = self.owner().ok_or(IoError::Unsupported)?;
        owner.set_properties(properties)
    }

    /// Fresh copy of the report descriptor.
    ///
    /// Fails with [`IoError::NoResources`] when the buffer cannot be
    /// reserved.
    pub fn new_report_descriptor(&self) -> IoResult<Vec<u8>> {
        copy_descriptor(REPORT_DESCRIPTOR.len())
    }

    /// Handle a set-report from the host.
    ///
    /// Well-formed rumble and LED commands are forwarded to the owner and its
    /// result returned unchanged. Malformed reports never reach the owner.
    ///
    /// The facade itself does not allocate. A subscriber with `trace` enabled
    /// for this crate formats the forwarded command, and that may allocate.
    pub fn set_report(&self, report: &[u8], report_type: ReportType, options: u32) -> IoResult {
        let Some(owner) = self.owner() else {
            debug!("set_report without an owner");
            return Err(IoError::Unsupported);
        };

        let command = match SetReportCommand::decode(report) {
            Ok(command) => command,
            Err(ProtocolError::UnknownOpcode(opcode)) => {
                warn!(opcode, len = report.len(), "unknown set_report opcode");
                return Err(IoError::Unsupported);
            }
            Err(e) => {
                debug!(error = %e, "rejected set_report");
                return Err(e.into());
            }
        };

        trace!(?command, ?report_type, options, "forwarding set_report");
        match command {
            SetReportCommand::Rumble { left, right } => owner.set_rumble(left, right),
            SetReportCommand::Leds { pattern } => owner.set_leds(pattern),
        }
    }

    /// The controller has no host-readable reports.
    pub fn get_report(&self, _report: &mut [u8], _report_type: ReportType, _options: u32) -> IoResult {
        Err(IoError::Unsupported)
    }

    pub fn new_transport_string(&self) -> &'static str {
        TRANSPORT
    }

    pub fn new_manufacturer_string(&self) -> String {
        self.owner()
            .map_or_else(|| UNKNOWN_STRING.to_owned(), |p| p.manufacturer_string())
    }

    pub fn new_product_string(&self) -> String {
        self.owner()
            .map_or_else(|| UNKNOWN_STRING.to_owned(), |p| p.product_string())
    }

    pub fn new_serial_number_string(&self) -> String {
        self.owner()
            .map_or_else(|| UNKNOWN_STRING.to_owned(), |p| p.serial_number_string())
    }

    pub fn new_vendor_id_number(&self) -> u16 {
        self.owner().map_or(UNKNOWN_ID_NUMBER, |p| p.vendor_id())
    }

    pub fn new_product_id_number(&self) -> u16 {
        self.owner().map_or(UNKNOWN_ID_NUMBER, |p| p.product_id())
    }

    pub fn new_location_id_number(&self) -> u16 {
        self.owner().map_or(UNKNOWN_ID_NUMBER, |p| p.location_id())
    }

    /// Usage from byte 3 of the descriptor.
    pub fn new_primary_usage_number(&self) -> u8 {
        descriptor::primary_usage()
    }

    /// Usage page from byte 1 of the descriptor.
    pub fn new_primary_usage_page_number(&self) -> u8 {
        descriptor::primary_usage_page()
    }
}

impl<P: Peripheral> Default for HidFacade<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Peripheral> std::fmt::Debug for HidFacade<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HidFacade")
            .field("owner", &std::any::type_name::<P>())
            .field("link", &self.link)
            .finish()
    }
}

/// Copy the descriptor into a buffer reserved for `reserve` bytes.
fn copy_descriptor(reserve: usize) -> IoResult<Vec<u8>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(reserve).map_err(|e| {
        warn!(error = %e, "report descriptor allocation failed");
        IoError::NoResources
    })?;
    buf.extend_from_slice(REPORT_DESCRIPTOR);
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::virtual_device::{VirtualPeripheral, VirtualPeripheralConfig};

    struct Hub;

    impl Service for Hub {
        fn name(&self) -> &str {
            "hub"
        }
    }

    fn attached() -> Result<(HidFacade<VirtualPeripheral>, Arc<VirtualPeripheral>), IoError> {
        let pad = Arc::new(VirtualPeripheral::new(VirtualPeripheralConfig::default()));
        let node: Arc<dyn Service> = pad.clone();
        let facade = HidFacade::new();
        facade.start(&node)?;
        Ok((facade, pad))
    }

    #[test]
    fn test_start_rejects_foreign_provider() {
        let facade = HidFacade::<VirtualPeripheral>::new();
        let node: Arc<dyn Service> = Arc::new(Hub);
        assert_eq!(facade.start(&node), Err(IoError::NoDevice));
        assert_eq!(facade.state(), FacadeState::Unattached);
        assert!(!facade.link().is_linked());
    }

    #[test]
    fn test_rumble_forwarded() -> Result<(), IoError> {
        let (facade, pad) = attached()?;
        facade.set_report(&[0x00, 0x04, 0x10, 0x20], ReportType::Output, 0)?;
        assert_eq!(pad.state().rumble, (0x10, 0x20));
        Ok(())
    }

    #[test]
    fn test_leds_forwarded() -> Result<(), IoError> {
        let (facade, pad) = attached()?;
        facade.set_report(&[0x01, 0x03, 0x02], ReportType::Output, 0)?;
        assert_eq!(pad.state().led_pattern, Some(0x02));
        Ok(())
    }

    #[test]
    fn test_malformed_reports_rejected() -> Result<(), IoError> {
        let (facade, pad) = attached()?;
        for report in [
            &[0x00, 0x04, 0x10][..],
            &[0x00, 0x05, 0x10, 0x20],
            &[0x01, 0x04, 0x02, 0x00],
            &[0x02, 0x03, 0x00],
            &[0x00],
            &[],
        ] {
            assert_eq!(
                facade.set_report(report, ReportType::Output, 0),
                Err(IoError::Unsupported),
                "report {report:02X?}"
            );
        }
        let state = pad.state();
        assert_eq!(state.rumble_calls, 0);
        assert_eq!(state.led_calls, 0);
        Ok(())
    }

    #[test]
    fn test_get_report_unsupported() -> Result<(), IoError> {
        let (facade, _pad) = attached()?;
        let mut buf = [0u8; 20];
        assert_eq!(
            facade.get_report(&mut buf, ReportType::Input, 0),
            Err(IoError::Unsupported)
        );
        Ok(())
    }

    #[test]
    fn test_descriptor_is_exact_copy() -> Result<(), IoError> {
        let facade = HidFacade::<VirtualPeripheral>::new();
        let descriptor = facade.new_report_descriptor()?;
        assert_eq!(descriptor, REPORT_DESCRIPTOR);
        assert_eq!(descriptor.capacity(), REPORT_DESCRIPTOR.len());
        Ok(())
    }

    #[test]
    fn test_descriptor_reservation_failure_is_no_resources() {
        assert_eq!(copy_descriptor(usize::MAX), Err(IoError::NoResources));
    }

    #[test]
    fn test_local_answers_without_owner() {
        let facade = HidFacade::<VirtualPeripheral>::new();
        assert_eq!(facade.new_transport_string(), "USB");
        assert_eq!(facade.new_primary_usage_page_number(), 0x01);
        assert_eq!(facade.new_primary_usage_number(), 0x05);
        assert_eq!(facade.new_vendor_id_number(), UNKNOWN_ID_NUMBER);
        assert_eq!(facade.new_serial_number_string(), UNKNOWN_STRING);
    }

    #[test]
    fn test_identity_from_owner() -> Result<(), IoError> {
        let (facade, _pad) = attached()?;
        assert_eq!(facade.new_vendor_id_number(), 0x045E);
        assert_eq!(facade.new_product_id_number(), 0x028E);
        assert_eq!(facade.new_product_string(), "Controller");
        Ok(())
    }

    #[test]
    fn test_detach_degrades() -> Result<(), IoError> {
        let (facade, _pad) = attached()?;
        assert_eq!(facade.state(), FacadeState::Attached);
        facade.link().detach();
        assert_eq!(facade.state(), FacadeState::Unattached);
        assert_eq!(facade.new_manufacturer_string(), UNKNOWN_STRING);
        assert_eq!(
            facade.set_report(&[0x01, 0x03, 0x06], ReportType::Output, 0),
            Err(IoError::Unsupported)
        );
        Ok(())
    }
}
