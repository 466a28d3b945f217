//! Property-based tests for set-report dispatch.
//!
//! Uses proptest with 500 cases to check that only well-formed rumble and
//! LED reports reach the owner, and that they arrive with their payload
//! intact.

use std::sync::Arc;

use padbridge_hid::{HidFacade, IoError, ReportType};
use padbridge_test_helpers::prelude::*;
use proptest::prelude::*;

fn attached() -> (HidFacade<RecordingPeripheral>, Arc<RecordingPeripheral>) {
    let (owner, node) = RecordingPeripheral::node();
    let facade = HidFacade::new();
    must_with(facade.start(&node), "attaching recording owner");
    (facade, owner)
}

fn is_well_formed(report: &[u8]) -> bool {
    matches!(report, [0x00, 0x04, _, _] | [0x01, 0x03, _])
}

fn report_type() -> impl Strategy<Value = ReportType> {
    prop_oneof![
        Just(ReportType::Input),
        Just(ReportType::Output),
        Just(ReportType::Feature),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_only_well_formed_reports_reach_owner(
        report in proptest::collection::vec(any::<u8>(), 0..12),
        report_type in report_type(),
        options: u32,
    ) {
        let (facade, owner) = attached();
        let result = facade.set_report(&report, report_type, options);

        if is_well_formed(&report) {
            prop_assert_eq!(result, Ok(()));
            prop_assert_eq!(owner.call_count(), 1);
        } else {
            prop_assert_eq!(result, Err(IoError::Unsupported));
            prop_assert_eq!(owner.call_count(), 0);
        }
    }

    #[test]
    fn prop_rumble_payload_forwarded(left: u8, right: u8) {
        let (facade, owner) = attached();
        let result = facade.set_report(&[0x00, 0x04, left, right], ReportType::Output, 0);
        prop_assert_eq!(result, Ok(()));
        prop_assert_eq!(owner.last_call(), Some(OwnerCall::Rumble { left, right }));
    }

    #[test]
    fn prop_led_payload_forwarded(pattern: u8) {
        let (facade, owner) = attached();
        let result = facade.set_report(&[0x01, 0x03, pattern], ReportType::Output, 0);
        prop_assert_eq!(result, Ok(()));
        prop_assert_eq!(owner.last_call(), Some(OwnerCall::Leds { pattern }));
    }

    #[test]
    fn prop_owner_status_passes_through(code: u32, left: u8, right: u8) {
        let (facade, owner) = attached();
        let status = IoError::from_code(code);
        owner.set_rumble_result(Err(status));
        let result = facade.set_report(&[0x00, 0x04, left, right], ReportType::Output, 0);
        prop_assert_eq!(result.map_err(IoError::code), Err(code));
    }

    #[test]
    fn prop_get_report_never_succeeds(len in 0usize..64, report_type in report_type(), options: u32) {
        let (facade, owner) = attached();
        let mut buf = vec![0u8; len];
        prop_assert_eq!(facade.get_report(&mut buf, report_type, options), Err(IoError::Unsupported));
        prop_assert_eq!(owner.call_count(), 0);
    }

    #[test]
    fn prop_unattached_defaults(report in proptest::collection::vec(any::<u8>(), 0..8)) {
        let facade = HidFacade::<RecordingPeripheral>::new();
        prop_assert_eq!(
            facade.set_report(&report, ReportType::Output, 0),
            Err(IoError::Unsupported)
        );
        prop_assert_eq!(facade.new_location_id_number(), 0xFFFF);
        prop_assert_eq!(facade.new_primary_usage_number(), 0x05);
    }
}
