//! Integration tests for the device session: seek clamping and reads.

use proptest::prelude::*;

use fibdrv_device::{DeviceError, DeviceOptions, FibDevice, FibRecord, SeekOrigin, RECORD_LEN};

fn origin() -> impl Strategy<Value = SeekOrigin> {
    prop_oneof![
        Just(SeekOrigin::Start),
        Just(SeekOrigin::Current),
        Just(SeekOrigin::End),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Any sequence of seeks stays inside [0, max_index].
    #[test]
    fn seek_stays_in_range(
        max_index in 0u64..500,
        moves in prop::collection::vec((any::<i64>(), origin()), 1..20),
    ) {
        let device = FibDevice::new(DeviceOptions { max_index, ..DeviceOptions::default() });
        let mut session = device.open().unwrap();
        for (offset, origin) in moves {
            let pos = session.seek(offset, origin);
            prop_assert!(pos <= max_index);
            prop_assert_eq!(pos, session.position());
        }
    }

    /// Reads return F(position) for every reachable position.
    #[test]
    fn read_matches_engine(pos in 0i64..=100) {
        let device = FibDevice::default();
        let mut session = device.open().unwrap();
        session.seek(pos, SeekOrigin::Start);
        let mut buf = [0u8; RECORD_LEN];
        let n = session.read(&mut buf).unwrap();
        let record = FibRecord::decode(&buf[..n]).unwrap();
        prop_assert_eq!(record.value, fibdrv_core::fibonacci(pos.unsigned_abs()));
    }
}

#[test]
fn seek_boundaries() {
    let device = FibDevice::default();
    let mut session = device.open().unwrap();
    assert_eq!(session.seek(100 + 5, SeekOrigin::Start), 100);
    assert_eq!(session.seek(-5, SeekOrigin::Start), 0);
    assert_eq!(session.seek(10, SeekOrigin::End), 100 - 10);
}

#[test]
fn exclusive_session_lifecycle() {
    let device = FibDevice::default();
    let first = device.open().unwrap();
    assert!(matches!(device.open(), Err(DeviceError::Busy)));
    first.release();
    let second = device.open();
    assert!(second.is_ok());
}
