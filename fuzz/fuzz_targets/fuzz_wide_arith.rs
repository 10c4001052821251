#![no_main]

use libfuzzer_sys::fuzz_target;

use fibdrv_core::WideUint128;

fuzz_target!(|data: &[u8]| {
    if data.len() < 32 {
        return;
    }
    let mut x = [0u8; 16];
    let mut y = [0u8; 16];
    x.copy_from_slice(&data[..16]);
    y.copy_from_slice(&data[16..32]);
    let (a, b) = (u128::from_le_bytes(x), u128::from_le_bytes(y));
    let (wa, wb) = (WideUint128::from_le_bytes(x), WideUint128::from_le_bytes(y));

    assert_eq!(u128::from(wa.wrapping_add(wb)), a.wrapping_add(b));
    assert_eq!(u128::from(wa.saturating_sub(wb)), a.saturating_sub(b));
    assert_eq!(u128::from(wa.wrapping_mul(wb)), a.wrapping_mul(b));
    assert_eq!(wa.to_string(), a.to_string());
});
