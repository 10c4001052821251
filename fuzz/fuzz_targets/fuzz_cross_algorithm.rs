#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

use fibdrv_core::{Strategy, MAX_EXACT_INDEX};

fuzz_target!(|data: &[u8]| {
    let Some(&byte) = data.first() else {
        return;
    };
    // Exact domain only; both strategies must produce F(n) itself.
    let n = u64::from(byte) % (MAX_EXACT_INDEX + 1);

    let linear = Strategy::Linear.compute(n);
    let fast = Strategy::FastDoubling.compute(n);
    assert_eq!(linear, fast, "Linear != FastDoubling at n={n}");

    let (mut a, mut b) = (BigUint::from(0u8), BigUint::from(1u8));
    for _ in 0..n {
        let next = &a + &b;
        a = std::mem::replace(&mut b, next);
    }
    assert_eq!(BigUint::from(u128::from(fast)), a, "wrong F({n})");
    assert_eq!(fast.to_string(), a.to_string());
});
