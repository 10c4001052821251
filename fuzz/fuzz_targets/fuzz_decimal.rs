#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

use fibdrv_core::DecimalBigString;

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }
    let budget = usize::from(data[0] % 60) + 1;
    let split = 1 + usize::from(data[1]) % (data.len() - 1);
    let digits = |bytes: &[u8]| -> String {
        let s: String = bytes.iter().map(|b| char::from(b'0' + b % 10)).collect();
        if s.is_empty() { "0".to_owned() } else { s }
    };
    let (lhs, rhs) = (digits(&data[2..split.max(2)]), digits(&data[split.max(2)..]));

    let modulus = BigUint::from(10u8).pow(u32::try_from(budget).unwrap_or(u32::MAX));
    let big = |s: &str| BigUint::parse_bytes(s.as_bytes(), 10).unwrap_or_default();
    let (l, r) = (big(&lhs), big(&rhs));

    let mut sum: DecimalBigString = lhs.parse().unwrap();
    sum.add(&rhs.parse().unwrap(), budget).unwrap();
    let expected = (&l + &r) % &modulus;
    assert_eq!(sum.to_string(), expected.to_string(), "{lhs} + {rhs} @ {budget}");

    let mut product: DecimalBigString = lhs.parse().unwrap();
    product.multiply(&rhs.parse().unwrap(), budget).unwrap();
    let expected = (&l * &r) % &modulus;
    assert_eq!(product.to_string(), expected.to_string(), "{lhs} * {rhs} @ {budget}");
});
