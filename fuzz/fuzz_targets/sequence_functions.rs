#![no_main]

use ld_core::Error;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Keep inputs short; the functions are linear in the length.
    let xs: Vec<f64> = data
        .chunks_exact(8)
        .take(256)
        .map(|c| f64::from_le_bytes([c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7]]))
        .collect();

    let lse = ld_prob::math::log_sum_exp_slice(&xs);
    if xs.iter().all(|v| !v.is_nan()) && xs.iter().all(|v| *v == f64::NEG_INFINITY) {
        assert_eq!(lse, f64::NEG_INFINITY);
    }

    let mut simplex = vec![0.0; xs.len()];
    match ld_prob::simplex::softmax(&xs, &mut simplex) {
        Ok(()) => {
            if xs.iter().all(|v| v.is_finite()) {
                let total: f64 = simplex.iter().sum();
                assert!((total - 1.0).abs() < 1e-9, "softmax sums to {total}");
                assert!(simplex.iter().all(|s| *s >= 0.0));
            }
        }
        Err(Error::EmptyInput(_)) => assert!(xs.is_empty()),
        Err(e) => panic!("unexpected softmax error: {e}"),
    }
});
