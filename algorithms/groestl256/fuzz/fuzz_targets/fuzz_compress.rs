#![no_main]

use groestl256::kernels::portable::{compress, p, q, state_from_bytes, state_to_bytes};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // =============================================================================
    // PREPARATION
    // =============================================================================

    // Need a chaining value and a message block
    if data.len() < 128 {
        return;
    }
    let mut h_bytes = [0u8; 64];
    h_bytes.copy_from_slice(&data[..64]);
    let mut block = [0u8; 64];
    block.copy_from_slice(&data[64..128]);

    // =============================================================================
    // 1. BYTE/WORD LAYOUT
    // =============================================================================

    let h = state_from_bytes(&h_bytes);
    assert_eq!(state_to_bytes(&h), h_bytes, "State layout round trip failed");

    // =============================================================================
    // 2. COMPRESSION DEFINITION
    // =============================================================================

    let m = state_from_bytes(&block);
    let mut hm = h;
    for (a, b) in hm.iter_mut().zip(m.iter()) {
        *a ^= b;
    }
    let g = p(&hm);
    let k = q(&m);

    let mut expected = h;
    for i in 0..8 {
        expected[i] ^= g[i] ^ k[i];
    }

    let mut actual = h;
    compress(&mut actual, &block);
    assert_eq!(actual, expected, "compress() disagrees with P/Q definition");
});
