#![no_main]

use groestl256::Hasher;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // Calculate one-shot hash as reference
    let reference_hash = groestl256::hash(data);

    // Chunk size is derived from the first byte (1 to 255)
    let chunk_size = (data[0] as usize % 255) + 1;

    let mut hasher = Hasher::new();
    for chunk in data.chunks(chunk_size) {
        hasher.update(chunk);
        // Speculative sums must not perturb the running state
        let _ = hasher.sum();
    }

    let streaming_hash = hasher.finalize();

    // They must be identical
    assert_eq!(
        reference_hash, streaming_hash,
        "Streaming and One-Shot approaches differ!"
    );
});
