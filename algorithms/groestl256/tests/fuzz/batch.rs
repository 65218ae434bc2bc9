use bolero::check;
use groestl256::{hash, hash_many};

#[test]
fn fuzz_batch_consistency() {
    check!().with_type::<Vec<Vec<u8>>>().for_each(|inputs| {
        // =============================================================================
        // BATCH EXECUTION (RAYON)
        // =============================================================================

        let batch = hash_many(inputs);

        // =============================================================================
        // SEQUENTIAL REFERENCE
        // =============================================================================

        assert_eq!(batch.len(), inputs.len());
        for (input, digest) in inputs.iter().zip(batch.iter()) {
            assert_eq!(*digest, hash(input), "Batch hash mismatch (Rayon vs Sequential)");
        }
    });
}
