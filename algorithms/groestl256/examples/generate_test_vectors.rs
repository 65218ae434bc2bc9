//! Generator for Groestl-256 test vectors
//!
//! Generates the canonical JSON test vectors used by `tests/test_vectors.json`.
//! Includes published answers, the padding boundaries, and multi-block inputs.
#![allow(clippy::unwrap_used)]
use serde_json::{json, Value};

const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod \
                     tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, \
                     quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo \
                     consequat. Duis aute irure dolor in reprehenderit in voluptate velit esse \
                     cillum dolore eu fugiat nulla pariatur. Excepteur sint occaecat cupidatat non \
                     proident, sunt in culpa qui officia deserunt mollit anim id est laborum.";

fn vector(name: &str, input: &str, data: &[u8]) -> Value {
    json!({
        "name": name,
        "input": input,
        "hash": hex::encode(groestl256::hash(data))
    })
}

fn main() {
    let mut vectors = Vec::new();

    // =========================================================================
    // 1. BASIC VECTORS
    // =========================================================================

    // Validates empty input handling (padding/length encoding)
    vectors.push(vector("empty", "", b""));
    vectors.push(vector("basic", "abc", b"abc"));

    let fox = "The quick brown fox jumps over the lazy dog";
    vectors.push(vector("fox", fox, fox.as_bytes()));

    // Published 32-byte answer
    let kat = "346e80880ecc9e84ce6022cf3756a1df1756840ef7ea65c644c99f6d3da31f2b";
    vectors.push(vector(
        "kat_32",
        &format!("hex:{kat}"),
        &hex::decode(kat).unwrap(),
    ));

    // 445 bytes: 61-byte tail takes the two-block padding path
    vectors.push(vector("lorem_445", LOREM, LOREM.as_bytes()));

    // =========================================================================
    // 2. BLOCK ALIGNMENT
    // =========================================================================

    vectors.push(vector("exact_64_zero", "EXACT_64_ZERO", &[0x00u8; 64]));
    vectors.push(vector("exact_512_one", "EXACT_512_ONE", &[0x01u8; 512]));
    vectors.push(vector("unaligned_63_two", "UNALIGNED_63_TWO", &[0x02u8; 63]));
    vectors.push(vector("medium_256", "MEDIUM_256_A", &[b'A'; 256]));
    vectors.push(vector("large", "LARGE_1KB", &[b'A'; 1024]));

    let sequence: Vec<u8> = (0..=255u8).cycle().take(300).collect();
    vectors.push(vector("sequence_300", "SEQ_300", &sequence));

    // =========================================================================
    // 3. PADDING BOUNDARIES
    // =========================================================================

    for n in [1usize, 55, 56, 57, 63, 64, 65, 119, 120, 127, 128, 1000] {
        vectors.push(vector(
            &format!("a_{n}"),
            &format!("A_{n}"),
            &vec![b'a'; n],
        ));
    }

    let output = json!({ "vectors": vectors });
    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}
