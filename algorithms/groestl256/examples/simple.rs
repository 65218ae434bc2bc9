//! Groestl-256 Basic Example
//!
//! Minimal usage: `let digest = groestl256::hash(&data);`

#![allow(clippy::pedantic, clippy::nursery)]

fn main() {
    // Zero boilerplate:
    let data = b"Hello, World!";
    let digest = groestl256::hash(data);

    println!("Data: {:?}", String::from_utf8_lossy(data));
    println!("Hash: {}", hex::encode(digest));

    // Incremental, with a peek at the running digest
    let mut hasher = groestl256::Hasher::new();
    hasher.update(b"Hello, ");
    println!("Partial: {}", hex::encode(hasher.sum()));
    hasher.update(b"World!");
    assert_eq!(hasher.finalize(), digest);
}
