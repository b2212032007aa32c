//! Golden test vector validation

use playfair::alphabet::AlphabetPolicy;
use playfair::cipher;
use playfair::digraph;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct GoldenVector {
    key: String,
    alphabet: String,
    plaintext: String,
    ciphertext: String,
    comment: String,
}

fn load_golden_vectors() -> Vec<GoldenVector> {
    let json_data = include_str!("../testdata/golden-vectors.json");
    serde_json::from_str(json_data).expect("failed to load golden vectors")
}

fn policy_for(name: &str) -> AlphabetPolicy {
    match name {
        "merge-ij" => AlphabetPolicy::MergeJIntoI,
        "omit-q" => AlphabetPolicy::OmitQ,
        other => panic!("unknown alphabet policy in vector: {}", other),
    }
}

#[test]
fn test_golden_vectors() {
    let vectors = load_golden_vectors();
    println!("Testing {} golden vectors", vectors.len());

    let mut passed = 0;
    let mut failed = 0;

    for (i, vector) in vectors.iter().enumerate() {
        let policy = policy_for(&vector.alphabet);

        // Exact ciphertext match
        let encrypted = cipher::encrypt(&vector.key, &vector.plaintext, policy);
        if encrypted.as_str() != vector.ciphertext {
            eprintln!("Vector {}: FAILED - ciphertext mismatch", i);
            eprintln!("  Comment: {}", vector.comment);
            eprintln!("  Expected: {}", vector.ciphertext);
            eprintln!("  Actual:   {}", encrypted);
            failed += 1;
            continue;
        }

        // Decryption recovers the normalized plaintext digraphs
        let decrypted = cipher::decrypt(&vector.key, &vector.ciphertext, policy);
        let expected = digraph::normalize(&vector.plaintext, policy, true);
        if decrypted != expected {
            eprintln!("Vector {}: FAILED - decrypted digraph mismatch", i);
            eprintln!("  Comment: {}", vector.comment);
            eprintln!("  Expected: {}", expected);
            eprintln!("  Actual:   {}", decrypted);
            failed += 1;
            continue;
        }

        passed += 1;
    }

    let total = passed + failed;
    println!("Results: {} passed, {} failed out of {} total", passed, failed, total);

    assert_eq!(failed, 0, "Some golden vectors failed validation");
    assert!(passed > 0, "No golden vectors were tested");
}
