//! Hash domain governance lock tests.
//!
//! Proves:
//! 1. The domain set has the expected count (catches forgotten additions to `ALL`)
//! 2. All domain byte strings are unique
//! 3. All domains are null-terminated
//! 4. All domains follow the `LODESTAR::*::V1\0` naming convention
//! 5. No raw `LODESTAR::` domain literals in production source outside `hash.rs`

use std::collections::BTreeSet;

use lodestar_kernel::hash::{canonical_hash, fingerprint, HashDomain};
use lodestar_worlds::tic_tac_toe::{Mark, TicTacToe};

#[test]
fn hash_domain_canonical_set_count() {
    assert_eq!(
        HashDomain::ALL.len(),
        3,
        "expected 3 domain variants; if you added a new domain, update this count"
    );
}

#[test]
fn hash_domain_all_unique_bytes() {
    let mut seen = BTreeSet::new();
    for domain in HashDomain::ALL {
        assert!(
            seen.insert(domain.as_bytes()),
            "duplicate domain bytes: {domain:?}"
        );
    }
}

#[test]
fn hash_domain_all_null_terminated() {
    for domain in HashDomain::ALL {
        assert!(
            domain.as_bytes().ends_with(&[0]),
            "{domain:?} is not null-terminated"
        );
    }
}

#[test]
fn hash_domain_all_follow_naming_convention() {
    for domain in HashDomain::ALL {
        let bytes = domain.as_bytes();
        assert!(
            bytes.starts_with(b"LODESTAR::"),
            "{domain:?} does not start with LODESTAR::"
        );
        assert!(bytes.ends_with(b"::V1\0"), "{domain:?} does not end with ::V1\\0");
    }
}

#[test]
fn same_payload_differs_across_domains() {
    let payload = b"identical payload";
    let digests: BTreeSet<String> = HashDomain::ALL
        .iter()
        .map(|&domain| canonical_hash(domain, payload).to_string())
        .collect();
    assert_eq!(digests.len(), HashDomain::ALL.len());
}

#[test]
fn board_fingerprint_is_stable_and_sensitive() {
    let mut game = TicTacToe::new();
    let empty = fingerprint(&game);
    assert_eq!(empty, fingerprint(&TicTacToe::new()));
    assert_eq!(empty.algorithm(), "sha256");
    assert_eq!(empty.hex_digest().len(), 64);

    game.play(4, Mark::X).unwrap();
    assert_ne!(fingerprint(&game), empty);
}

/// Scan kernel/, search/, worlds/ source for `b"LODESTAR::` literals.
/// The only file allowed to contain them is `hash.rs`.
#[test]
fn no_raw_domain_literals_outside_authority() {
    let production_dirs = [
        concat!(env!("CARGO_MANIFEST_DIR"), "/../../kernel/src"),
        concat!(env!("CARGO_MANIFEST_DIR"), "/../../search/src"),
        concat!(env!("CARGO_MANIFEST_DIR"), "/../../worlds/src"),
    ];

    let pattern = "b\"LODESTAR::";
    let authority_file = "hash.rs";
    let mut violations = Vec::new();

    for dir in &production_dirs {
        scan_dir_for_pattern(dir, pattern, authority_file, &mut violations);
    }

    assert!(
        violations.is_empty(),
        "raw LODESTAR:: domain literals found outside {authority_file}:\n{}",
        violations.join("\n")
    );
}

fn scan_dir_for_pattern(
    dir: &str,
    pattern: &str,
    authority_file: &str,
    violations: &mut Vec<String>,
) {
    let dir_path = std::path::Path::new(dir);
    if !dir_path.exists() {
        return;
    }
    for path in walkdir(dir_path) {
        if path.extension().and_then(|e| e.to_str()) != Some("rs") {
            continue;
        }
        if path.file_name().and_then(|n| n.to_str()) == Some(authority_file) {
            continue;
        }
        let Ok(content) = std::fs::read_to_string(&path) else {
            continue;
        };
        for (i, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.starts_with("//") {
                continue;
            }
            if trimmed.contains(pattern) {
                violations.push(format!("  {}:{}: {}", path.display(), i + 1, trimmed));
            }
        }
    }
}

/// Recursive directory listing.
fn walkdir(dir: &std::path::Path) -> Vec<std::path::PathBuf> {
    let mut results = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                results.extend(walkdir(&path));
            } else {
                results.push(path);
            }
        }
    }
    results
}
