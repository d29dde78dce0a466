//! Content hashing with domain separation.
//!
//! Every digest in the workspace is produced by [`canonical_hash`]: SHA-256
//! over a null-terminated [`HashDomain`] prefix followed by the payload.

use sha2::{Digest, Sha256};

/// A content-addressed hash with algorithm identifier.
///
/// Format: `"algorithm:hex_digest"` (e.g., `"sha256:abcdef..."`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    full: String,
    colon: usize,
}

impl ContentHash {
    /// Parse from `"algorithm:hex"` format.
    ///
    /// Returns `None` when the colon is missing or either side is empty.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let (algorithm, digest) = s.split_once(':')?;
        if algorithm.is_empty() || digest.is_empty() {
            return None;
        }
        Some(Self {
            full: s.to_string(),
            colon: algorithm.len(),
        })
    }

    fn from_sha256(digest: &[u8]) -> Self {
        let full = format!("sha256:{}", hex::encode(digest));
        Self { full, colon: 6 }
    }

    /// The algorithm portion (e.g., "sha256").
    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.full[..self.colon]
    }

    /// The hex digest portion.
    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.full[self.colon + 1..]
    }

    /// The full `"algorithm:hex_digest"` string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full)
    }
}

/// Domain separator for [`canonical_hash`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashDomain {
    /// Fingerprint of a single domain state (board, grid cell, assignment).
    StateFingerprint,
    /// Deterministic portion of a frontier search's statistics.
    SearchStats,
    /// Front-end run report.
    RunReport,
}

impl HashDomain {
    /// All domains in declaration order.
    pub const ALL: &'static [HashDomain] = &[
        Self::StateFingerprint,
        Self::SearchStats,
        Self::RunReport,
    ];

    /// The raw null-terminated prefix bytes.
    #[must_use]
    pub const fn as_bytes(self) -> &'static [u8] {
        match self {
            Self::StateFingerprint => b"LODESTAR::STATE_FINGERPRINT::V1\0",
            Self::SearchStats => b"LODESTAR::SEARCH_STATS::V1\0",
            Self::RunReport => b"LODESTAR::RUN_REPORT::V1\0",
        }
    }
}

/// Hash `data` under `domain`.
///
/// Result format: `"sha256:<hex_digest>"`.
#[must_use]
pub fn canonical_hash(domain: HashDomain, data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain.as_bytes());
    hasher.update(data);
    ContentHash::from_sha256(&hasher.finalize())
}

/// A stable byte encoding of a state.
///
/// Two values must encode to the same bytes if and only if they are equal.
pub trait IdentityBytes {
    fn identity_bytes(&self) -> Vec<u8>;
}

/// Fingerprint a state under [`HashDomain::StateFingerprint`].
#[must_use]
pub fn fingerprint<T: IdentityBytes + ?Sized>(state: &T) -> ContentHash {
    canonical_hash(HashDomain::StateFingerprint, &state.identity_bytes())
}
