//! Lodestar Kernel: hashing and canonical serialization shared by the
//! search engines and the worlds built on them.
//!
//! - [`hash::canonical_hash`] -- SHA-256 with typed domain separation
//! - [`hash::fingerprint`] -- digest of a state's [`hash::IdentityBytes`]
//! - [`canon::canonical_json_bytes`] -- byte-stable JSON for digests and tests

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod canon;
pub mod hash;
