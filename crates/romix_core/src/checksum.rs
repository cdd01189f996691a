//! Polynomial checksums for snapshots and display strings.
//!
//! # Responsibility
//! - Provide the `31 * h + field` accumulation used by every feed snapshot.
//! - Keep string hashing stable across platforms and releases.
//!
//! # Invariants
//! - All arithmetic wraps at 32 bits; hashing never panics on overflow.
//! - Strings hash over UTF-16 code units so values match the JVM clients
//!   that consume the same snapshots.
//! - Output depends only on the folded fields. No time or random salt.

use crate::collab::{ApiPostDto, ApiUserDto};

const MULTIPLIER: i32 = 31;
const ACCUMULATOR_SEED: i32 = 1;

/// Hashes one string as `h = 31 * h + unit` over its UTF-16 code units.
///
/// The empty string hashes to `0`.
pub fn compute_checksum(text: &str) -> i32 {
    text.encode_utf16().fold(0_i32, |hash, unit| {
        hash.wrapping_mul(MULTIPLIER).wrapping_add(i32::from(unit))
    })
}

/// Folds a 64-bit integer into 32 bits by xoring its halves.
pub fn hash_i64(value: i64) -> i32 {
    let bits = value as u64;
    (bits ^ (bits >> 32)) as i32
}

/// Rolling accumulator seeded at `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checksum {
    value: i32,
}

impl Checksum {
    pub fn new() -> Self {
        Self {
            value: ACCUMULATOR_SEED,
        }
    }

    /// Folds a pre-hashed field into the accumulator.
    pub fn push_hash(&mut self, field_hash: i32) -> &mut Self {
        self.value = self
            .value
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(field_hash);
        self
    }

    pub fn push_i64(&mut self, value: i64) -> &mut Self {
        self.push_hash(hash_i64(value))
    }

    pub fn push_str(&mut self, value: &str) -> &mut Self {
        self.push_hash(compute_checksum(value))
    }

    pub fn finish(&self) -> i32 {
        self.value
    }
}

impl Default for Checksum {
    fn default() -> Self {
        Self::new()
    }
}

/// Digest of one fetched user and its post page.
///
/// Fold order: user id, user name, then each post id and title in page order.
pub fn snapshot_checksum(user: &ApiUserDto, posts: &[ApiPostDto]) -> i32 {
    let mut checksum = Checksum::new();
    checksum.push_i64(user.id).push_str(&user.name);
    for post in posts {
        checksum.push_i64(post.id).push_str(&post.title);
    }
    checksum.finish()
}
