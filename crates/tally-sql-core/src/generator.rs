//! Random row id generation.

use rand::RngExt;

/// Characters an id is drawn from.
const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Length of a generated id.
pub const ID_LENGTH: usize = 32;

/// Generates a 32-character lowercase alphanumeric id.
///
/// Ids contain no quote or statement separator, so they always survive
/// literal quoting unchanged.
#[must_use]
pub fn generate() -> String {
    let mut rng = rand::rng();
    (0..ID_LENGTH)
        .map(|_| char::from(ALPHABET[rng.random_range(0..ALPHABET.len())]))
        .collect()
}
