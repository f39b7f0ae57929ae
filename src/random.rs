//! Random strings for sample plaintexts and throwaway keys.

use crate::alphabet::{LOWER, UPPER};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const DIGITS: &[u8] = b"0123456789";

/// Characters drawn from: lowercase, then uppercase, then optionally digits
pub fn charset(with_numbers: bool) -> Vec<u8> {
    let mut set = Vec::with_capacity(LOWER.len() + UPPER.len() + DIGITS.len());
    set.extend_from_slice(LOWER);
    set.extend_from_slice(UPPER);
    if with_numbers {
        set.extend_from_slice(DIGITS);
    }
    set
}

/// Random string of `length` characters using the thread RNG
pub fn generate_random_string(length: usize, with_numbers: bool) -> String {
    random_string_with(&mut rand::thread_rng(), length, with_numbers)
}

/// Reproducible random string for a given seed
pub fn seeded_random_string(seed: u64, length: usize, with_numbers: bool) -> String {
    random_string_with(&mut StdRng::seed_from_u64(seed), length, with_numbers)
}

pub fn random_string_with<R: Rng>(rng: &mut R, length: usize, with_numbers: bool) -> String {
    let set = charset(with_numbers);
    (0..length)
        .map(|_| set[rng.gen_range(0..set.len())] as char)
        .collect()
}
