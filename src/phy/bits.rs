// Bit symbol helpers
// Any character other than '1' counts as a zero bit; input is never rejected.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub type Bit = bool;

/// Convert a bit string into bit symbols ('1' -> true, anything else -> false)
pub fn parse_bits(data: &str) -> Vec<Bit> {
    data.chars().map(|c| c == '1').collect()
}

/// Render bit symbols back as a '0'/'1' string
pub fn bits_to_string(bits: &[Bit]) -> String {
    bits.iter()
        .map(|&bit| if bit { '1' } else { '0' })
        .collect()
}

/// Generate `len` reproducible pseudo-random bits
pub fn random_bits(len: usize, seed: u64) -> Vec<Bit> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.random_bool(0.5)).collect()
}
