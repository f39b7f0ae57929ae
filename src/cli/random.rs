use crate::random::{generate_random_string, seeded_random_string};

/// Options for the random command
#[derive(Debug, Clone, Default)]
pub struct RandomOptions {
    pub length: usize,
    pub numbers: bool,
    pub seed: Option<u64>,
}

pub fn random_text(options: &RandomOptions) -> String {
    match options.seed {
        Some(seed) => seeded_random_string(seed, options.length, options.numbers),
        None => generate_random_string(options.length, options.numbers),
    }
}
