use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

/// Length of every generated key, in characters.
pub const KEY_LEN: usize = 64;

/// Unique-key generator for seeding a key-value testbed.
///
/// Draws fixed-length keys uniformly over `[A-Za-z0-9]` and rejects
/// duplicates against the set of keys already handed out in this run.
/// With 62^64 possible keys a redraw is astronomically unlikely, so the
/// rejection loop is unbounded by design of the key space, not by code.
pub struct KeyGenerator {
    rng: StdRng,
    seen: HashSet<String>,
    redraws: u64,
}

impl KeyGenerator {
    /// Create a generator. A nonzero `seed` makes the key sequence
    /// reproducible across runs; `seed == 0` pulls from OS entropy.
    pub fn new(seed: u64) -> Self {
        let rng = if seed != 0 {
            StdRng::seed_from_u64(seed)
        } else {
            StdRng::from_entropy()
        };
        Self {
            rng,
            seen: HashSet::new(),
            redraws: 0,
        }
    }

    /// Draw the next key, redrawing until it is distinct from every key
    /// previously returned by this generator.
    pub fn next_key(&mut self) -> String {
        loop {
            let candidate: String = (&mut self.rng)
                .sample_iter(Alphanumeric)
                .take(KEY_LEN)
                .map(char::from)
                .collect();

            if self.seen.insert(candidate.clone()) {
                return candidate;
            }

            self.redraws += 1;
            tracing::debug!(redraws = self.redraws, "duplicate key drawn, retrying");
        }
    }

    /// Number of candidates rejected as duplicates so far.
    pub fn redraws(&self) -> u64 {
        self.redraws
    }

    /// Number of distinct keys handed out so far.
    pub fn emitted(&self) -> usize {
        self.seen.len()
    }
}
