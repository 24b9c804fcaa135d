use crate::config::{MAX_THROW_DISTANCE, MIN_THROW_DISTANCE};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Anything that can hand out throw distances in meters.
pub trait DistanceSource {
    fn next_distance(&mut self) -> u32;
}

/// Uniform throw distances over `MIN_THROW_DISTANCE..=MAX_THROW_DISTANCE`.
#[derive(Debug, Clone)]
pub struct ThrowGenerator {
    rng: ChaCha8Rng,
}

impl ThrowGenerator {
    /// Generator seeded from OS entropy.
    pub fn new() -> Self {
        ThrowGenerator {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Reproducible generator, same seed gives the same sequence of throws.
    pub fn with_seed(seed: u64) -> Self {
        ThrowGenerator {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Default for ThrowGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl DistanceSource for ThrowGenerator {
    fn next_distance(&mut self) -> u32 {
        self.rng.gen_range(MIN_THROW_DISTANCE..=MAX_THROW_DISTANCE)
    }
}

/// Replays a fixed list of distances, cycling when exhausted.
#[cfg(test)]
#[derive(Debug, Clone)]
pub(crate) struct ScriptedDistances {
    distances: Vec<u32>,
    next: usize,
}

#[cfg(test)]
impl ScriptedDistances {
    pub(crate) fn new(distances: &[u32]) -> Self {
        assert!(!distances.is_empty(), "script needs at least one distance");
        ScriptedDistances {
            distances: distances.to_vec(),
            next: 0,
        }
    }
}

#[cfg(test)]
impl DistanceSource for ScriptedDistances {
    fn next_distance(&mut self) -> u32 {
        let distance = self.distances[self.next % self.distances.len()];
        self.next += 1;
        distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_distances_stay_in_range() {
        let mut generator = ThrowGenerator::with_seed(7);
        for _ in 0..10_000 {
            let d = generator.next_distance();
            assert!((MIN_THROW_DISTANCE..=MAX_THROW_DISTANCE).contains(&d), "out of range: {}", d);
        }
    }

    #[test]
    fn test_every_distance_reachable() {
        // 51 values, 20k draws: every bucket should be hit
        let mut generator = ThrowGenerator::with_seed(1234);
        let seen: HashSet<u32> = (0..20_000).map(|_| generator.next_distance()).collect();
        assert_eq!(seen.len(), (MAX_THROW_DISTANCE - MIN_THROW_DISTANCE + 1) as usize);
        assert!(seen.contains(&MIN_THROW_DISTANCE));
        assert!(seen.contains(&MAX_THROW_DISTANCE));
    }

    #[test]
    fn test_seeded_generators_agree() {
        let mut a = ThrowGenerator::with_seed(42);
        let mut b = ThrowGenerator::with_seed(42);
        let seq_a: Vec<u32> = (0..20).map(|_| a.next_distance()).collect();
        let seq_b: Vec<u32> = (0..20).map(|_| b.next_distance()).collect();
        assert_eq!(seq_a, seq_b);
    }

    #[test]
    fn test_scripted_distances_cycle() {
        let mut script = ScriptedDistances::new(&[80, 65]);
        assert_eq!(script.next_distance(), 80);
        assert_eq!(script.next_distance(), 65);
        assert_eq!(script.next_distance(), 80);
    }
}
