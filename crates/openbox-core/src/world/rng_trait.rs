//! RNG trait abstraction for the simulation
//!
//! Lets the engine run with any generator:
//! - a seeded Xoshiro for deterministic replay
//! - `rand::thread_rng()` for interactive play
//! - scripted generators in tests

/// Random number generator trait for the simulation
pub trait SimRng {
    /// Generate random boolean with 50% probability
    fn gen_bool(&mut self) -> bool;

    /// Generate random f32 in [0.0, 1.0)
    fn gen_f32(&mut self) -> f32;

    /// Check if random value is less than probability threshold
    fn check_probability(&mut self, probability: f32) -> bool {
        self.gen_f32() < probability
    }
}

// Blanket implementation for any type implementing rand::Rng
impl<T: ?Sized + rand::Rng> SimRng for T {
    fn gen_bool(&mut self) -> bool {
        rand::Rng::r#gen(self)
    }

    fn gen_f32(&mut self) -> f32 {
        rand::Rng::r#gen(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    #[test]
    fn test_sim_rng_gen_bool() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(12345);

        let mut seen_true = false;
        let mut seen_false = false;

        for _ in 0..100 {
            if SimRng::gen_bool(&mut rng) {
                seen_true = true;
            } else {
                seen_false = true;
            }
        }

        assert!(seen_true);
        assert!(seen_false);
    }

    #[test]
    fn test_sim_rng_gen_f32_range() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(12345);

        for _ in 0..100 {
            let val = rng.gen_f32();
            assert!((0.0..1.0).contains(&val));
        }
    }

    #[test]
    fn test_check_probability_extremes() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(12345);

        for _ in 0..100 {
            assert!(rng.check_probability(1.0));
            assert!(!rng.check_probability(0.0));
        }
    }

    #[test]
    fn test_check_probability_distribution() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(7);
        let hits = (0..20_000).filter(|_| rng.check_probability(0.1)).count();

        // 10% of 20k, generous band
        assert!((1_700..2_300).contains(&hits), "hits = {hits}");
    }

    #[test]
    fn test_usable_as_trait_object() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(1);
        let dyn_rng: &mut dyn SimRng = &mut rng;
        let _ = dyn_rng.gen_bool();
        assert!(dyn_rng.check_probability(1.0));
    }

    #[test]
    fn test_sim_rng_deterministic() {
        let mut rng1 = Xoshiro256StarStar::seed_from_u64(42);
        let mut rng2 = Xoshiro256StarStar::seed_from_u64(42);

        for _ in 0..100 {
            assert_eq!(SimRng::gen_bool(&mut rng1), SimRng::gen_bool(&mut rng2));
            assert_eq!(rng1.gen_f32(), rng2.gen_f32());
        }
    }
}
