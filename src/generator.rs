//! Per-worker generation context.
//!
//! A `TPCCRng` bundles one owned random stream with the one active
//! `NURandConstants` set, which is what a loader partition or an emulated
//! terminal needs to synthesize rows. Contexts are cheap; parallel callers
//! build one per worker instead of sharing.

use std::collections::HashSet;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::error::RandError;
use crate::names::{make_last_name, make_random_last_name};
use crate::nurand::{nurand_int, NURandConstants, NURandField};
use crate::sampler::{
    make_random_astring, make_random_astrings, make_random_nstring, select_unique_ids, shuffle,
    urand_fixed_point, urand_int, urand_int_excluding,
};

pub struct TPCCRng<R: Rng = SmallRng> {
    rng: R,
    constants: NURandConstants,
}

impl TPCCRng<SmallRng> {
    /// A load-phase context over a stream seeded from the OS.
    pub fn for_load() -> TPCCRng<SmallRng> {
        Self::for_load_with(SmallRng::from_os_rng())
    }

    /// A reproducible load-phase context: the constants and every
    /// subsequent draw are a deterministic function of `seed`.
    pub fn seeded(seed: u64) -> TPCCRng<SmallRng> {
        Self::for_load_with(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> TPCCRng<R> {
    /// A load-phase context over a caller-supplied stream; the constants are
    /// drawn from that stream.
    pub fn for_load_with(mut rng: R) -> TPCCRng<R> {
        let constants = NURandConstants::make_for_load(&mut rng);
        TPCCRng { rng, constants }
    }

    /// A run-phase context: constants drawn under the delta rule against the
    /// load-phase set the database was populated with.
    pub fn for_run_with(mut rng: R, load: &NURandConstants) -> Result<TPCCRng<R>, RandError> {
        let constants = NURandConstants::make_for_run(&mut rng, load)?;
        Ok(TPCCRng { rng, constants })
    }

    /// A context around externally supplied constants, e.g. a set
    /// deserialized from the load run.
    pub fn with_constants(rng: R, constants: NURandConstants) -> TPCCRng<R> {
        TPCCRng { rng, constants }
    }

    /// The active constants.
    pub fn constants(&self) -> &NURandConstants {
        &self.constants
    }

    /// Replaces the active constants, e.g. when a context transitions from
    /// populating rows to driving transactions.
    pub fn set_constants(&mut self, constants: NURandConstants) {
        self.constants = constants;
    }

    /// A uniform draw from `[x, y]`.
    pub fn urand_int<T>(&mut self, x: T, y: T) -> T
    where
        T: rand::distr::uniform::SampleUniform + PartialOrd + Copy,
    {
        urand_int(&mut self.rng, x, y)
    }

    /// A uniform draw from `[x, y]` that never returns `excluding`.
    pub fn urand_int_excluding(&mut self, x: u64, y: u64, excluding: u64) -> u64 {
        urand_int_excluding(&mut self.rng, x, y, excluding)
    }

    /// A uniform fixed-point draw with `decimal_places` digits of precision.
    pub fn urand_fixed_point(&mut self, decimal_places: u32, minimum: f64, maximum: f64) -> f64 {
        urand_fixed_point(&mut self.rng, decimal_places, minimum, maximum)
    }

    /// `num_unique` distinct ids from `[minimum, maximum]`.
    pub fn select_unique_ids(
        &mut self,
        num_unique: u64,
        minimum: u64,
        maximum: u64,
    ) -> Result<HashSet<u64>, RandError> {
        select_unique_ids(&mut self.rng, num_unique, minimum, maximum)
    }

    /// NURand draw for an untyped `A` value. Fails with
    /// `UnsupportedParameter` when `a` is not 255, 1023, or 8191.
    pub fn nurand(&mut self, a: u64, x: u64, y: u64) -> Result<u64, RandError> {
        let field = NURandField::from_a(a)?;
        Ok(nurand_int(&mut self.rng, &self.constants, field, x, y))
    }

    /// NURand draw for a statically known field.
    pub fn nurand_field(&mut self, field: NURandField, x: u64, y: u64) -> u64 {
        nurand_int(&mut self.rng, &self.constants, field, x, y)
    }

    /// A random lowercase alphabetic string with length in
    /// `[min_len, max_len]`.
    pub fn astring(&mut self, min_len: usize, max_len: usize) -> String {
        make_random_astring(&mut self.rng, min_len, max_len)
    }

    /// A random numeric string with length in `[min_len, max_len]`.
    pub fn nstring(&mut self, min_len: usize, max_len: usize) -> String {
        make_random_nstring(&mut self.rng, min_len, max_len)
    }

    /// One astring per index pair of the parallel length slices.
    pub fn astrings(&mut self, min_lens: &[usize], max_lens: &[usize]) -> Vec<String> {
        make_random_astrings(&mut self.rng, min_lens, max_lens)
    }

    /// The deterministic last name for customer number `num`.
    pub fn last_name(&self, num: u64) -> String {
        make_last_name(num)
    }

    /// A NURand-distributed last name capped at `max_cid`.
    pub fn random_last_name(&mut self, max_cid: u64) -> String {
        make_random_last_name(&mut self.rng, &self.constants, max_cid)
    }

    /// In-place Fisher-Yates shuffle.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        shuffle(&mut self.rng, items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nurand::valid_c_run;

    #[test]
    fn test_seeded_contexts_are_identical() {
        let mut a = TPCCRng::seeded(99);
        let mut b = TPCCRng::seeded(99);
        assert_eq!(a.constants(), b.constants());
        for _ in 0..100 {
            assert_eq!(a.urand_int(1u64, 3000), b.urand_int(1u64, 3000));
            assert_eq!(a.nurand(1023, 1, 3000), b.nurand(1023, 1, 3000));
            assert_eq!(a.random_last_name(3000), b.random_last_name(3000));
            assert_eq!(a.astring(5, 10), b.astring(5, 10));
        }
    }

    #[test]
    fn test_nurand_unsupported_parameter_is_catchable() {
        let mut ctx = TPCCRng::seeded(1);
        assert_eq!(
            ctx.nurand(7, 0, 10),
            Err(RandError::UnsupportedParameter(7))
        );
        // The context stays usable after the error.
        assert!(ctx.nurand(255, 0, 10).is_ok());
    }

    #[test]
    fn test_nurand_bounds() {
        let mut ctx = TPCCRng::seeded(2);
        for a in [255, 1023, 8191] {
            for _ in 0..500 {
                let v = ctx.nurand(a, 1, 3000).unwrap();
                assert!((1..=3000).contains(&v));
            }
        }
    }

    #[test]
    fn test_run_context_from_load_constants() {
        let load = TPCCRng::seeded(3);
        let load_constants = *load.constants();
        let run =
            TPCCRng::for_run_with(rand::rngs::SmallRng::seed_from_u64(4), &load_constants)
                .unwrap();
        assert!(valid_c_run(run.constants().c_last, load_constants.c_last));
    }

    #[test]
    fn test_set_constants_replaces_active_set() {
        let mut ctx = TPCCRng::seeded(5);
        let replacement = NURandConstants {
            c_last: 42,
            c_id: 7,
            order_line_item_id: 4096,
        };
        ctx.set_constants(replacement);
        assert_eq!(ctx.constants(), &replacement);
    }

    #[test]
    fn test_method_surface_round_trip() {
        let mut ctx = TPCCRng::seeded(6);
        assert_ne!(ctx.urand_int_excluding(1, 5, 3), 3);
        let price = ctx.urand_fixed_point(2, 1.0, 100.0);
        assert!((1.0..=100.0).contains(&price));
        let ids = ctx.select_unique_ids(5, 1, 5).unwrap();
        assert_eq!(ids.len(), 5);
        assert_eq!(ctx.last_name(157), "OUGHTESECALLY");
        let digits = ctx.nstring(4, 4);
        assert_eq!(digits.len(), 4);
        let mut items = [1, 2, 3, 4];
        ctx.shuffle(&mut items);
        let mut sorted = items;
        sorted.sort_unstable();
        assert_eq!(sorted, [1, 2, 3, 4]);
    }
}
