//! Random data-generation primitives for TPC-C: uniform and non-uniform
//! (NURand) integer draws, fixed-point and string samplers, unique-id
//! selection, and the synthetic customer last-name builder. Each worker owns
//! its own random stream and NURand constants; nothing in this crate is
//! global mutable state.

pub mod error;
pub mod generator;
pub mod names;
pub mod nurand;
pub mod random;
pub mod sampler;

#[doc(hidden)]
pub mod logger;

pub mod prelude {
    pub use crate::error::RandError;
    pub use crate::generator::TPCCRng;
    pub use crate::names::{make_last_name, make_random_last_name, SYLLABLES};
    pub use crate::nurand::{
        nurand_int, valid_c_run, NURandConstants, NURandField, MAX_C_RUN_DRAWS,
    };
    pub use crate::random::{seed_thread_rng, small_thread_rng, SmallThreadRng};
    pub use crate::sampler::{
        make_random_astring, make_random_astrings, make_random_nstring, select_unique_ids,
        shuffle, urand_fixed_point, urand_int, urand_int_excluding,
    };
}
