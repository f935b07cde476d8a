//! Non-uniform random number generation, TPC-C 2.1.6.
//!
//! NURand(A, x, y) = (((random(0, A) | random(x, y)) + C) % (y - x + 1)) + x
//! where `|` is bitwise OR and C is a per-session constant drawn once and
//! reused by every terminal of that session. A is fixed per field:
//! 255 for C_LAST, 1023 for C_ID, 8191 for OL_I_ID. The load and run phases
//! of a benchmark use different C values for C_LAST, related by the delta
//! rule in 2.1.6.1.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::RandError;
use crate::log_warn;
use crate::sampler::urand_int;

/// Maximum candidate draws in `make_for_run` before the stream is declared
/// broken. The valid delta region covers about 43% of the 256-value space,
/// so a healthy stream clears this in a handful of draws.
pub const MAX_C_RUN_DRAWS: u32 = 1000;

/// The three NURand-controlled fields and their TPC-C `A` constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NURandField {
    CLast,
    CId,
    OrderLineItemId,
}

impl NURandField {
    /// The `A` constant for this field.
    pub const fn a(self) -> u64 {
        match self {
            NURandField::CLast => 255,
            NURandField::CId => 1023,
            NURandField::OrderLineItemId => 8191,
        }
    }

    /// Maps an untyped `A` value onto a field. `a` may be caller-controlled,
    /// so an unknown value is a reportable error rather than a panic.
    pub fn from_a(a: u64) -> Result<NURandField, RandError> {
        match a {
            255 => Ok(NURandField::CLast),
            1023 => Ok(NURandField::CId),
            8191 => Ok(NURandField::OrderLineItemId),
            _ => Err(RandError::UnsupportedParameter(a)),
        }
    }
}

/// Per-session NURand constants: `c_last` in [0, 255], `c_id` in [0, 1023],
/// `order_line_item_id` in [0, 8191]. Drawn once per load or run session and
/// immutable afterwards. Serializable so a loader can hand its load-phase
/// constants to the driver process that derives the run-phase set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NURandConstants {
    pub c_last: u64,
    pub c_id: u64,
    pub order_line_item_id: u64,
}

impl NURandConstants {
    /// Constants for loading the database: all three fields independent
    /// uniform draws.
    pub fn make_for_load<R: Rng>(rng: &mut R) -> NURandConstants {
        NURandConstants {
            c_last: urand_int(rng, 0, 255),
            c_id: urand_int(rng, 0, 1023),
            order_line_item_id: urand_int(rng, 0, 8191),
        }
    }

    /// Constants for running transactions against a database loaded with
    /// `load`: `c_last` is rejection-sampled until the delta rule holds,
    /// the other two fields are fresh unconstrained draws.
    pub fn make_for_run<R: Rng>(
        rng: &mut R,
        load: &NURandConstants,
    ) -> Result<NURandConstants, RandError> {
        let mut attempts: u32 = 0;
        let c_last = loop {
            let candidate = urand_int(rng, 0, 255);
            attempts += 1;
            if valid_c_run(candidate, load.c_last) {
                break candidate;
            }
            if attempts >= MAX_C_RUN_DRAWS {
                log_warn!(
                    "{} c_run draws rejected against c_load {}",
                    attempts,
                    load.c_last
                );
                return Err(RandError::DegenerateStream { attempts });
            }
        };

        Ok(NURandConstants {
            c_last,
            c_id: urand_int(rng, 0, 1023),
            order_line_item_id: urand_int(rng, 0, 8191),
        })
    }

    /// The C constant applied by `nurand_int` for `field`.
    pub fn get(&self, field: NURandField) -> u64 {
        match field {
            NURandField::CLast => self.c_last,
            NURandField::CId => self.c_id,
            NURandField::OrderLineItemId => self.order_line_item_id,
        }
    }
}

/// Delta rule from TPC-C 2.1.6.1: a run-phase C_LAST constant is valid
/// against the load-phase one iff their absolute difference lies in
/// [65, 119] and is neither 96 nor 112.
pub fn valid_c_run(c_run: u64, c_load: u64) -> bool {
    let delta = c_run.abs_diff(c_load);
    (65..=119).contains(&delta) && delta != 96 && delta != 112
}

/// A non-uniform random number in `[x, y]`, skewed toward the session
/// constant for `field`.
pub fn nurand_int<R: Rng>(
    rng: &mut R,
    constants: &NURandConstants,
    field: NURandField,
    x: u64,
    y: u64,
) -> u64 {
    assert!(x <= y);
    let rand_a = urand_int(rng, 0, field.a());
    let rand_xy = urand_int(rng, x, y);
    (((rand_a | rand_xy) + constants.get(field)) % (y - x + 1)) + x
}
