//! Customer last-name construction, TPC-C 4.3.2.3.

use rand::Rng;

use crate::nurand::{nurand_int, NURandConstants, NURandField};

/// Syllables composing customer last names. The three base-10 digits of the
/// customer number index this table directly.
pub const SYLLABLES: [&str; 10] = [
    "BAR", "OUGHT", "ABLE", "PRI", "PRES", "ESE", "ANTI", "CALLY", "ATION", "EING",
];

/// The last name for customer number `num`. Not actually random: the same
/// input always yields the same name.
pub fn make_last_name(num: u64) -> String {
    assert!(num <= 999);
    let mut name = String::with_capacity(15);
    for i in [num / 100, (num % 100) / 10, num % 10] {
        name.push_str(SYLLABLES[i as usize]);
    }
    name
}

/// A last name for a NURand-distributed customer number in
/// `[0, min(999, max_cid - 1)]`, skewed toward the session's C_LAST
/// constant.
pub fn make_random_last_name<R: Rng>(
    rng: &mut R,
    constants: &NURandConstants,
    max_cid: u64,
) -> String {
    assert!(max_cid >= 1);
    let min_cid = 999.min(max_cid - 1);
    make_last_name(nurand_int(rng, constants, NURandField::CLast, 0, min_cid))
}
