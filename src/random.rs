use std::cell::RefCell;

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

// Thread-local `SmallRng` state.
thread_local! {
    static THREAD_RNG_KEY: RefCell<SmallRng> = RefCell::new(SmallRng::from_os_rng());
}

/// A handle to the thread-local `SmallRng`—similar to `rand::ThreadRng`.
///
/// This is the default stream for callers that do not need cross-thread
/// reproducibility. Each thread gets its own state, so two threads drawing
/// through this handle never contend and never correlate.
#[derive(Debug, Clone)]
pub struct SmallThreadRng;

impl RngCore for SmallThreadRng {
    fn next_u32(&mut self) -> u32 {
        THREAD_RNG_KEY.with(|rng_cell| rng_cell.borrow_mut().next_u32())
    }

    fn next_u64(&mut self) -> u64 {
        THREAD_RNG_KEY.with(|rng_cell| rng_cell.borrow_mut().next_u64())
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        THREAD_RNG_KEY.with(|rng_cell| rng_cell.borrow_mut().fill_bytes(dest))
    }
}

pub fn small_thread_rng() -> SmallThreadRng {
    SmallThreadRng
}

/// Reseeds the calling thread's stream. Draws made through `SmallThreadRng`
/// on this thread after this call are a deterministic function of `seed`.
/// Other threads are unaffected.
pub fn seed_thread_rng(seed: u64) {
    THREAD_RNG_KEY.with(|rng_cell| *rng_cell.borrow_mut() = SmallRng::seed_from_u64(seed));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_stream_is_reproducible() {
        seed_thread_rng(0xD1CE);
        let first: Vec<u64> = (0..8).map(|_| small_thread_rng().next_u64()).collect();

        seed_thread_rng(0xD1CE);
        let second: Vec<u64> = (0..8).map(|_| small_thread_rng().next_u64()).collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seeds_diverge() {
        seed_thread_rng(1);
        let a = small_thread_rng().next_u64();
        seed_thread_rng(2);
        let b = small_thread_rng().next_u64();
        assert_ne!(a, b);
    }

    #[test]
    fn test_threads_do_not_share_state() {
        seed_thread_rng(7);
        let main_draw = small_thread_rng().next_u64();

        // The spawned thread reseeds with the same value; its draw must match
        // the main thread's, proving the state is per-thread rather than
        // a shared stream advanced by both.
        let other_draw = std::thread::spawn(|| {
            seed_thread_rng(7);
            small_thread_rng().next_u64()
        })
        .join()
        .unwrap();

        assert_eq!(main_draw, other_draw);
    }
}
