//! Stateless, seeded randomness for render-time choices.
//!
//! Every random decision the renderer makes (hallucinatory glyphs, shimmering
//! monster colours) is a pure function of a seed built with [`compute_seed`].
//! Redrawing the same frame therefore reproduces the same picture.

pub trait RngOracle: Send + Sync {
    fn next_u32(&self, seed: u64) -> u32;

    /// Uniform index in `0..len`. Returns 0 when `len` is 0.
    fn pick(&self, seed: u64, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        (self.next_u32(seed) as usize) % len
    }

    /// Fair coin.
    fn coin(&self, seed: u64) -> bool {
        self.next_u32(seed) & 1 == 1
    }
}

/// PCG-XSH-RR generator evaluated for a single step from the given seed.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::output(Self::step(seed))
    }
}

/// Mixes the render seed with a frame number, a subject key and a context value.
///
/// * `key` identifies what the roll is for: a packed cell position or a monster id.
/// * `context` separates independent rolls for the same subject, such as retry attempts.
pub fn compute_seed(seed: u64, frame: u64, key: u32, context: u32) -> u64 {
    let mut hash = seed;
    hash ^= frame.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (key as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    // fmix64
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash
}
