//! Seedable randomness for particle spawning.

/// Source of uniform random numbers in `[0, 1)`.
///
/// Every randomized particle attribute is drawn through this trait so tests can
/// substitute a seeded generator and replay a field exactly.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

const DEFAULT_SEED: u32 = 12345;

/// xorshift32 generator
#[derive(Clone, Debug)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    /// A zero seed would lock the generator at zero forever, so it is swapped
    /// for the default seed.
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { DEFAULT_SEED } else { seed },
        }
    }

    /// Seed from the host: `Math.random()` in the browser, wall clock elsewhere.
    pub fn from_entropy() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self::new((js_sys::Math::random() * u32::MAX as f64) as u32)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let nanos = std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
                .unwrap_or(DEFAULT_SEED);
            Self::new(nanos)
        }
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}

impl Default for Xorshift32 {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl RandomSource for Xorshift32 {
    #[inline]
    fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / (u32::MAX as f64 + 1.0)
    }
}

/// Uniform value in `[lo, hi)`.
#[inline]
pub fn range(rng: &mut dyn RandomSource, lo: f64, hi: f64) -> f64 {
    lo + rng.next_f64() * (hi - lo)
}

/// Uniform index in `0..len`. `len` must be non-zero.
#[inline]
pub fn index(rng: &mut dyn RandomSource, len: usize) -> usize {
    ((rng.next_f64() * len as f64) as usize).min(len - 1)
}
