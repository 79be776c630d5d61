// src/random.rs
use rand::{Error, RngCore, SeedableRng};

const N: usize = 624;
const M: usize = 397;
const MATRIX_A: u32 = 0x9908_b0df;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7fff_ffff;

/// Seed used by the polar map so every run produces the same image
pub const DEFAULT_SEED: u64 = 10086;

/// Mersenne Twister (MT19937) with array-based seeding.
///
/// Integer seeds are split into little-endian 32-bit words and fed through
/// `init_by_array`, which makes the output stream identical to the generator
/// the reference maps were produced with.
#[derive(Clone)]
pub struct Mt19937 {
    state: [u32; N],
    index: usize,
}

impl Mt19937 {
    pub fn new(seed: u64) -> Self {
        let low = seed as u32;
        let high = (seed >> 32) as u32;
        if high == 0 {
            Self::from_key(&[low])
        } else {
            Self::from_key(&[low, high])
        }
    }

    /// Seed from an arbitrary key of 32-bit words. An empty key is treated as `[0]`.
    pub fn from_key(key: &[u32]) -> Self {
        let mut rng = Mt19937 {
            state: [0; N],
            index: N,
        };
        if key.is_empty() {
            rng.init_by_array(&[0]);
        } else {
            rng.init_by_array(key);
        }
        rng
    }

    fn init_genrand(&mut self, seed: u32) {
        self.state[0] = seed;
        for i in 1..N {
            let prev = self.state[i - 1];
            self.state[i] = 1_812_433_253u32
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u32);
        }
        self.index = N;
    }

    fn init_by_array(&mut self, key: &[u32]) {
        self.init_genrand(19_650_218);

        let mut i = 1;
        let mut j = 0;
        for _ in 0..N.max(key.len()) {
            let prev = self.state[i - 1];
            self.state[i] = (self.state[i] ^ (prev ^ (prev >> 30)).wrapping_mul(1_664_525))
                .wrapping_add(key[j])
                .wrapping_add(j as u32);
            i += 1;
            j += 1;
            if i >= N {
                self.state[0] = self.state[N - 1];
                i = 1;
            }
            if j >= key.len() {
                j = 0;
            }
        }
        for _ in 0..N - 1 {
            let prev = self.state[i - 1];
            self.state[i] = (self.state[i] ^ (prev ^ (prev >> 30)).wrapping_mul(1_566_083_941))
                .wrapping_sub(i as u32);
            i += 1;
            if i >= N {
                self.state[0] = self.state[N - 1];
                i = 1;
            }
        }
        // MSB is 1, assuring a non-zero initial array
        self.state[0] = 0x8000_0000;
    }

    fn twist(&mut self) {
        for kk in 0..N {
            let y = (self.state[kk] & UPPER_MASK) | (self.state[(kk + 1) % N] & LOWER_MASK);
            let mut next = self.state[(kk + M) % N] ^ (y >> 1);
            if y & 1 != 0 {
                next ^= MATRIX_A;
            }
            self.state[kk] = next;
        }
        self.index = 0;
    }

    fn genrand(&mut self) -> u32 {
        if self.index >= N {
            self.twist();
        }
        let mut y = self.state[self.index];
        self.index += 1;

        y ^= y >> 11;
        y ^= (y << 7) & 0x9d2c_5680;
        y ^= (y << 15) & 0xefc6_0000;
        y ^ (y >> 18)
    }

    /// Uniform real in [0, 1) with 53-bit resolution, built from two draws.
    pub fn random(&mut self) -> f64 {
        let a = (self.genrand() >> 5) as f64;
        let b = (self.genrand() >> 6) as f64;
        (a * 67_108_864.0 + b) * (1.0 / 9_007_199_254_740_992.0)
    }

    /// Top `k` bits of one draw, `k` in 0..=32.
    pub fn getrandbits(&mut self, k: u32) -> u32 {
        match k {
            0 => 0,
            1..=31 => self.genrand() >> (32 - k),
            _ => self.genrand(),
        }
    }

    /// Uniform integer in [0, n) by rejection on `bit_length(n)` bits.
    pub fn randbelow(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        let k = u32::BITS - n.leading_zeros();
        loop {
            let r = self.getrandbits(k);
            if r < n {
                return r;
            }
        }
    }

    /// Uniform integer in [low, high], both ends inclusive.
    pub fn randint(&mut self, low: u8, high: u8) -> u8 {
        debug_assert!(low <= high, "empty range {low}..={high}");
        let span = u32::from(high.saturating_sub(low)) + 1;
        low + self.randbelow(span) as u8
    }
}

impl RngCore for Mt19937 {
    fn next_u32(&mut self) -> u32 {
        self.genrand()
    }

    fn next_u64(&mut self) -> u64 {
        let low = u64::from(self.genrand());
        let high = u64::from(self.genrand());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.genrand().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Mt19937 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Mt19937::new(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Mt19937::new(state)
    }
}
