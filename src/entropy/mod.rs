//! Random sources for the password builder.
//!
//! The default source is `rand`'s thread-local CSPRNG, seeded from the OS.
//! [`HwRng`] mixes the CPU cycle counter into a prime-multiply state and is
//! kept as an opt-in alternative.

mod hw;
mod primes;

use rand::RngCore;
use rand::rngs::ThreadRng;
use zeroize::Zeroize;

use primes::PRIMES;

/// Which generator backs a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Source {
    #[default]
    Os,
    Hardware,
}

impl Source {
    pub fn name(self) -> &'static str {
        match self {
            Source::Os => "os (ChaCha12, OS-seeded)",
            Source::Hardware => hw::source_name(),
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Source::Os => Source::Hardware,
            Source::Hardware => Source::Os,
        }
    }

    /// Instantiate a generator for this source.
    pub fn rng(self) -> Entropy {
        log::debug!("entropy source: {}", self.name());
        match self {
            Source::Os => Entropy::Os(rand::rng()),
            Source::Hardware => Entropy::Hardware(HwRng::new()),
        }
    }
}

/// Generator chosen at runtime.
pub enum Entropy {
    Os(ThreadRng),
    Hardware(HwRng),
}

impl RngCore for Entropy {
    fn next_u32(&mut self) -> u32 {
        match self {
            Entropy::Os(r) => r.next_u32(),
            Entropy::Hardware(r) => r.next_u32(),
        }
    }

    fn next_u64(&mut self) -> u64 {
        match self {
            Entropy::Os(r) => r.next_u64(),
            Entropy::Hardware(r) => r.next_u64(),
        }
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        match self {
            Entropy::Os(r) => r.fill_bytes(dst),
            Entropy::Hardware(r) => r.fill_bytes(dst),
        }
    }
}

// =============================================================================
// Cycle-counter generator
// =============================================================================

/// State is rotated, multiplied by an entropy-selected prime and XORed with a
/// fresh cycle-counter read on every step; output goes through the SplitMix64
/// finalizer.
pub struct HwRng {
    state: u64,
}

impl HwRng {
    pub fn new() -> Self {
        HwRng { state: hw::entropy() }
    }

    #[inline(always)]
    fn step(&mut self) -> u64 {
        let ent = hw::entropy();

        let mixed = self.state ^ ent;
        let idx = ((mixed ^ (mixed >> 32)) % PRIMES.len() as u64) as usize;

        self.state = self.state.rotate_left(17).wrapping_mul(PRIMES[idx]) ^ ent;

        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }
}

impl Default for HwRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for HwRng {
    fn next_u32(&mut self) -> u32 {
        (self.step() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.step()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let bytes = self.step().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl Drop for HwRng {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}
