use sha3::{digest::{ExtendableOutput, Update, XofReader}, Shake256};

/// Source of uniform draws in `[0, 1)`.
///
/// Every stochastic step in the workspace takes one of these explicitly, so a
/// seeded or scripted source makes any run reproducible.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Deterministic SHAKE256 stream keyed by a seed.
#[derive(Clone, Debug)]
pub struct OndRng {
    state: [u8; 32],
    step: u64,
}

impl OndRng {
    pub fn new(seed: &[u8]) -> Self {
        let mut state = [0u8; 32];
        shake(&[seed, b"OND_INIT"], &mut state);
        Self { state, step: 0 }
    }

    /// Draw a value in `[0, 1)` bound to a domain-separation context.
    pub fn next_f64(&mut self, ctx: &[u8]) -> f64 {
        self.step += 1;

        let state = self.state;
        let step_bytes = self.step.to_be_bytes();
        let mut next_state = self.state;
        shake(&[&state, &step_bytes, b"QSIM"], &mut next_state);
        self.state = next_state;

        let mut out = [0u8; 8];
        shake(&[&self.state, ctx], &mut out);

        if self.state[0] < 16 {
            let state = self.state;
            let mut next_state = self.state;
            shake(&[&state, b"SKIP"], &mut next_state);
            self.state = next_state;
        }

        // top 53 bits, so 1.0 is never produced
        (u64::from_be_bytes(out) >> 11) as f64 / (1u64 << 53) as f64
    }

    pub fn steps(&self) -> u64 {
        self.step
    }
}

impl RandomSource for OndRng {
    fn next_unit(&mut self) -> f64 {
        self.next_f64(b"MEASURE")
    }
}

/// `OndRng` keyed with fresh OS entropy.
#[derive(Clone, Debug)]
pub struct EntropyRng {
    inner: OndRng,
}

impl EntropyRng {
    pub fn new() -> Self {
        let seed: [u8; 32] = rand::random();
        Self {
            inner: OndRng::new(&seed),
        }
    }
}

impl Default for EntropyRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for EntropyRng {
    fn next_unit(&mut self) -> f64 {
        self.inner.next_unit()
    }
}

/// Replays a fixed list of draws, wrapping around at the end.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    draws: Vec<f64>,
    pos: usize,
}

impl ScriptedRng {
    pub fn new(draws: impl Into<Vec<f64>>) -> Self {
        Self {
            draws: draws.into(),
            pos: 0,
        }
    }
}

impl RandomSource for ScriptedRng {
    fn next_unit(&mut self) -> f64 {
        if self.draws.is_empty() {
            return 0.0;
        }
        let v = self.draws[self.pos % self.draws.len()];
        self.pos += 1;
        v
    }
}

fn shake(parts: &[&[u8]], out: &mut [u8]) {
    let mut h = Shake256::default();
    for p in parts {
        h.update(p);
    }
    let mut r = h.finalize_xof();
    r.read(out);
}
